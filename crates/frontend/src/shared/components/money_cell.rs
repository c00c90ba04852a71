use leptos::prelude::*;
use thaw::*;

use crate::shared::number_format::{format_money, format_quantity};

/// Ячейка суммы: выравнивание вправо, разделители разрядов, «сўм»
#[component]
pub fn MoneyCell(
    value: f64,
    /// Красным, если сумма уходит (расходы)
    #[prop(optional)]
    outgoing: bool,
) -> impl IntoView {
    let style = if outgoing {
        "text-align: right; color: var(--color-error);"
    } else {
        "text-align: right;"
    };
    view! {
        <TableCell attr:style=style>
            <TableCellLayout>{format_money(value)}</TableCellLayout>
        </TableCell>
    }
}

/// Ячейка количества с единицей измерения
#[component]
pub fn QuantityCell(value: f64, #[prop(into)] unit: String) -> impl IntoView {
    view! {
        <TableCell attr:style="text-align: right;">
            <TableCellLayout>{format!("{} {}", format_quantity(value), unit)}</TableCellLayout>
        </TableCell>
    }
}
