use contracts::domain::a004_material::Material;
use leptos::prelude::*;
use thaw::*;

use super::details::MaterialDetails;
use crate::shared::components::list_toolbar::{ListHeader, ListStatus, RowActions, SearchPanel};
use crate::shared::components::money_cell::{MoneyCell, QuantityCell};
use crate::shared::crud::{CrudDialogs, CrudOverlays};
use crate::shared::list_state::use_list;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn MaterialList() -> impl IntoView {
    let list = use_list::<Material>();
    let dialogs = CrudDialogs::new(list);

    let page_stock_value = move || {
        list.state
            .with(|s| s.items.iter().map(Material::stock_value).sum::<f64>())
    };

    view! {
        <PageFrame page_id="a004_material--list" category=PAGE_CAT_LIST>
            <ListHeader list=list on_create=Callback::new(move |_| dialogs.open_create()) />

            <div class="page__content">
                <SearchPanel list=list placeholder="Название материала..." />
                <ListStatus list=list />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=200.0>"Название"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Тип"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Остаток"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Цена"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Стоимость"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.state.with(|s| s.rows())
                                key=|(key, _)| key.clone()
                                children=move |(_, material)| {
                                    let stock_value = material.stock_value();
                                    let type_name = material
                                        .material_type_name
                                        .clone()
                                        .unwrap_or_else(|| material.material_type_id.clone());
                                    let for_edit = material.clone();
                                    let for_delete = material.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{material.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {type_name}
                                                </TableCellLayout>
                                            </TableCell>
                                            <QuantityCell value=material.quantity unit=material.unit.clone() />
                                            <MoneyCell value=material.price />
                                            <MoneyCell value=stock_value />
                                            <TableCell>
                                                <RowActions
                                                    on_edit=Callback::new(move |_| dialogs.open_edit(for_edit.clone()))
                                                    on_delete=Callback::new(move |_| dialogs.ask_delete(for_delete.clone()))
                                                />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <div class="table-summary">
                    "Стоимость остатков на странице: "
                    <strong>{move || format_money(page_stock_value())}</strong>
                </div>
            </div>

            {move || dialogs.form.get().map(|mode| view! {
                <MaterialDetails
                    mode=mode
                    on_saved=Callback::new(move |_| dialogs.saved())
                    on_close=Callback::new(move |_| dialogs.close_form())
                />
            })}
            <CrudOverlays dialogs=dialogs />
        </PageFrame>
    }
}
