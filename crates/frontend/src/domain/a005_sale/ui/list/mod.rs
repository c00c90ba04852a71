use contracts::domain::a005_sale::Sale;
use leptos::prelude::*;
use thaw::*;

use super::details::SaleDetails;
use crate::shared::components::list_toolbar::{ListHeader, ListStatus, RowActions, SearchPanel};
use crate::shared::components::money_cell::MoneyCell;
use crate::shared::components::row_status::RowStatusSelect;
use crate::shared::crud::{CrudDialogs, CrudOverlays};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_state::use_list;
use crate::shared::number_format::format_quantity;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn SaleList() -> impl IntoView {
    let list = use_list::<Sale>();
    let dialogs = CrudDialogs::new(list);

    view! {
        <PageFrame page_id="a005_sale--list" category=PAGE_CAT_LIST>
            <ListHeader list=list on_create=Callback::new(move |_| dialogs.open_create()) />

            <div class="page__content">
                <SearchPanel list=list placeholder="Компания или товар..." />
                <ListStatus list=list />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=70.0>"№"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Дата"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Компания"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Товар"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Кол-во"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Сумма"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Статус"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.state.with(|s| s.rows())
                                key=|(key, _)| key.clone()
                                children=move |(_, sale)| {
                                    let id = sale.id.clone();
                                    let flash_id = sale.id.clone();
                                    let company = sale.company_name.clone().unwrap_or_else(|| sale.company_id.clone());
                                    let product = sale.product_name.clone().unwrap_or_else(|| sale.product_id.clone());
                                    let for_edit = sale.clone();
                                    let for_delete = sale.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{sale.id.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(&sale.created_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {company}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {product}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell attr:style="text-align: right;">
                                                <TableCellLayout>{format_quantity(sale.quantity)}</TableCellLayout>
                                            </TableCell>
                                            <MoneyCell value=sale.total_amount />
                                            <TableCell>
                                                <RowStatusSelect
                                                    list=list
                                                    id=id
                                                    show_success=Signal::derive(move || {
                                                        dialogs.last_saved.with(|s| s.as_deref() == Some(flash_id.as_str()))
                                                    })
                                                />
                                            </TableCell>
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
            </div>

            {move || dialogs.form.get().map(|mode| view! {
                <SaleDetails
                    mode=mode
                    on_saved=Callback::new(move |_| dialogs.saved())
                    on_close=Callback::new(move |_| dialogs.close_form())
                />
            })}
            <CrudOverlays dialogs=dialogs />
        </PageFrame>
    }
}
