use contracts::domain::a002_product::Product;
use leptos::prelude::*;
use thaw::*;

use super::details::ProductDetails;
use crate::shared::components::list_toolbar::{ListHeader, ListStatus, RowActions, SearchPanel};
use crate::shared::components::money_cell::{MoneyCell, QuantityCell};
use crate::shared::components::row_status::RowStatusSelect;
use crate::shared::crud::{CrudDialogs, CrudOverlays};
use crate::shared::list_state::use_list;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn ProductList() -> impl IntoView {
    let list = use_list::<Product>();
    let dialogs = CrudDialogs::new(list);

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <ListHeader list=list on_create=Callback::new(move |_| dialogs.open_create()) />

            <div class="page__content">
                <SearchPanel list=list placeholder="Название товара..." />
                <ListStatus list=list />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=200.0>"Название"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Компания"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Цена"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Остаток"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=170.0>"Статус"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.state.with(|s| s.rows())
                                key=|(key, _)| key.clone()
                                children=move |(_, product)| {
                                    let flash_id = product.id.clone();
                                    let for_edit = product.clone();
                                    let for_delete = product.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{product.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {product.company_name.clone().unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <MoneyCell value=product.price />
                                            <QuantityCell value=product.quantity unit=product.unit.clone() />
                                            <TableCell>
                                                <RowStatusSelect
                                                    list=list
                                                    id=product.id.clone()
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
                <ProductDetails
                    mode=mode
                    on_saved=Callback::new(move |_| dialogs.saved())
                    on_close=Callback::new(move |_| dialogs.close_form())
                />
            })}
            <CrudOverlays dialogs=dialogs />
        </PageFrame>
    }
}
