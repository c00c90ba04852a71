use contracts::domain::a006_payment::Payment;
use contracts::enums::LabeledEnum;
use leptos::prelude::*;
use thaw::*;

use super::details::PaymentDetails;
use crate::shared::components::list_toolbar::{ListHeader, ListStatus, RowActions, SearchPanel};
use crate::shared::components::money_cell::MoneyCell;
use crate::shared::components::ui::StatusBadge;
use crate::shared::crud::{CrudDialogs, CrudOverlays};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_state::use_list;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn PaymentList() -> impl IntoView {
    let list = use_list::<Payment>();
    let dialogs = CrudDialogs::new(list);

    view! {
        <PageFrame page_id="a006_payment--list" category=PAGE_CAT_LIST>
            <ListHeader list=list on_create=Callback::new(move |_| dialogs.open_create()) />

            <div class="page__content">
                <SearchPanel list=list placeholder="Компания или комментарий..." />
                <ListStatus list=list />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=130.0>"Дата"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Компания"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Сумма"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Способ"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Продажа"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Комментарий"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.state.with(|s| s.rows())
                                key=|(key, _)| key.clone()
                                children=move |(_, payment)| {
                                    let for_edit = payment.clone();
                                    let for_delete = payment.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(&payment.paid_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {payment.company_name.clone().unwrap_or_else(|| payment.company_id.clone())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <MoneyCell value=payment.amount />
                                            <TableCell>
                                                <StatusBadge value=payment.method.as_str() label=payment.method.label() />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {payment.sale_id.as_ref().map(|id| format!("№{}", id)).unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {payment.note.clone().unwrap_or_default()}
                                                </TableCellLayout>
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
                <PaymentDetails
                    mode=mode
                    on_saved=Callback::new(move |_| dialogs.saved())
                    on_close=Callback::new(move |_| dialogs.close_form())
                />
            })}
            <CrudOverlays dialogs=dialogs />
        </PageFrame>
    }
}
