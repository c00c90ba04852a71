use contracts::domain::a007_expense::Expense;
use leptos::prelude::*;
use thaw::*;

use super::details::ExpenseDetails;
use crate::shared::components::list_toolbar::{ListHeader, ListStatus, RowActions, SearchPanel};
use crate::shared::components::money_cell::MoneyCell;
use crate::shared::crud::{CrudDialogs, CrudOverlays};
use crate::shared::date_utils::format_naive_date;
use crate::shared::list_state::use_list;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn ExpenseList() -> impl IntoView {
    let list = use_list::<Expense>();
    let dialogs = CrudDialogs::new(list);

    let page_total = move || list.state.with(|s| s.items.iter().map(|e| e.amount).sum::<f64>());

    view! {
        <PageFrame page_id="a007_expense--list" category=PAGE_CAT_LIST>
            <ListHeader list=list on_create=Callback::new(move |_| dialogs.open_create()) />

            <div class="page__content">
                <SearchPanel list=list placeholder="Наименование или категория..." />
                <ListStatus list=list />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=100.0>"Дата"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Наименование"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Категория"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Сумма"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Комментарий"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Автор"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.state.with(|s| s.rows())
                                key=|(key, _)| key.clone()
                                children=move |(_, expense)| {
                                    let for_edit = expense.clone();
                                    let for_delete = expense.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{format_naive_date(&expense.spent_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{expense.title.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {expense.category.clone().unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <MoneyCell value=expense.amount outgoing=true />
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {expense.note.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {expense.created_by.clone().unwrap_or_default()}
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

                <div class="table-summary">
                    "Итого на странице: "
                    <strong>{move || format_money(page_total())}</strong>
                </div>
            </div>

            {move || dialogs.form.get().map(|mode| view! {
                <ExpenseDetails
                    mode=mode
                    on_saved=Callback::new(move |_| dialogs.saved())
                    on_close=Callback::new(move |_| dialogs.close_form())
                />
            })}
            <CrudOverlays dialogs=dialogs />
        </PageFrame>
    }
}
