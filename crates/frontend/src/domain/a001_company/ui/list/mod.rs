use contracts::domain::a001_company::Company;
use leptos::prelude::*;
use thaw::*;

use super::details::CompanyDetails;
use crate::shared::components::list_toolbar::{ListHeader, ListStatus, RowActions, SearchPanel};
use crate::shared::components::row_status::RowStatusSelect;
use crate::shared::crud::{CrudDialogs, CrudOverlays};
use crate::shared::date_utils::format_date;
use crate::shared::list_state::use_list;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::phone_mask::format_uz_phone;

#[component]
pub fn CompanyList() -> impl IntoView {
    let list = use_list::<Company>();
    let dialogs = CrudDialogs::new(list);

    view! {
        <PageFrame page_id="a001_company--list" category=PAGE_CAT_LIST>
            <ListHeader list=list on_create=Callback::new(move |_| dialogs.open_create()) />

            <div class="page__content">
                <SearchPanel list=list placeholder="Название, телефон или ИНН..." />
                <ListStatus list=list />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=200.0>"Название"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Телефон"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Адрес"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"ИНН"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Статус"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Создана"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.state.with(|s| s.rows())
                                key=|(key, _)| key.clone()
                                children=move |(_, company)| {
                                    let id = company.id.clone();
                                    let flash_id = company.id.clone();
                                    let for_edit = company.clone();
                                    let for_delete = company.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{company.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_uz_phone(&company.phone)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {company.address.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {company.inn.clone().unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
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
                                                <TableCellLayout>{format_date(&company.created_at)}</TableCellLayout>
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
                <CompanyDetails
                    mode=mode
                    on_saved=Callback::new(move |_| dialogs.saved())
                    on_close=Callback::new(move |_| dialogs.close_form())
                />
            })}
            <CrudOverlays dialogs=dialogs />
        </PageFrame>
    }
}
