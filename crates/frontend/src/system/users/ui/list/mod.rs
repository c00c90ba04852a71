use contracts::system::permissions::codes;
use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

use super::details::UserDetails;
use crate::shared::components::list_toolbar::{ListHeader, ListStatus, RowActions, SearchPanel};
use crate::shared::components::row_status::RowStatusSelect;
use crate::shared::crud::{CrudDialogs, CrudOverlays};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_state::use_list;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::phone_mask::format_uz_phone;
use crate::system::auth::guard::RequirePermission;

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequirePermission permission=codes::USERS_MANAGE>
            <UsersList />
        </RequirePermission>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let list = use_list::<User>();
    let dialogs = CrudDialogs::new(list);

    view! {
        <PageFrame page_id="sys_users--system" category=PAGE_CAT_SYSTEM>
            <ListHeader list=list on_create=Callback::new(move |_| dialogs.open_create()) />

            <div class="page__content">
                <SearchPanel list=list placeholder="Логин или ФИО..." />
                <ListStatus list=list />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=140.0>"Логин"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"ФИО"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Телефон"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Роль"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Статус"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Последний вход"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.state.with(|s| s.rows())
                                key=|(key, _)| key.clone()
                                children=move |(_, user)| {
                                    let flash_id = user.id.clone();
                                    let for_edit = user.clone();
                                    let for_delete = user.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <code>{user.username.clone()}</code>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user.full_name.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {user.phone.as_deref().map(format_uz_phone).unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {user.role_name.clone().unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RowStatusSelect
                                                    list=list
                                                    id=user.id.clone()
                                                    show_success=Signal::derive(move || {
                                                        dialogs.last_saved.with(|s| s.as_deref() == Some(flash_id.as_str()))
                                                    })
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {user
                                                        .last_login_at
                                                        .as_deref()
                                                        .map(format_datetime)
                                                        .unwrap_or_else(|| "Никогда".to_string())}
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
                <UserDetails
                    mode=mode
                    on_saved=Callback::new(move |_| dialogs.saved())
                    on_close=Callback::new(move |_| dialogs.close_form())
                />
            })}
            <CrudOverlays dialogs=dialogs />
        </PageFrame>
    }
}
