use contracts::system::permissions::codes;
use contracts::system::roles::Role;
use leptos::prelude::*;
use thaw::*;

use super::details::RoleDetails;
use crate::shared::components::list_toolbar::{ListHeader, ListStatus, RowActions, SearchPanel};
use crate::shared::crud::{CrudDialogs, CrudOverlays};
use crate::shared::list_state::use_list;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::guard::RequirePermission;

#[component]
pub fn RolesListPage() -> impl IntoView {
    view! {
        <RequirePermission permission=codes::ROLES_MANAGE>
            <RolesList />
        </RequirePermission>
    }
}

#[component]
fn RolesList() -> impl IntoView {
    let list = use_list::<Role>();
    let dialogs = CrudDialogs::new(list);

    view! {
        <PageFrame page_id="sys_roles--system" category=PAGE_CAT_SYSTEM>
            <ListHeader list=list on_create=Callback::new(move |_| dialogs.open_create()) />

            <div class="page__content">
                <SearchPanel list=list placeholder="Название роли..." />
                <ListStatus list=list />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=180.0>"Название"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=280.0>"Описание"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Разрешений"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.state.with(|s| s.rows())
                                key=|(key, _)| key.clone()
                                children=move |(_, role)| {
                                    let for_edit = role.clone();
                                    let for_delete = role.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-weight: 500;">{role.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {role.description.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Badge>{role.permission_ids.len().to_string()}</Badge>
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
                <RoleDetails
                    mode=mode
                    on_saved=Callback::new(move |_| dialogs.saved())
                    on_close=Callback::new(move |_| dialogs.close_form())
                />
            })}
            <CrudOverlays dialogs=dialogs />
        </PageFrame>
    }
}
