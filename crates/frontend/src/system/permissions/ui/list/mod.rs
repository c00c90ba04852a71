use contracts::system::permissions::{codes, Permission};
use leptos::prelude::*;
use thaw::*;

use super::details::PermissionDetails;
use crate::shared::components::list_toolbar::{ListHeader, ListStatus, RowActions, SearchPanel};
use crate::shared::crud::{CrudDialogs, CrudOverlays};
use crate::shared::list_state::use_list;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::guard::RequirePermission;

#[component]
pub fn PermissionsListPage() -> impl IntoView {
    view! {
        <RequirePermission permission=codes::ROLES_MANAGE>
            <PermissionsList />
        </RequirePermission>
    }
}

#[component]
fn PermissionsList() -> impl IntoView {
    let list = use_list::<Permission>();
    let dialogs = CrudDialogs::new(list);

    view! {
        <PageFrame page_id="sys_permissions--system" category=PAGE_CAT_SYSTEM>
            <ListHeader list=list on_create=Callback::new(move |_| dialogs.open_create()) />

            <div class="page__content">
                <SearchPanel list=list placeholder="Код или название..." />
                <ListStatus list=list />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=180.0>"Код"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Название"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Группа"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=260.0>"Описание"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.state.with(|s| s.rows())
                                key=|(key, _)| key.clone()
                                children=move |(_, permission)| {
                                    let group = permission.group().to_string();
                                    let for_edit = permission.clone();
                                    let for_delete = permission.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <code>{permission.code.clone()}</code>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{permission.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>{group}</Badge>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {permission.description.clone().unwrap_or_default()}
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
                <PermissionDetails
                    mode=mode
                    on_saved=Callback::new(move |_| dialogs.saved())
                    on_close=Callback::new(move |_| dialogs.close_form())
                />
            })}
            <CrudOverlays dialogs=dialogs />
        </PageFrame>
    }
}
