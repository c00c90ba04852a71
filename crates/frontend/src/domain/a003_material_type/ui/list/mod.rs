use contracts::domain::a003_material_type::MaterialType;
use leptos::prelude::*;
use thaw::*;

use super::details::MaterialTypeDetails;
use crate::shared::components::list_toolbar::{ListHeader, ListStatus, RowActions, SearchPanel};
use crate::shared::crud::{CrudDialogs, CrudOverlays};
use crate::shared::date_utils::format_date;
use crate::shared::list_state::use_list;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn MaterialTypeList() -> impl IntoView {
    let list = use_list::<MaterialType>();
    let dialogs = CrudDialogs::new(list);

    view! {
        <PageFrame page_id="a003_material_type--list" category=PAGE_CAT_LIST>
            <ListHeader list=list on_create=Callback::new(move |_| dialogs.open_create()) />

            <div class="page__content">
                <SearchPanel list=list placeholder="Название..." />
                <ListStatus list=list />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=200.0>"Название"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=300.0>"Описание"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Создан"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.state.with(|s| s.rows())
                                key=|(key, _)| key.clone()
                                children=move |(_, item)| {
                                    let for_edit = item.clone();
                                    let for_delete = item.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{item.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.description.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date(&item.created_at)}</TableCellLayout>
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
                <MaterialTypeDetails
                    mode=mode
                    on_saved=Callback::new(move |_| dialogs.saved())
                    on_close=Callback::new(move |_| dialogs.close_form())
                />
            })}
            <CrudOverlays dialogs=dialogs />
        </PageFrame>
    }
}
