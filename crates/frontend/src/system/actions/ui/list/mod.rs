use contracts::system::actions::Action;
use contracts::system::permissions::codes;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_toolbar::{ListHeader, ListStatus, SearchPanel};
use crate::shared::components::ui::{Badge, BadgeTone};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_state::use_list;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::guard::RequirePermission;

/// Цвет бейджа по типу действия
pub fn action_tone(action: &str) -> BadgeTone {
    match action {
        "create" => BadgeTone::Success,
        "update" | "status" => BadgeTone::Primary,
        "delete" => BadgeTone::Error,
        "login_failed" => BadgeTone::Warning,
        _ => BadgeTone::Neutral,
    }
}

#[component]
pub fn ActionsListPage() -> impl IntoView {
    view! {
        <RequirePermission permission=codes::ACTIONS_VIEW>
            <ActionsList />
        </RequirePermission>
    }
}

#[component]
fn ActionsList() -> impl IntoView {
    let list = use_list::<Action>();
    let expanded = RwSignal::new(None::<String>);

    let toggle = move |id: String| {
        expanded.update(|current| {
            *current = if current.as_deref() == Some(id.as_str()) {
                None
            } else {
                Some(id)
            };
        });
    };

    view! {
        <PageFrame page_id="sys_actions--system" category=PAGE_CAT_SYSTEM>
            <ListHeader list=list />

            <div class="page__content">
                <SearchPanel list=list placeholder="Пользователь, действие или объект..." />
                <ListStatus list=list />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=140.0>"Время"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Пользователь"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Действие"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Объект"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"ID"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.state.with(|s| s.rows())
                                key=|(key, _)| key.clone()
                                children=move |(_, action)| {
                                    let details = action.details_pretty();
                                    let has_details = details.is_some();
                                    let row_id = action.id.clone();
                                    let tone = action_tone(&action.action);
                                    let actor = action
                                        .username
                                        .clone()
                                        .or_else(|| action.user_id.clone())
                                        .unwrap_or_else(|| "система".to_string());
                                    let open_id = action.id.clone();
                                    let is_open = move || expanded.with(|e| e.as_deref() == Some(open_id.as_str()));
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(&action.created_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {actor}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Badge tone=tone>{action.action.clone()}</Badge>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{action.entity.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{action.entity_id.clone().unwrap_or_default()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {has_details.then(|| view! {
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| toggle(row_id.clone())
                                                        attr:title="Подробности"
                                                    >
                                                        {icon("chevron-down")}
                                                    </Button>
                                                })}
                                            </TableCell>
                                        </TableRow>
                                        {details.map(|text| view! {
                                            <Show when=is_open>
                                                <tr class="table-details-row">
                                                    <td colspan="6">
                                                        <pre class="json-details">{text.clone()}</pre>
                                                    </td>
                                                </tr>
                                            </Show>
                                        })}
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destructive_actions_stand_out() {
        assert_eq!(action_tone("delete"), BadgeTone::Error);
        assert_eq!(action_tone("create"), BadgeTone::Success);
        assert_eq!(action_tone("login"), BadgeTone::Neutral);
    }
}
