//! Боковое меню с раскрывающимися группами

use crate::layout::global_context::use_app_context;
use crate::layout::pages::{menu_groups, MenuGroup};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

/// Группа, в которой лежит страница
fn group_of(groups: &[MenuGroup], key: &str) -> Option<&'static str> {
    groups
        .iter()
        .find(|g| g.items.iter().any(|i| i.key == key))
        .map(|g| g.id)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, _) = use_auth();

    let groups = menu_groups();
    // При старте раскрыта группа активной страницы
    let initially_expanded: Vec<&'static str> = ctx
        .active
        .with_untracked(|key| group_of(&groups, key))
        .into_iter()
        .collect();
    let expanded_groups = RwSignal::new(initially_expanded);

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let gid = group.id;
                let visible = move || auth_state.with(|s| group.visible_for(|p| s.can(p)));
                let is_expanded = move || expanded_groups.with(|items| items.contains(&gid));

                view! {
                    <Show when=visible>
                        <div class="app-sidebar__group">
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    expanded_groups.update(|items| {
                                        if let Some(pos) = items.iter().position(|x| *x == gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {group.items.iter().map(|item| {
                                        let key = item.key;
                                        view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || ctx.active.with(|a| a == key)
                                                style:padding-left="10px"
                                                on:click=move |_| ctx.open_page(key)
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(item.icon)}
                                                    <span>{item.label()}</span>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>
                        </div>
                    </Show>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_group_of_page() {
        let groups = menu_groups();
        assert_eq!(group_of(&groups, "a006_payment"), Some("operations"));
        assert_eq!(group_of(&groups, "sys_roles"), Some("administration"));
        assert_eq!(group_of(&groups, "missing"), None);
    }
}
