use contracts::system::permissions::Permission;
use contracts::system::roles::{Role, RoleDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::crud::{optional_text, required_text, submit_form, FormMode};
use crate::system::roles::api;

/// Разрешения, сгруппированные по префиксу кода; порядок групп как в справочнике
pub fn group_permissions(items: &[Permission]) -> Vec<(String, Vec<Permission>)> {
    let mut groups: Vec<(String, Vec<Permission>)> = Vec::new();
    for p in items {
        match groups.iter_mut().find(|(g, _)| g == p.group()) {
            Some((_, list)) => list.push(p.clone()),
            None => groups.push((p.group().to_string(), vec![p.clone()])),
        }
    }
    groups
}

#[component]
pub fn RoleDetails(
    mode: FormMode<Role>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = mode.item().map(|r| r.id.clone());
    let dto = RwSignal::new(mode.item().map(RoleDto::from).unwrap_or_default());
    let name = RwSignal::new(dto.with_untracked(|d| d.name.clone()));
    let description = RwSignal::new(dto.with_untracked(|d| d.description.clone().unwrap_or_default()));
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let permissions = RwSignal::new(Vec::<Permission>::new());
    let permissions_loaded = RwSignal::new(false);
    spawn_local(async move {
        match api::fetch_permissions().await {
            Ok(items) => {
                let _ = permissions.try_set(items);
            }
            Err(e) => {
                log::warn!("lookup permissions: {}", e);
                let _ = error.try_set(Some(e.to_string()));
            }
        }
        let _ = permissions_loaded.try_set(true);
    });

    let on_submit = Callback::new(move |_| {
        let name = match required_text(&name.get_untracked(), "Название") {
            Ok(name) => name,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let mut body = dto.get_untracked();
        body.name = name;
        body.description = optional_text(&description.get_untracked());
        let id = id.clone();
        submit_form(saving, error, on_saved, async move {
            api::save_role(id.as_deref(), &body).await
        });
    });

    view! {
        <FormModal
            title=mode.title()
            error=error
            saving=saving
            on_submit=on_submit
            on_close=on_close
        >
            <Input label="Название" value=name required=true disabled=saving />
            <Textarea label="Описание" value=description rows=2 disabled=saving />

            <div class="form__group">
                <label class="form__label">
                    "Разрешения "
                    <span class="form__counter">{move || dto.with(|d| d.permission_ids.len())}</span>
                </label>
                {move || (permissions_loaded.get() && permissions.with(Vec::is_empty)).then(|| view! {
                    <div class="form__hint">"Справочник разрешений пуст"</div>
                })}
                <div class="permission-groups">
                    <For
                        each=move || permissions.with(|p| group_permissions(p))
                        key=|(group, _)| group.clone()
                        children=move |(group, items)| view! {
                            <fieldset class="permission-group">
                                <legend>{group}</legend>
                                {items.into_iter().map(|p| {
                                    let pid = p.id.clone();
                                    let checked_id = p.id.clone();
                                    view! {
                                        <label class="checkbox" title=p.description.clone().unwrap_or_default()>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || dto.with(|d| d.permission_ids.contains(&checked_id))
                                                disabled=move || saving.get()
                                                on:change=move |ev| {
                                                    let enabled = event_target_checked(&ev);
                                                    dto.update(|d| d.toggle_permission(&pid, enabled));
                                                }
                                            />
                                            <span>{p.name.clone()}</span>
                                            <code class="checkbox__hint">{p.code.clone()}</code>
                                        </label>
                                    }
                                }).collect_view()}
                            </fieldset>
                        }
                    />
                </div>
            </div>
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(id: &str, code: &str) -> Permission {
        Permission {
            id: id.into(),
            code: code.into(),
            name: code.into(),
            description: None,
        }
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let items = vec![
            perm("1", "sales.view"),
            perm("2", "users.manage"),
            perm("3", "sales.edit"),
        ];
        let groups = group_permissions(&items);
        let names: Vec<&str> = groups.iter().map(|(g, _)| g.as_str()).collect();
        assert_eq!(names, vec!["sales", "users"]);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[1].id, "3");
    }
}
