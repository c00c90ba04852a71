use leptos::portal::Portal;
use leptos::prelude::*;

use crate::shared::dropdown::{panel_rows, search_visible, OverlayHandle, PanelRows, SelectOption};
use crate::shared::icons::icon;

/// Плавающая панель вариантов, общая для `Select` и `StatusSelect`.
///
/// Рендерится в `<body>` через портал, поэтому не обрезается
/// `overflow: hidden` таблиц и модальных окон.
#[component]
pub fn DropdownPanel(
    handle: OverlayHandle,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    /// Текущее значение (подсвечивается галочкой)
    #[prop(into)]
    selected: Signal<String>,
    searchable: bool,
    /// Внешняя блокировка: варианты видны, но выбор не принимается
    #[prop(optional, into)]
    blocked: MaybeProp<bool>,
    on_pick: Callback<String>,
) -> impl IntoView {
    let machine = handle.machine;

    view! {
        <Show when=move || handle.is_open.get()>
            <Portal>
                <div
                    node_ref=handle.overlay_ref
                    class="dropdown-overlay"
                    class:dropdown-overlay--locked=move || blocked.get().unwrap_or(false) || machine.with(|m| m.is_locked())
                    style=move || handle.position.get().to_style()
                >
                    {move || {
                        search_visible(searchable, options.with(|o| o.len())).then(|| view! {
                            <div class="dropdown-overlay__search">
                                {icon("search")}
                                <input
                                    type="text"
                                    class="dropdown-overlay__search-input"
                                    placeholder="Поиск..."
                                    autofocus=true
                                    prop:value=move || machine.with(|m| m.query().to_string())
                                    on:input=move |ev| {
                                        let text = event_target_value(&ev);
                                        machine.update(|m| m.set_query(text));
                                    }
                                />
                            </div>
                        })
                    }}

                    <ul class="dropdown-overlay__list" role="listbox">
                        {move || {
                            let rows = options.with(|o| {
                                machine.with(|m| panel_rows(o, m.query()))
                            });
                            let visible = match rows {
                                PanelRows::Options(visible) => visible,
                                PanelRows::NoResults => {
                                    return view! {
                                        <li class="dropdown-overlay__empty">"Ничего не найдено"</li>
                                    }.into_any();
                                }
                            };
                            visible
                                .into_iter()
                                .map(|opt| {
                                    let value = opt.value.clone();
                                    let for_selected = opt.value.clone();
                                    let for_pending = opt.value.clone();
                                    let is_selected = move || selected.with(|s| *s == for_selected);
                                    let is_pending = move || {
                                        machine.with(|m| m.pending_value() == Some(for_pending.as_str()))
                                    };
                                    let selected_class = is_selected.clone();
                                    let pending_class = is_pending.clone();
                                    view! {
                                        <li
                                            class="dropdown-overlay__option"
                                            class:is-selected=selected_class
                                            class:is-pending=pending_class
                                            role="option"
                                            on:click=move |_| on_pick.run(value.clone())
                                        >
                                            <span class="dropdown-overlay__label">{opt.label}</span>
                                            {move || {
                                                if is_pending() {
                                                    Some(view! { <span class="spinner spinner--sm"></span> }.into_any())
                                                } else if is_selected() {
                                                    Some(icon("check"))
                                                } else {
                                                    None
                                                }
                                            }}
                                        </li>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </ul>

                    {move || machine.with(|m| m.commit_error().map(|e| e.to_string())).map(|e| view! {
                        <div class="dropdown-overlay__error">{e}</div>
                    })}
                </div>
            </Portal>
        </Show>
    }
}
