use leptos::prelude::*;

use super::dropdown_panel::DropdownPanel;
use crate::shared::dropdown::{label_for, use_overlay, DropdownVariant, SelectOption, SelectOutcome};
use crate::shared::icons::icon;

/// Выпадающий список с плавающей панелью и поиском
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    /// Текущее значение; пустая строка: ничего не выбрано
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// Поле поиска (появляется, если вариантов больше трёх)
    #[prop(optional)]
    searchable: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let handle = use_overlay(DropdownVariant::Plain);
    let is_disabled = move || disabled.get().unwrap_or(false);

    let display = move || {
        let current = value.get();
        options
            .with(|o| label_for(o, &current).map(str::to_string))
            .or_else(|| placeholder.get())
            .unwrap_or_else(|| "Выберите...".to_string())
    };
    let has_value = move || options.with(|o| label_for(o, &value.get()).is_some());

    let on_pick = Callback::new(move |picked: String| {
        let blocked = disabled.get_untracked().unwrap_or(false);
        let outcome = handle
            .machine
            .try_update(|m| m.select_plain(&picked, blocked))
            .unwrap_or(SelectOutcome::Ignored);
        if let SelectOutcome::Changed(v) = outcome {
            if let Some(cb) = on_change {
                cb.run(v);
            }
        }
    });

    view! {
        <div class=move || format!("form__group {}", class.get().unwrap_or_default())>
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <div node_ref=handle.anchor_ref class="dropdown">
                <button
                    type="button"
                    class="dropdown__trigger"
                    class:dropdown__trigger--open=move || handle.is_open.get()
                    class:dropdown__trigger--placeholder=move || !has_value()
                    disabled=is_disabled
                    on:click=move |_| handle.toggle(is_disabled())
                >
                    <span class="dropdown__value">{display}</span>
                    {icon("chevron-down")}
                </button>
            </div>
            <DropdownPanel
                handle=handle
                options=options
                selected=value
                searchable=searchable
                blocked=Signal::derive(is_disabled)
                on_pick=on_pick
            />
        </div>
    }
}
