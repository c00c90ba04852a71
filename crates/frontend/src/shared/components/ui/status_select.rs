use std::future::Future;
use std::pin::Pin;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::dropdown_panel::DropdownPanel;
use crate::shared::dropdown::{
    label_for, use_overlay, DropdownVariant, SelectOption, SelectOutcome, TimerSlot,
    STATUS_CLOSE_DELAY_MS, SUCCESS_FLASH_MS,
};
use crate::shared::icons::icon;

/// Результат асинхронной смены статуса; `Err` содержит текст для пользователя
pub type StatusChangeFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Колбэк `(id записи, новый статус)`
pub type StatusChangeCallback = Callback<(String, String), StatusChangeFuture>;

/// Выпадающий список статуса записи прямо в строке таблицы.
///
/// С `on_status_change` выбор другого значения вызывает колбэк один раз,
/// держит список открытым до ответа, показывает галочку и закрывается
/// через 1.5 с. Пока ответ не пришёл, выбор и закрытие заблокированы.
/// Ошибка показывается в панели, список остаётся открытым для повтора.
#[component]
pub fn StatusSelect(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    /// Синхронный выбор (используется, когда нет `on_status_change`)
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(optional)] on_status_change: Option<StatusChangeCallback>,
    /// Идентификатор записи для `on_status_change`
    #[prop(optional, into)]
    item_id: MaybeProp<String>,
    /// Внешняя мутация в процессе: кнопка неактивна и полупрозрачна
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    /// Импульс от родителя: показать галочку на 2 с
    #[prop(optional, into)]
    show_success: MaybeProp<bool>,
    #[prop(optional)] searchable: bool,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let handle = use_overlay(DropdownVariant::Status);
    let machine = handle.machine;
    let close_timer = TimerSlot::new();
    let flash_timer = TimerSlot::new();
    let flash = RwSignal::new(false);

    let is_loading = move || loading.get().unwrap_or(false);
    let is_disabled = move || disabled.get().unwrap_or(false) || is_loading();

    Effect::new(move |prev: Option<bool>| {
        let pulse = show_success.get().unwrap_or(false);
        if pulse && prev != Some(true) {
            flash.set(true);
            flash_timer.schedule(SUCCESS_FLASH_MS, move || {
                let _ = flash.try_set(false);
            });
        }
        pulse
    });

    let display = move || {
        let shown = machine
            .with(|m| m.pending_value().map(str::to_string))
            .unwrap_or_else(|| value.get());
        options
            .with(|o| label_for(o, &shown).map(str::to_string))
            .or_else(|| placeholder.get())
            .unwrap_or_else(|| "—".to_string())
    };
    let show_check = move || flash.get() || machine.with(|m| m.commit_succeeded());

    let on_pick = Callback::new(move |picked: String| {
        let current = value.get_untracked();
        let current = (!current.is_empty()).then_some(current);
        let blocked = disabled.get_untracked().unwrap_or(false)
            || loading.get_untracked().unwrap_or(false);
        let outcome = machine
            .try_update(|m| {
                m.select_status(
                    current.as_deref(),
                    &picked,
                    on_status_change.is_some(),
                    blocked,
                )
            })
            .unwrap_or(SelectOutcome::Ignored);

        match outcome {
            SelectOutcome::Changed(v) => {
                if let Some(cb) = on_change {
                    cb.run(v);
                }
            }
            SelectOutcome::Commit(v) => {
                let Some(commit) = on_status_change else {
                    return;
                };
                let id = item_id.get_untracked().unwrap_or_default();
                log::debug!("status change {} -> {}", id, v);
                let pending = commit.run((id.clone(), v));
                spawn_local(async move {
                    let result = pending.await;
                    if let Err(e) = &result {
                        log::warn!("status change for {} failed: {}", id, e);
                    }
                    let ticket = machine.try_update(|m| m.settle(result)).flatten();
                    if let Some(ticket) = ticket {
                        close_timer.schedule(STATUS_CLOSE_DELAY_MS, move || {
                            let _ = machine.try_update(|m| m.finish_close(ticket));
                        });
                    }
                });
            }
            SelectOutcome::Closed | SelectOutcome::Ignored => {}
        }
    });

    // закрытие любым путём отменяет отложенное автозакрытие
    Effect::new(move |_| {
        if !handle.is_open.get() {
            close_timer.cancel();
        }
    });

    view! {
        <div class="status-select">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <div node_ref=handle.anchor_ref class="dropdown dropdown--status">
                <button
                    type="button"
                    class="dropdown__trigger"
                    class:dropdown__trigger--open=move || handle.is_open.get()
                    class:dropdown__trigger--busy=move || is_loading() || machine.with(|m| m.is_pending())
                    style=move || if is_loading() { "opacity: 0.6;" } else { "" }
                    disabled=is_disabled
                    on:click=move |_| handle.toggle(is_disabled())
                >
                    <span class="dropdown__value">{display}</span>
                    {move || {
                        if machine.with(|m| m.is_pending()) {
                            view! { <span class="spinner spinner--sm"></span> }.into_any()
                        } else if show_check() {
                            view! { <span class="status-select__check">{icon("check")}</span> }.into_any()
                        } else {
                            icon("chevron-down")
                        }
                    }}
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
