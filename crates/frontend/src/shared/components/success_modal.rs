use leptos::prelude::*;

use crate::shared::config::SUCCESS_MODAL_MS;
use crate::shared::dropdown::TimerSlot;
use crate::shared::icons::icon;

/// Короткое уведомление об успешной операции; закрывается само через 2 с
#[component]
pub fn SuccessModal(
    #[prop(into)] message: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let timer = TimerSlot::new();
    timer.schedule(SUCCESS_MODAL_MS, move || on_close.run(()));

    view! {
        <div class="modal-overlay modal-overlay--transparent" on:click=move |_| on_close.run(())>
            <div class="success-modal" role="status">
                <span class="success-modal__icon">{icon("check-circle")}</span>
                <span class="success-modal__text">{message}</span>
            </div>
        </div>
    }
}
