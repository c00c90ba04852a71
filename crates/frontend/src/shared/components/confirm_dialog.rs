use leptos::prelude::*;

use crate::shared::components::ui::{Button, ButtonVariant};
use crate::shared::modal::Modal;

/// Подтверждение опасного действия (удаление записи)
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional, into)] confirm_label: MaybeProp<String>,
    /// Запрос выполняется: кнопки заблокированы
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    #[prop(optional, into)] error: MaybeProp<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_busy = Signal::derive(move || busy.get().unwrap_or(false));
    let label = move || confirm_label.get().unwrap_or_else(|| "Удалить".to_string());

    view! {
        <Modal
            title=title
            on_close=on_cancel
            narrow=true
        >
            <div class="modal-body">
                <p class="confirm-dialog__message">{message}</p>
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            </div>
            <div class="modal-footer">
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=is_busy
                    on_click=Callback::new(move |_| on_cancel.run(()))
                >
                    "Отмена"
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    loading=is_busy
                    on_click=Callback::new(move |_| on_confirm.run(()))
                >
                    {label}
                </Button>
            </div>
        </Modal>
    }
}
