use leptos::prelude::*;

use crate::shared::components::ui::{Button, ButtonVariant};
use crate::shared::modal::Modal;

/// Модальная форма записи: поля, ошибка сервера, «Отмена» и «Сохранить»
#[component]
pub fn FormModal(
    #[prop(into)] title: String,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !saving.get_untracked() {
            on_submit.run(());
        }
    };
    let close = Callback::new(move |_| {
        if !saving.get_untracked() {
            on_close.run(());
        }
    });

    view! {
        <Modal title=title on_close=close>
            <form class="form" on:submit=on_form_submit>
                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    {children()}
                </div>
                <div class="modal-footer">
                    <Button
                        variant=ButtonVariant::Secondary
                        disabled=saving
                        on_click=Callback::new(move |_| close.run(()))
                    >
                        "Отмена"
                    </Button>
                    <Button button_type="submit" loading=saving>
                        {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
