use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::shared::dropdown::dom::EventListenerGuard;
use crate::shared::icons::icon;

/// Слушатель Escape живёт ровно столько, сколько открыто окно
fn use_escape(on_escape: Callback<()>) {
    let guard = web_sys::window().and_then(|w| {
        EventListenerGuard::new(w.as_ref(), "keydown", false, move |event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                if key.key() == "Escape" {
                    on_escape.run(());
                }
            }
        })
    });
    let guard = StoredValue::new_local(guard);
    on_cleanup(move || {
        let _ = guard.try_update_value(|g| {
            g.take();
        });
    });
}

/// Окно поверх страницы. Содержимое раскладывается самим вызывающим
/// на `modal-body` и `modal-footer`.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    /// Узкое окно для диалогов подтверждения
    #[prop(optional)]
    narrow: bool,
    children: Children,
) -> impl IntoView {
    use_escape(on_close);

    let stop_propagation = move |ev: ev::MouseEvent| ev.stop_propagation();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" class:modal--narrow=narrow on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button
                        type="button"
                        class="button button--icon modal__close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
