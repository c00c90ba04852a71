use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::shared::phone_mask::apply_input;

/// Поле телефона с маской `+998 (XX) XXX-XX-XX`.
///
/// В `value` хранится отформатированная строка; для API её
/// переводят в E.164 через `phone_mask::to_e164`.
#[component]
pub fn PhoneInput(
    #[prop(optional, into)] label: MaybeProp<String>,
    value: RwSignal<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    let on_input = move |ev: leptos::ev::Event| {
        let typed = event_target_value(&ev);
        let masked = apply_input(&value.get_untracked(), &typed);
        // сигнал может не измениться (введена буква), а DOM уже изменился
        event_target::<HtmlInputElement>(&ev).set_value(&masked);
        value.set(masked);
    };

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            {move || label.get().map(|l| view! {
                <label class="form__label">
                    {l}
                    {required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            <input
                class="form__input"
                type="tel"
                inputmode="tel"
                placeholder="+998 (__) ___-__-__"
                prop:value=move || value.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:input=on_input
            />
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
