use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button--primary",
            ButtonVariant::Secondary => "button--secondary",
            ButtonVariant::Danger => "button--danger",
            ButtonVariant::Ghost => "button--ghost",
        }
    }
}

/// Кнопка формы; при `loading` показывает спиннер и блокируется
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    /// Компактный размер для строк таблицы
    #[prop(optional)]
    small: bool,
    #[prop(optional, into)] class: MaybeProp<String>,
    /// `"button"` по умолчанию, `"submit"` для форм
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] loading: MaybeProp<bool>,
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let is_loading = move || loading.get().unwrap_or(false);
    let classes = move || {
        let mut c = format!("button {}", variant.class());
        if small {
            c.push_str(" button--small");
        }
        if let Some(extra) = class.get() {
            c.push(' ');
            c.push_str(&extra);
        }
        c
    };

    view! {
        <button
            type=move || button_type.get().unwrap_or_else(|| "button".to_string())
            class=classes
            title=move || title.get()
            disabled=move || disabled.get().unwrap_or(false) || is_loading()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            <Show when=is_loading>
                <span class="spinner spinner--sm"></span>
            </Show>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_bem_modifiers() {
        assert_eq!(ButtonVariant::default().class(), "button--primary");
        assert_eq!(ButtonVariant::Danger.class(), "button--danger");
    }
}
