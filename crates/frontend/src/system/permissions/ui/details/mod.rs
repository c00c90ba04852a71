use contracts::system::permissions::{Permission, PermissionDto};
use leptos::prelude::*;

use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::crud::{optional_text, required_text, submit_form, FormMode};
use crate::system::permissions::api;

/// Код вида `sales.view`: сегменты из строчных латинских букв, цифр и `_`
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        })
}

pub fn validate(code: &str, name: &str, description: &str) -> Result<PermissionDto, String> {
    let code = required_text(code, "Код")?;
    if !is_valid_code(&code) {
        return Err("Код: строчные латинские буквы, цифры и «_», разделитель «.»".to_string());
    }
    Ok(PermissionDto {
        code,
        name: required_text(name, "Название")?,
        description: optional_text(description),
    })
}

#[component]
pub fn PermissionDetails(
    mode: FormMode<Permission>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = mode.item().map(|p| p.id.clone());
    let code = RwSignal::new(mode.item().map(|p| p.code.clone()).unwrap_or_default());
    let name = RwSignal::new(mode.item().map(|p| p.name.clone()).unwrap_or_default());
    let description = RwSignal::new(
        mode.item()
            .and_then(|p| p.description.clone())
            .unwrap_or_default(),
    );
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_submit = Callback::new(move |_| {
        match validate(
            &code.get_untracked(),
            &name.get_untracked(),
            &description.get_untracked(),
        ) {
            Ok(dto) => {
                let id = id.clone();
                submit_form(saving, error, on_saved, async move {
                    api::save_permission(id.as_deref(), &dto).await
                });
            }
            Err(message) => error.set(Some(message)),
        }
    });

    view! {
        <FormModal
            title=mode.title()
            error=error
            saving=saving
            on_submit=on_submit
            on_close=on_close
        >
            <Input label="Код" value=code required=true placeholder="sales.view" disabled=saving />
            <Input label="Название" value=name required=true disabled=saving />
            <Textarea label="Описание" value=description rows=2 disabled=saving />
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_format() {
        assert!(is_valid_code("sales.view"));
        assert!(is_valid_code("reports_2024.export"));
        assert!(!is_valid_code("Sales.view"));
        assert!(!is_valid_code("sales..view"));
        assert!(!is_valid_code("sales view"));
    }

    #[test]
    fn validate_checks_code_first() {
        assert!(validate("bad code", "Имя", "").unwrap_err().starts_with("Код"));
        let dto = validate(" users.manage ", "Управление пользователями", "").unwrap();
        assert_eq!(dto.code, "users.manage");
        assert_eq!(dto.description, None);
    }
}
