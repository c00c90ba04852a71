use contracts::system::roles::Role;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};
use leptos::prelude::*;

use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{Input, PhoneInput, Select};
use crate::shared::crud::{optional_text, required_text, submit_form, use_lookup, FormMode};
use crate::shared::phone_mask::{format_uz_phone, to_e164};
use crate::system::users::api;

/// Минимальная длина пароля
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
    pub role_id: String,
}

impl UserForm {
    pub fn from_item(item: Option<&User>) -> Self {
        match item {
            Some(u) => Self {
                username: u.username.clone(),
                password: String::new(),
                full_name: u.full_name.clone().unwrap_or_default(),
                phone: u.phone.as_deref().map(format_uz_phone).unwrap_or_default(),
                role_id: u.role_id.clone().unwrap_or_default(),
            },
            None => Self::default(),
        }
    }

    /// Пустой телефон допустим, неполный отклоняется
    fn phone(&self) -> Result<Option<String>, String> {
        if self.phone.trim().is_empty() {
            return Ok(None);
        }
        to_e164(&self.phone)
            .map(Some)
            .ok_or_else(|| "Введите телефон полностью: +998 (XX) XXX-XX-XX".to_string())
    }

    fn password(&self, required: bool) -> Result<Option<String>, String> {
        if self.password.is_empty() {
            return if required {
                Err("Задайте пароль".to_string())
            } else {
                Ok(None)
            };
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!("Пароль не короче {} символов", MIN_PASSWORD_LEN));
        }
        Ok(Some(self.password.clone()))
    }

    pub fn validate_create(&self) -> Result<CreateUserDto, String> {
        let username = required_text(&self.username, "Логин")?;
        if username.contains(char::is_whitespace) {
            return Err("Логин не должен содержать пробелов".to_string());
        }
        let password = self.password(true)?.unwrap_or_default();
        Ok(CreateUserDto {
            username,
            password,
            full_name: optional_text(&self.full_name),
            phone: self.phone()?,
            role_id: optional_text(&self.role_id),
        })
    }

    pub fn validate_update(&self) -> Result<UpdateUserDto, String> {
        Ok(UpdateUserDto {
            full_name: optional_text(&self.full_name),
            phone: self.phone()?,
            role_id: optional_text(&self.role_id),
            password: self.password(false)?,
        })
    }
}

#[component]
pub fn UserDetails(
    mode: FormMode<User>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let initial = UserForm::from_item(mode.item());
    let id = mode.item().map(|u| u.id.clone());
    let is_new = id.is_none();

    let username = RwSignal::new(initial.username);
    let password = RwSignal::new(initial.password);
    let full_name = RwSignal::new(initial.full_name);
    let phone = RwSignal::new(initial.phone);
    let role_id = RwSignal::new(initial.role_id);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let roles = use_lookup::<Role>(|r| r.name.clone());

    let on_submit = Callback::new(move |_| {
        let form = UserForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
            full_name: full_name.get_untracked(),
            phone: phone.get_untracked(),
            role_id: role_id.get_untracked(),
        };
        let result = match id.clone() {
            None => form.validate_create().map(|dto| {
                submit_form(saving, error, on_saved, async move { api::create_user(&dto).await })
            }),
            Some(id) => form.validate_update().map(|dto| {
                submit_form(saving, error, on_saved, async move {
                    api::update_user(&id, &dto).await
                })
            }),
        };
        if let Err(message) = result {
            error.set(Some(message));
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
            <Input
                label="Логин"
                value=username
                required=true
                autocomplete="off"
                disabled=Signal::derive(move || !is_new || saving.get())
            />
            <Input
                label=if is_new { "Пароль" } else { "Новый пароль" }
                value=password
                required=is_new
                input_type="password"
                autocomplete="new-password"
                placeholder=if is_new { "" } else { "Оставьте пустым, чтобы не менять" }
                disabled=saving
            />
            <Input label="ФИО" value=full_name disabled=saving />
            <PhoneInput label="Телефон" value=phone disabled=saving />
            <Select
                label="Роль"
                value=role_id
                options=roles
                on_change=Callback::new(move |v| role_id.set(v))
                placeholder="Без роли"
                disabled=saving
            />
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user() -> UserForm {
        UserForm {
            username: "kassir1".into(),
            password: "secret7".into(),
            full_name: "".into(),
            phone: "".into(),
            role_id: "2".into(),
        }
    }

    #[test]
    fn create_requires_password() {
        let mut form = new_user();
        form.password.clear();
        assert_eq!(form.validate_create().unwrap_err(), "Задайте пароль");
        form.password = "123".into();
        assert!(form.validate_create().unwrap_err().contains("не короче"));
    }

    #[test]
    fn create_with_empty_phone() {
        let dto = new_user().validate_create().unwrap();
        assert_eq!(dto.phone, None);
        assert_eq!(dto.role_id.as_deref(), Some("2"));
    }

    #[test]
    fn username_without_spaces() {
        let mut form = new_user();
        form.username = "kassir 1".into();
        assert!(form.validate_create().is_err());
    }

    #[test]
    fn update_keeps_password_when_empty() {
        let mut form = new_user();
        form.password.clear();
        form.phone = "+998 (93) 555-44-33".into();
        let dto = form.validate_update().unwrap();
        assert_eq!(dto.password, None);
        assert_eq!(dto.phone.as_deref(), Some("+998935554433"));
    }

    #[test]
    fn incomplete_phone_is_rejected() {
        let mut form = new_user();
        form.phone = "+998 (93) 55".into();
        assert!(form.validate_update().is_err());
    }
}
