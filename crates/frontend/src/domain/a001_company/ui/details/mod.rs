use contracts::domain::a001_company::{Company, CompanyDto};
use leptos::prelude::*;

use crate::domain::a001_company::api;
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{Input, PhoneInput};
use crate::shared::crud::{optional_text, required_text, submit_form, FormMode};
use crate::shared::phone_mask::{format_uz_phone, to_e164};

/// Значения полей формы компании
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub inn: String,
}

impl CompanyForm {
    pub fn from_item(item: Option<&Company>) -> Self {
        match item {
            Some(c) => Self {
                name: c.name.clone(),
                phone: format_uz_phone(&c.phone),
                address: c.address.clone().unwrap_or_default(),
                inn: c.inn.clone().unwrap_or_default(),
            },
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<CompanyDto, String> {
        let name = required_text(&self.name, "Название")?;
        let phone = to_e164(&self.phone)
            .ok_or_else(|| "Введите телефон полностью: +998 (XX) XXX-XX-XX".to_string())?;
        let inn = optional_text(&self.inn);
        if let Some(inn) = &inn {
            if inn.len() != 9 || !inn.chars().all(|c| c.is_ascii_digit()) {
                return Err("ИНН должен состоять из 9 цифр".to_string());
            }
        }
        Ok(CompanyDto {
            name,
            phone,
            address: optional_text(&self.address),
            inn,
        })
    }
}

#[component]
pub fn CompanyDetails(
    mode: FormMode<Company>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let initial = CompanyForm::from_item(mode.item());
    let id = mode.item().map(|c| c.id.clone());

    let name = RwSignal::new(initial.name);
    let phone = RwSignal::new(initial.phone);
    let address = RwSignal::new(initial.address);
    let inn = RwSignal::new(initial.inn);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_submit = Callback::new(move |_| {
        let form = CompanyForm {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
            inn: inn.get_untracked(),
        };
        match form.validate() {
            Ok(dto) => {
                let id = id.clone();
                submit_form(saving, error, on_saved, async move {
                    api::save_company(id.as_deref(), &dto).await
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
            <Input label="Название" value=name required=true disabled=saving />
            <PhoneInput label="Телефон" value=phone required=true disabled=saving />
            <Input label="Адрес" value=address disabled=saving />
            <Input label="ИНН" value=inn placeholder="9 цифр" disabled=saving />
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CompanyForm {
        CompanyForm {
            name: " Qurilish Invest ".into(),
            phone: "+998 (90) 123-45-67".into(),
            address: "".into(),
            inn: "301234567".into(),
        }
    }

    #[test]
    fn valid_form_builds_dto() {
        let dto = filled().validate().unwrap();
        assert_eq!(dto.name, "Qurilish Invest");
        assert_eq!(dto.phone, "+998901234567");
        assert_eq!(dto.address, None);
        assert_eq!(dto.inn.as_deref(), Some("301234567"));
    }

    #[test]
    fn incomplete_phone_is_rejected() {
        let mut form = filled();
        form.phone = "+998 (90) 123".into();
        assert!(form.validate().unwrap_err().contains("телефон"));
    }

    #[test]
    fn inn_must_have_nine_digits() {
        let mut form = filled();
        form.inn = "12345".into();
        assert_eq!(form.validate().unwrap_err(), "ИНН должен состоять из 9 цифр");
    }

    #[test]
    fn edit_form_shows_masked_phone() {
        let company = Company {
            id: "1".into(),
            name: "Alfa".into(),
            phone: "+998711112233".into(),
            address: None,
            inn: None,
            status: Default::default(),
            created_at: "2024-01-01T00:00:00Z".into(),
        };
        let form = CompanyForm::from_item(Some(&company));
        assert_eq!(form.phone, "+998 (71) 111-22-33");
        assert_eq!(CompanyForm::from_item(None), CompanyForm::default());
    }
}
