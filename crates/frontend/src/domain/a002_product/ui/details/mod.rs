use contracts::domain::a001_company::Company;
use contracts::domain::a002_product::{Product, ProductDto};
use leptos::prelude::*;

use crate::domain::a002_product::api;
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{Input, Select};
use crate::shared::crud::{
    non_negative_number, number_input_value, optional_text, positive_number, required_text,
    submit_form, use_lookup, FormMode,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub company_id: String,
    pub price: String,
    pub unit: String,
    pub quantity: String,
}

impl ProductForm {
    pub fn from_item(item: Option<&Product>) -> Self {
        match item {
            Some(p) => Self {
                name: p.name.clone(),
                company_id: p.company_id.clone().unwrap_or_default(),
                price: number_input_value(p.price),
                unit: p.unit.clone(),
                quantity: number_input_value(p.quantity),
            },
            None => Self {
                unit: "шт".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn validate(&self) -> Result<ProductDto, String> {
        Ok(ProductDto {
            name: required_text(&self.name, "Название")?,
            company_id: optional_text(&self.company_id),
            price: positive_number(&self.price, "Цена")?,
            unit: required_text(&self.unit, "Ед. изм.")?,
            quantity: non_negative_number(&self.quantity, "Остаток")?,
        })
    }
}

#[component]
pub fn ProductDetails(
    mode: FormMode<Product>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let initial = ProductForm::from_item(mode.item());
    let id = mode.item().map(|p| p.id.clone());

    let name = RwSignal::new(initial.name);
    let company_id = RwSignal::new(initial.company_id);
    let price = RwSignal::new(initial.price);
    let unit = RwSignal::new(initial.unit);
    let quantity = RwSignal::new(initial.quantity);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let companies = use_lookup::<Company>(|c| c.name.clone());

    let on_submit = Callback::new(move |_| {
        let form = ProductForm {
            name: name.get_untracked(),
            company_id: company_id.get_untracked(),
            price: price.get_untracked(),
            unit: unit.get_untracked(),
            quantity: quantity.get_untracked(),
        };
        match form.validate() {
            Ok(dto) => {
                let id = id.clone();
                submit_form(saving, error, on_saved, async move {
                    api::save_product(id.as_deref(), &dto).await
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
            <Select
                label="Компания"
                value=company_id
                options=companies
                on_change=Callback::new(move |v| company_id.set(v))
                placeholder="Без компании"
                searchable=true
                disabled=saving
            />
            <div class="form__row">
                <Input label="Цена, сўм" value=price required=true input_type="number" disabled=saving />
                <Input label="Ед. изм." value=unit required=true disabled=saving />
                <Input label="Остаток" value=quantity input_type="number" disabled=saving />
            </div>
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_defaults_unit() {
        let form = ProductForm::from_item(None);
        assert_eq!(form.unit, "шт");
        assert!(form.company_id.is_empty());
    }

    #[test]
    fn validate_parses_numbers_and_optional_company() {
        let form = ProductForm {
            name: "Газоблок D500".into(),
            company_id: "".into(),
            price: "12 000".into(),
            unit: "шт".into(),
            quantity: "".into(),
        };
        let dto = form.validate().unwrap();
        assert_eq!(dto.price, 12000.0);
        assert_eq!(dto.quantity, 0.0);
        assert_eq!(dto.company_id, None);
    }

    #[test]
    fn zero_price_is_rejected() {
        let form = ProductForm {
            name: "Блок".into(),
            price: "0".into(),
            unit: "шт".into(),
            ..Default::default()
        };
        assert!(form.validate().unwrap_err().contains("Цена"));
    }
}
