use contracts::domain::a001_company::Company;
use contracts::domain::a002_product::Product;
use contracts::domain::a005_sale::{Sale, SaleDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a005_sale::api;
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{Button, ButtonVariant, Input, Select};
use crate::shared::crud::{number_input_value, positive_number, submit_form, use_lookup, FormMode};
use crate::shared::dropdown::options_from;
use crate::shared::number_format::{format_money, parse_number};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleForm {
    pub company_id: String,
    pub product_id: String,
    pub quantity: String,
    pub total_amount: String,
}

impl SaleForm {
    pub fn from_item(item: Option<&Sale>) -> Self {
        match item {
            Some(s) => Self {
                company_id: s.company_id.clone(),
                product_id: s.product_id.clone(),
                quantity: number_input_value(s.quantity),
                total_amount: number_input_value(s.total_amount),
            },
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<SaleDto, String> {
        if self.company_id.is_empty() {
            return Err("Выберите компанию".to_string());
        }
        if self.product_id.is_empty() {
            return Err("Выберите товар".to_string());
        }
        Ok(SaleDto {
            company_id: self.company_id.clone(),
            product_id: self.product_id.clone(),
            quantity: positive_number(&self.quantity, "Количество")?,
            total_amount: positive_number(&self.total_amount, "Сумма")?,
        })
    }
}

/// Сумма по прайсу: цена товара × количество
pub fn price_total(products: &[Product], product_id: &str, quantity: &str) -> Option<f64> {
    let product = products.iter().find(|p| p.id == product_id)?;
    let quantity = parse_number(quantity)?;
    (quantity > 0.0).then(|| product.price * quantity)
}

#[component]
pub fn SaleDetails(
    mode: FormMode<Sale>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let initial = SaleForm::from_item(mode.item());
    let id = mode.item().map(|s| s.id.clone());
    let locked = mode.item().map(|s| s.status.is_final()).unwrap_or(false);

    let company_id = RwSignal::new(initial.company_id);
    let product_id = RwSignal::new(initial.product_id);
    let quantity = RwSignal::new(initial.quantity);
    let total_amount = RwSignal::new(initial.total_amount);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let disabled = Signal::derive(move || locked || saving.get());

    let companies = use_lookup::<Company>(|c| c.name.clone());
    let products = RwSignal::new(Vec::<Product>::new());
    spawn_local(async move {
        match api::fetch_products().await {
            Ok(items) => {
                let _ = products.try_set(items);
            }
            Err(e) => log::warn!("lookup products: {}", e),
        }
    });
    let product_options = Signal::derive(move || {
        products.with(|p| options_from(p, |p| p.id.clone(), |p| p.name.clone()))
    });
    let suggested = move || {
        products.with(|p| price_total(p, &product_id.get(), &quantity.get()))
    };

    let on_submit = Callback::new(move |_| {
        let form = SaleForm {
            company_id: company_id.get_untracked(),
            product_id: product_id.get_untracked(),
            quantity: quantity.get_untracked(),
            total_amount: total_amount.get_untracked(),
        };
        match form.validate() {
            Ok(dto) => {
                let id = id.clone();
                submit_form(saving, error, on_saved, async move {
                    api::save_sale(id.as_deref(), &dto).await
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
            {locked.then(|| view! {
                <div class="alert alert--warning">"Продажа закрыта, изменения недоступны"</div>
            })}
            <Select
                label="Компания"
                value=company_id
                options=companies
                on_change=Callback::new(move |v| company_id.set(v))
                placeholder="Выберите компанию"
                searchable=true
                disabled=disabled
            />
            <Select
                label="Товар"
                value=product_id
                options=product_options
                on_change=Callback::new(move |v| product_id.set(v))
                placeholder="Выберите товар"
                searchable=true
                disabled=disabled
            />
            <div class="form__row">
                <Input label="Количество" value=quantity required=true input_type="number" disabled=disabled />
                <Input label="Сумма, сўм" value=total_amount required=true input_type="number" disabled=disabled />
            </div>
            {move || suggested().map(|total| view! {
                <div class="form__hint">
                    "По прайсу: " {format_money(total)} " "
                    <Button
                        variant=ButtonVariant::Ghost
                        small=true
                        disabled=disabled
                        on_click=Callback::new(move |_| total_amount.set(number_input_value(total)))
                    >
                        "Подставить"
                    </Button>
                </div>
            })}
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.into(),
            name: format!("Товар {}", id),
            company_id: None,
            company_name: None,
            price,
            unit: "шт".into(),
            quantity: 0.0,
            status: Default::default(),
            created_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn company_and_product_are_required() {
        let form = SaleForm {
            quantity: "1".into(),
            total_amount: "100".into(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap_err(), "Выберите компанию");
        let form = SaleForm {
            company_id: "1".into(),
            ..form
        };
        assert_eq!(form.validate().unwrap_err(), "Выберите товар");
    }

    #[test]
    fn price_total_multiplies_by_quantity() {
        let products = vec![product("1", 12_000.0), product("2", 5_500.0)];
        assert_eq!(price_total(&products, "2", "4"), Some(22_000.0));
        assert_eq!(price_total(&products, "2", ""), None);
        assert_eq!(price_total(&products, "9", "4"), None);
    }
}
