use std::str::FromStr;

use contracts::domain::a001_company::Company;
use contracts::domain::a005_sale::Sale;
use contracts::domain::a006_payment::{Payment, PaymentDto};
use contracts::domain::common::Resource;
use contracts::enums::{LabeledEnum, PaymentMethod};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_payment::api;
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::crud::{
    number_input_value, optional_text, positive_number, submit_form, use_lookup, FormMode,
};
use crate::shared::dropdown::{enum_options, SelectOption};
use crate::shared::number_format::format_money;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentForm {
    pub company_id: String,
    pub sale_id: String,
    pub amount: String,
    pub method: String,
    pub note: String,
}

impl PaymentForm {
    pub fn from_item(item: Option<&Payment>) -> Self {
        match item {
            Some(p) => Self {
                company_id: p.company_id.clone(),
                sale_id: p.sale_id.clone().unwrap_or_default(),
                amount: number_input_value(p.amount),
                method: p.method.as_str().to_string(),
                note: p.note.clone().unwrap_or_default(),
            },
            None => Self {
                method: PaymentMethod::default().as_str().to_string(),
                ..Default::default()
            },
        }
    }

    pub fn validate(&self) -> Result<PaymentDto, String> {
        if self.company_id.is_empty() {
            return Err("Выберите компанию".to_string());
        }
        let method = PaymentMethod::from_str(&self.method)
            .map_err(|_| "Выберите способ оплаты".to_string())?;
        Ok(PaymentDto {
            company_id: self.company_id.clone(),
            sale_id: optional_text(&self.sale_id),
            amount: positive_number(&self.amount, "Сумма")?,
            method,
            note: optional_text(&self.note),
        })
    }
}

/// Продажи выбранной компании; первая строка снимает привязку
pub fn sale_options(sales: &[Sale], company_id: &str) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "Без привязки к продаже")];
    options.extend(
        sales
            .iter()
            .filter(|s| s.company_id == company_id)
            .map(|s| {
                SelectOption::new(
                    s.id.clone(),
                    format!("{} на {}", s.title(), format_money(s.total_amount)),
                )
            }),
    );
    options
}

#[component]
pub fn PaymentDetails(
    mode: FormMode<Payment>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let initial = PaymentForm::from_item(mode.item());
    let id = mode.item().map(|p| p.id.clone());

    let company_id = RwSignal::new(initial.company_id);
    let sale_id = RwSignal::new(initial.sale_id);
    let amount = RwSignal::new(initial.amount);
    let method = RwSignal::new(initial.method);
    let note = RwSignal::new(initial.note);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let companies = use_lookup::<Company>(|c| c.name.clone());
    let sales = RwSignal::new(Vec::<Sale>::new());
    spawn_local(async move {
        match api::fetch_sales().await {
            Ok(items) => {
                let _ = sales.try_set(items);
            }
            Err(e) => log::warn!("lookup sales: {}", e),
        }
    });
    let sale_choices = Signal::derive(move || sales.with(|s| sale_options(s, &company_id.get())));

    let on_company = Callback::new(move |v: String| {
        if company_id.get_untracked() != v {
            sale_id.set(String::new());
        }
        company_id.set(v);
    });

    let on_submit = Callback::new(move |_| {
        let form = PaymentForm {
            company_id: company_id.get_untracked(),
            sale_id: sale_id.get_untracked(),
            amount: amount.get_untracked(),
            method: method.get_untracked(),
            note: note.get_untracked(),
        };
        match form.validate() {
            Ok(dto) => {
                let id = id.clone();
                submit_form(saving, error, on_saved, async move {
                    api::save_payment(id.as_deref(), &dto).await
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
            <Select
                label="Компания"
                value=company_id
                options=companies
                on_change=on_company
                placeholder="Выберите компанию"
                searchable=true
                disabled=saving
            />
            <Select
                label="Продажа"
                value=sale_id
                options=sale_choices
                on_change=Callback::new(move |v| sale_id.set(v))
                placeholder="Без привязки к продаже"
                searchable=true
                disabled=Signal::derive(move || saving.get() || company_id.with(String::is_empty))
            />
            <div class="form__row">
                <Input label="Сумма, сўм" value=amount required=true input_type="number" disabled=saving />
                <Select
                    label="Способ оплаты"
                    value=method
                    options={enum_options::<PaymentMethod>()}
                    on_change=Callback::new(move |v| method.set(v))
                    disabled=saving
                />
            </div>
            <Textarea label="Комментарий" value=note rows=2 disabled=saving />
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::SaleStatus;

    fn sale(id: &str, company_id: &str) -> Sale {
        Sale {
            id: id.into(),
            company_id: company_id.into(),
            company_name: Some("Beton Servis".into()),
            product_id: "1".into(),
            product_name: None,
            quantity: 1.0,
            total_amount: 150_000.0,
            status: SaleStatus::New,
            created_at: "2024-05-01T09:00:00Z".into(),
        }
    }

    #[test]
    fn new_payment_defaults_to_cash() {
        let form = PaymentForm::from_item(None);
        assert_eq!(form.method, "cash");
    }

    #[test]
    fn validate_maps_optional_fields() {
        let form = PaymentForm {
            company_id: "4".into(),
            sale_id: "".into(),
            amount: "500000".into(),
            method: "transfer".into(),
            note: " ".into(),
        };
        let dto = form.validate().unwrap();
        assert_eq!(dto.method, PaymentMethod::Transfer);
        assert_eq!(dto.sale_id, None);
        assert_eq!(dto.note, None);
    }

    #[test]
    fn sale_options_follow_company() {
        let sales = vec![sale("10", "1"), sale("11", "2"), sale("12", "1")];
        let options = sale_options(&sales, "1");
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["", "10", "12"]);
        assert_eq!(options[1].label, "№10 (Beton Servis) на 150 000 сўм");
    }
}
