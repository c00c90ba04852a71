use contracts::domain::a003_material_type::MaterialType;
use contracts::domain::a004_material::{Material, MaterialDto};
use leptos::prelude::*;

use crate::domain::a004_material::api;
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{Input, Select};
use crate::shared::crud::{
    non_negative_number, number_input_value, required_text, submit_form, use_lookup, FormMode,
};
use crate::shared::dropdown::SelectOption;
use crate::shared::number_format::{format_money, parse_number};

/// Единицы измерения, которые предлагаются для сырья
pub const MATERIAL_UNITS: &[&str] = &["кг", "т", "м³", "м", "шт", "л", "мешок"];

/// Варианты единиц; нестандартная единица записи добавляется в конец
pub fn unit_options(current: &str) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = MATERIAL_UNITS
        .iter()
        .map(|u| SelectOption::new(*u, *u))
        .collect();
    if !current.is_empty() && !MATERIAL_UNITS.contains(&current) {
        options.push(SelectOption::new(current, current));
    }
    options
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialForm {
    pub name: String,
    pub material_type_id: String,
    pub unit: String,
    pub quantity: String,
    pub price: String,
}

impl MaterialForm {
    pub fn from_item(item: Option<&Material>) -> Self {
        match item {
            Some(m) => Self {
                name: m.name.clone(),
                material_type_id: m.material_type_id.clone(),
                unit: m.unit.clone(),
                quantity: number_input_value(m.quantity),
                price: number_input_value(m.price),
            },
            None => Self {
                unit: "кг".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn validate(&self) -> Result<MaterialDto, String> {
        let name = required_text(&self.name, "Название")?;
        if self.material_type_id.is_empty() {
            return Err("Выберите тип материала".to_string());
        }
        Ok(MaterialDto {
            name,
            material_type_id: self.material_type_id.clone(),
            unit: required_text(&self.unit, "Ед. изм.")?,
            quantity: non_negative_number(&self.quantity, "Количество")?,
            price: non_negative_number(&self.price, "Цена за единицу")?,
        })
    }

    /// Стоимость остатка по текущим значениям полей
    pub fn stock_value(&self) -> Option<f64> {
        Some(parse_number(&self.quantity)? * parse_number(&self.price)?)
    }
}

#[component]
pub fn MaterialDetails(
    mode: FormMode<Material>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let initial = MaterialForm::from_item(mode.item());
    let id = mode.item().map(|m| m.id.clone());

    let name = RwSignal::new(initial.name);
    let material_type_id = RwSignal::new(initial.material_type_id);
    let unit = RwSignal::new(initial.unit);
    let quantity = RwSignal::new(initial.quantity);
    let price = RwSignal::new(initial.price);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let types = use_lookup::<MaterialType>(|t| t.name.clone());
    let units = Signal::derive(move || unit_options(&unit.get()));

    let current = move || MaterialForm {
        name: name.get(),
        material_type_id: material_type_id.get(),
        unit: unit.get(),
        quantity: quantity.get(),
        price: price.get(),
    };

    let on_submit = Callback::new(move |_| match untrack(current).validate() {
        Ok(dto) => {
            let id = id.clone();
            submit_form(saving, error, on_saved, async move {
                api::save_material(id.as_deref(), &dto).await
            });
        }
        Err(message) => error.set(Some(message)),
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
                label="Тип материала"
                value=material_type_id
                options=types
                on_change=Callback::new(move |v| material_type_id.set(v))
                placeholder="Выберите тип"
                searchable=true
                disabled=saving
            />
            <div class="form__row">
                <Select
                    label="Ед. изм."
                    value=unit
                    options=units
                    on_change=Callback::new(move |v| unit.set(v))
                    disabled=saving
                />
                <Input label="Количество" value=quantity input_type="number" disabled=saving />
                <Input label="Цена за единицу" value=price input_type="number" disabled=saving />
            </div>
            <div class="form__hint">
                "Стоимость остатка: "
                {move || current().stock_value().map(format_money).unwrap_or_else(|| "—".to_string())}
            </div>
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> MaterialForm {
        MaterialForm {
            name: "Цемент М400".into(),
            material_type_id: "2".into(),
            unit: "мешок".into(),
            quantity: "40".into(),
            price: "65 000".into(),
        }
    }

    #[test]
    fn type_is_required() {
        let mut form = filled();
        form.material_type_id.clear();
        assert_eq!(form.validate().unwrap_err(), "Выберите тип материала");
    }

    #[test]
    fn validate_builds_dto() {
        let dto = filled().validate().unwrap();
        assert_eq!(dto.quantity, 40.0);
        assert_eq!(dto.price, 65000.0);
        assert_eq!(dto.unit, "мешок");
    }

    #[test]
    fn custom_unit_is_kept_in_options() {
        assert_eq!(unit_options("кг").len(), MATERIAL_UNITS.len());
        let options = unit_options("рулон");
        assert_eq!(options.last().map(|o| o.value.as_str()), Some("рулон"));
    }

    #[test]
    fn stock_value_needs_both_numbers() {
        assert_eq!(filled().stock_value(), Some(2_600_000.0));
        let mut form = filled();
        form.price.clear();
        assert_eq!(form.stock_value(), None);
    }
}
