use chrono::NaiveDate;
use contracts::domain::a007_expense::{Expense, ExpenseDto};
use leptos::prelude::*;

use crate::domain::a007_expense::api;
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::crud::{
    number_input_value, optional_text, positive_number, required_text, submit_form, FormMode,
};
use crate::shared::date_utils::{parse_input_date, to_input_date, today};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseForm {
    pub title: String,
    pub category: String,
    pub amount: String,
    pub spent_at: String,
    pub note: String,
}

impl ExpenseForm {
    /// Новая запись получает дату `default_date`
    pub fn from_item(item: Option<&Expense>, default_date: NaiveDate) -> Self {
        match item {
            Some(e) => Self {
                title: e.title.clone(),
                category: e.category.clone().unwrap_or_default(),
                amount: number_input_value(e.amount),
                spent_at: to_input_date(&e.spent_at),
                note: e.note.clone().unwrap_or_default(),
            },
            None => Self {
                spent_at: to_input_date(&default_date),
                ..Default::default()
            },
        }
    }

    pub fn validate(&self) -> Result<ExpenseDto, String> {
        let title = required_text(&self.title, "Наименование")?;
        let amount = positive_number(&self.amount, "Сумма")?;
        let spent_at =
            parse_input_date(&self.spent_at).ok_or_else(|| "Укажите дату расхода".to_string())?;
        Ok(ExpenseDto {
            title,
            category: optional_text(&self.category),
            amount,
            note: optional_text(&self.note),
            spent_at,
        })
    }
}

#[component]
pub fn ExpenseDetails(
    mode: FormMode<Expense>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let initial = ExpenseForm::from_item(mode.item(), today());
    let id = mode.item().map(|e| e.id.clone());

    let title = RwSignal::new(initial.title);
    let category = RwSignal::new(initial.category);
    let amount = RwSignal::new(initial.amount);
    let spent_at = RwSignal::new(initial.spent_at);
    let note = RwSignal::new(initial.note);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_submit = Callback::new(move |_| {
        let form = ExpenseForm {
            title: title.get_untracked(),
            category: category.get_untracked(),
            amount: amount.get_untracked(),
            spent_at: spent_at.get_untracked(),
            note: note.get_untracked(),
        };
        match form.validate() {
            Ok(dto) => {
                let id = id.clone();
                submit_form(saving, error, on_saved, async move {
                    api::save_expense(id.as_deref(), &dto).await
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
            <Input label="Наименование" value=title required=true disabled=saving />
            <div class="form__row">
                <Input label="Категория" value=category placeholder="Аренда, топливо..." disabled=saving />
                <Input label="Дата" value=spent_at required=true input_type="date" disabled=saving />
            </div>
            <Input label="Сумма, сўм" value=amount required=true input_type="number" disabled=saving />
            <Textarea label="Комментарий" value=note rows=2 disabled=saving />
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_expense_is_dated_today() {
        let form = ExpenseForm::from_item(None, date(2024, 7, 1));
        assert_eq!(form.spent_at, "2024-07-01");
    }

    #[test]
    fn validate_parses_date_and_amount() {
        let form = ExpenseForm {
            title: "Дизель".into(),
            category: "Топливо".into(),
            amount: "850 000".into(),
            spent_at: "2024-06-30".into(),
            note: "".into(),
        };
        let dto = form.validate().unwrap();
        assert_eq!(dto.spent_at, date(2024, 6, 30));
        assert_eq!(dto.amount, 850_000.0);
        assert_eq!(dto.category.as_deref(), Some("Топливо"));
    }

    #[test]
    fn missing_date_is_reported() {
        let form = ExpenseForm {
            title: "Аренда".into(),
            amount: "1".into(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap_err(), "Укажите дату расхода");
    }
}
