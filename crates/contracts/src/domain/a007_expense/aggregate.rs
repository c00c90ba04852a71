use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceMeta};

pub const ENTITY_METADATA: ResourceMeta = ResourceMeta {
    endpoint: "/api/expenses",
    list_name: "Расходы",
    element_name: "Расход",
};

/// Операционный расход
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub note: Option<String>,
    pub spent_at: NaiveDate,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl Resource for Expense {
    const META: ResourceMeta = ENTITY_METADATA;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.title.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDto {
    pub title: String,
    pub category: Option<String>,
    pub amount: f64,
    pub note: Option<String>,
    pub spent_at: NaiveDate,
}

impl From<&Expense> for ExpenseDto {
    fn from(e: &Expense) -> Self {
        Self {
            title: e.title.clone(),
            category: e.category.clone(),
            amount: e.amount,
            note: e.note.clone(),
            spent_at: e.spent_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spent_at_is_plain_date() {
        let json = r#"{"id":"1","title":"Аренда","amount":2500000,"spent_at":"2024-06-30"}"#;
        let e: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(e.spent_at, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());

        let dto = ExpenseDto::from(&e);
        let body = serde_json::to_value(&dto).unwrap();
        assert_eq!(body["spent_at"], "2024-06-30");
    }
}
