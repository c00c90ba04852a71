use contracts::domain::a007_expense::{Expense, ExpenseDto};

use crate::shared::api::ApiError;
use crate::shared::crud;

pub async fn save_expense(id: Option<&str>, dto: &ExpenseDto) -> Result<(), ApiError> {
    crud::save::<Expense, _>(id, dto).await
}
