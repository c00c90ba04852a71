use contracts::domain::a005_sale::Sale;
use contracts::domain::a006_payment::{Payment, PaymentDto};

use crate::shared::api::{self, ApiError};
use crate::shared::crud;

pub async fn save_payment(id: Option<&str>, dto: &PaymentDto) -> Result<(), ApiError> {
    crud::save::<Payment, _>(id, dto).await
}

/// Продажи для привязки платежа
pub async fn fetch_sales() -> Result<Vec<Sale>, ApiError> {
    api::fetch_lookup::<Sale>().await
}
