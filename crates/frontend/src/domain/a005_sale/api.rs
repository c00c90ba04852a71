use contracts::domain::a002_product::Product;
use contracts::domain::a005_sale::{Sale, SaleDto};

use crate::shared::api::{self, ApiError};
use crate::shared::crud;

pub async fn save_sale(id: Option<&str>, dto: &SaleDto) -> Result<(), ApiError> {
    crud::save::<Sale, _>(id, dto).await
}

/// Товары целиком: форме продажи нужна цена для расчёта суммы
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    api::fetch_lookup::<Product>().await
}
