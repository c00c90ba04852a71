use contracts::domain::a002_product::{Product, ProductDto};

use crate::shared::api::ApiError;
use crate::shared::crud;

pub async fn save_product(id: Option<&str>, dto: &ProductDto) -> Result<(), ApiError> {
    crud::save::<Product, _>(id, dto).await
}
