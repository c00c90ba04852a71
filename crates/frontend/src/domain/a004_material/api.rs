use contracts::domain::a004_material::{Material, MaterialDto};

use crate::shared::api::ApiError;
use crate::shared::crud;

pub async fn save_material(id: Option<&str>, dto: &MaterialDto) -> Result<(), ApiError> {
    crud::save::<Material, _>(id, dto).await
}
