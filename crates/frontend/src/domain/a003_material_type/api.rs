use contracts::domain::a003_material_type::{MaterialType, MaterialTypeDto};

use crate::shared::api::ApiError;
use crate::shared::crud;

pub async fn save_material_type(id: Option<&str>, dto: &MaterialTypeDto) -> Result<(), ApiError> {
    crud::save::<MaterialType, _>(id, dto).await
}
