use contracts::system::permissions::{Permission, PermissionDto};

use crate::shared::api::ApiError;
use crate::shared::crud;

pub async fn save_permission(id: Option<&str>, dto: &PermissionDto) -> Result<(), ApiError> {
    crud::save::<Permission, _>(id, dto).await
}
