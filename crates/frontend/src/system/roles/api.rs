use contracts::system::permissions::Permission;
use contracts::system::roles::{Role, RoleDto};

use crate::shared::api::{self, ApiError};
use crate::shared::crud;

pub async fn save_role(id: Option<&str>, dto: &RoleDto) -> Result<(), ApiError> {
    crud::save::<Role, _>(id, dto).await
}

pub async fn fetch_permissions() -> Result<Vec<Permission>, ApiError> {
    api::fetch_lookup::<Permission>().await
}
