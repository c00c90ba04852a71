use contracts::system::users::{CreateUserDto, UpdateUserDto, User};

use crate::shared::api::{self, ApiError};

pub async fn create_user(dto: &CreateUserDto) -> Result<(), ApiError> {
    api::create::<User, _>(dto).await
}

/// Пароль в `dto` меняется, только если задан
pub async fn update_user(id: &str, dto: &UpdateUserDto) -> Result<(), ApiError> {
    api::update::<User, _>(id, dto).await
}
