use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::shared::api::{self, ApiError};

pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    api::post_json("/api/auth/login", &request).await
}

pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };
    api::post_json("/api/auth/refresh", &request).await
}

/// Отзывает refresh-токен на сервере
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };
    api::post("/api/auth/logout", &request).await
}

/// Текущий пользователь по access-токену из хранилища
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    api::get_json("/api/auth/me").await
}
