use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceMeta, StatusResource};
use crate::enums::UserStatus;

pub const ENTITY_METADATA: ResourceMeta = ResourceMeta {
    endpoint: "/api/users",
    list_name: "Пользователи",
    element_name: "Пользователь",
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role_id: Option<String>,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub status: UserStatus,
    pub created_at: String,
    #[serde(default)]
    pub last_login_at: Option<String>,
}

impl Resource for User {
    const META: ResourceMeta = ENTITY_METADATA;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.username.clone()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub role_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub role_id: Option<String>,
    /// Пустой пароль не меняется
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatusDto {
    pub status: UserStatus,
}

impl StatusResource for User {
    type Status = UserStatus;
    type StatusDto = UserStatusDto;

    fn status(&self) -> UserStatus {
        self.status
    }

    fn set_status(&mut self, status: UserStatus) {
        self.status = status;
    }

    fn status_dto(status: UserStatus) -> UserStatusDto {
        UserStatusDto { status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_dto_omits_unchanged_password() {
        let dto = UpdateUserDto {
            full_name: Some("Dilshod".into()),
            ..Default::default()
        };
        let body = serde_json::to_value(&dto).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["full_name"], "Dilshod");
    }
}
