use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Текущий пользователь сессии
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role_name: Option<String>,
    /// Коды разрешений роли пользователя
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserInfo {
    /// Администратор имеет все права; остальные проверяются по коду разрешения
    pub fn can(&self, permission: &str) -> bool {
        self.is_admin || self.permissions.iter().any(|p| p == permission)
    }

    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(is_admin: bool, permissions: &[&str]) -> UserInfo {
        UserInfo {
            id: "1".into(),
            username: "operator".into(),
            full_name: None,
            role_name: None,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            is_admin,
        }
    }

    #[test]
    fn admin_can_everything() {
        assert!(info(true, &[]).can("users.manage"));
    }

    #[test]
    fn regular_user_needs_permission_code() {
        let user = info(false, &["sales.view"]);
        assert!(user.can("sales.view"));
        assert!(!user.can("users.manage"));
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let mut user = info(false, &[]);
        assert_eq!(user.display_name(), "operator");
        user.full_name = Some("  ".into());
        assert_eq!(user.display_name(), "operator");
        user.full_name = Some("Aziz Karimov".into());
        assert_eq!(user.display_name(), "Aziz Karimov");
    }
}
