use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceMeta};

pub const ENTITY_METADATA: ResourceMeta = ResourceMeta {
    endpoint: "/api/permissions",
    list_name: "Разрешения",
    element_name: "Разрешение",
};

/// Коды разрешений системных разделов
pub mod codes {
    pub const USERS_MANAGE: &str = "users.manage";
    pub const ROLES_MANAGE: &str = "roles.manage";
    pub const ACTIONS_VIEW: &str = "actions.view";
}

/// Разрешение вида `sales.view`, `users.manage`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Permission {
    /// Группа разрешения: часть кода до первой точки
    pub fn group(&self) -> &str {
        self.code.split('.').next().unwrap_or(&self.code)
    }
}

impl Resource for Permission {
    const META: ResourceMeta = ENTITY_METADATA;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.code.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionDto {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_is_code_prefix() {
        let p = Permission {
            id: "1".into(),
            code: "sales.view".into(),
            name: "Просмотр продаж".into(),
            description: None,
        };
        assert_eq!(p.group(), "sales");

        let flat = Permission {
            code: "dashboard".into(),
            ..p
        };
        assert_eq!(flat.group(), "dashboard");
    }
}
