use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceMeta};

pub const ENTITY_METADATA: ResourceMeta = ResourceMeta {
    endpoint: "/api/actions",
    list_name: "Журнал действий",
    element_name: "Действие",
};

/// Запись журнала действий пользователей (только чтение)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// `create`, `update`, `delete`, `login`...
    pub action: String,
    pub entity: String,
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    pub created_at: String,
}

impl Action {
    /// Детали в читаемом виде для раскрывающейся строки
    pub fn details_pretty(&self) -> Option<String> {
        self.details
            .as_ref()
            .filter(|v| !v.is_null())
            .map(|v| serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()))
    }
}

impl Resource for Action {
    const META: ResourceMeta = ENTITY_METADATA;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        format!("{} {}", self.action, self.entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_details_are_hidden() {
        let json = r#"{"id":"1","action":"delete","entity":"company","details":null,"created_at":"2024-01-01T00:00:00Z"}"#;
        let a: Action = serde_json::from_str(json).unwrap();
        assert_eq!(a.details_pretty(), None);
    }

    #[test]
    fn details_are_pretty_printed() {
        let json = r#"{"id":"2","action":"update","entity":"sale","details":{"status":"completed"},"created_at":"2024-01-01T00:00:00Z"}"#;
        let a: Action = serde_json::from_str(json).unwrap();
        assert_eq!(
            a.details_pretty().as_deref(),
            Some("{\n  \"status\": \"completed\"\n}")
        );
    }
}
