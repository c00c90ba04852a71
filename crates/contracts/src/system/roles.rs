use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceMeta};

pub const ENTITY_METADATA: ResourceMeta = ResourceMeta {
    endpoint: "/api/roles",
    list_name: "Роли",
    element_name: "Роль",
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permission_ids: Vec<String>,
}

impl Resource for Role {
    const META: ResourceMeta = ENTITY_METADATA;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleDto {
    pub name: String,
    pub description: Option<String>,
    pub permission_ids: Vec<String>,
}

impl RoleDto {
    /// Включает или выключает разрешение, сохраняя порядок добавления
    pub fn toggle_permission(&mut self, permission_id: &str, enabled: bool) {
        let present = self.permission_ids.iter().any(|p| p == permission_id);
        if enabled && !present {
            self.permission_ids.push(permission_id.to_string());
        } else if !enabled {
            self.permission_ids.retain(|p| p != permission_id);
        }
    }
}

impl From<&Role> for RoleDto {
    fn from(r: &Role) -> Self {
        Self {
            name: r.name.clone(),
            description: r.description.clone(),
            permission_ids: r.permission_ids.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_permission_is_idempotent() {
        let mut dto = RoleDto::default();
        dto.toggle_permission("p1", true);
        dto.toggle_permission("p1", true);
        dto.toggle_permission("p2", true);
        assert_eq!(dto.permission_ids, vec!["p1", "p2"]);

        dto.toggle_permission("p1", false);
        dto.toggle_permission("p3", false);
        assert_eq!(dto.permission_ids, vec!["p2"]);
    }
}
