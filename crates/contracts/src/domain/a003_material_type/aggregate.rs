use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceMeta};

pub const ENTITY_METADATA: ResourceMeta = ResourceMeta {
    endpoint: "/api/material-types",
    list_name: "Типы материалов",
    element_name: "Тип материала",
};

/// Группа сырья (цемент, арматура, краска...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
}

impl Resource for MaterialType {
    const META: ResourceMeta = ENTITY_METADATA;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialTypeDto {
    pub name: String,
    pub description: Option<String>,
}
