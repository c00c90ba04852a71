use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceMeta};

pub const ENTITY_METADATA: ResourceMeta = ResourceMeta {
    endpoint: "/api/materials",
    list_name: "Материалы",
    element_name: "Материал",
};

/// Сырьё на складе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub material_type_id: String,
    #[serde(default)]
    pub material_type_name: Option<String>,
    pub unit: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub price: f64,
    pub created_at: String,
}

impl Material {
    /// Стоимость остатка
    pub fn stock_value(&self) -> f64 {
        self.quantity * self.price
    }
}

impl Resource for Material {
    const META: ResourceMeta = ENTITY_METADATA;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialDto {
    pub name: String,
    pub material_type_id: String,
    pub unit: String,
    pub quantity: f64,
    pub price: f64,
}

impl From<&Material> for MaterialDto {
    fn from(m: &Material) -> Self {
        Self {
            name: m.name.clone(),
            material_type_id: m.material_type_id.clone(),
            unit: m.unit.clone(),
            quantity: m.quantity,
            price: m.price,
        }
    }
}
