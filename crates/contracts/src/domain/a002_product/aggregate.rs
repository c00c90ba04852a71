use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceMeta, StatusResource};
use crate::enums::ProductStatus;

pub const ENTITY_METADATA: ResourceMeta = ResourceMeta {
    endpoint: "/api/products",
    list_name: "Продукция",
    element_name: "Товар",
};

/// Готовая продукция
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company_id: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    pub price: f64,
    pub unit: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub status: ProductStatus,
    pub created_at: String,
}

impl Resource for Product {
    const META: ResourceMeta = ENTITY_METADATA;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub company_id: Option<String>,
    pub price: f64,
    pub unit: String,
    pub quantity: f64,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            company_id: p.company_id.clone(),
            price: p.price,
            unit: p.unit.clone(),
            quantity: p.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStatusDto {
    pub status: ProductStatus,
}

impl StatusResource for Product {
    type Status = ProductStatus;
    type StatusDto = ProductStatusDto;

    fn status(&self) -> ProductStatus {
        self.status
    }

    fn set_status(&mut self, status: ProductStatus) {
        self.status = status;
    }

    fn status_dto(status: ProductStatus) -> ProductStatusDto {
        ProductStatusDto { status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_body_is_snake_case() {
        let body = serde_json::to_string(&Product::status_dto(ProductStatus::Inactive)).unwrap();
        assert_eq!(body, r#"{"status":"inactive"}"#);
    }

    #[test]
    fn set_status_updates_record() {
        let mut product: Product = serde_json::from_str(
            r#"{"id":"p1","name":"Блок","price":12000,"unit":"шт","created_at":"2024-05-01T08:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(product.status(), ProductStatus::Active);
        product.set_status(ProductStatus::Inactive);
        assert_eq!(product.status, ProductStatus::Inactive);
        assert_eq!(product.quantity, 0.0);
    }
}
