use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceMeta, StatusResource};
use crate::enums::SaleStatus;

pub const ENTITY_METADATA: ResourceMeta = ResourceMeta {
    endpoint: "/api/sales",
    list_name: "Продажи",
    element_name: "Продажа",
};

/// Продажа продукции компании
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    pub company_id: String,
    #[serde(default)]
    pub company_name: Option<String>,
    pub product_id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: f64,
    pub total_amount: f64,
    #[serde(default)]
    pub status: SaleStatus,
    pub created_at: String,
}

impl Resource for Sale {
    const META: ResourceMeta = ENTITY_METADATA;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        format!(
            "№{} ({})",
            self.id,
            self.company_name.as_deref().unwrap_or(&self.company_id)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleDto {
    pub company_id: String,
    pub product_id: String,
    pub quantity: f64,
    pub total_amount: f64,
}

impl From<&Sale> for SaleDto {
    fn from(s: &Sale) -> Self {
        Self {
            company_id: s.company_id.clone(),
            product_id: s.product_id.clone(),
            quantity: s.quantity,
            total_amount: s.total_amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleStatusDto {
    pub status: SaleStatus,
}

impl StatusResource for Sale {
    type Status = SaleStatus;
    type StatusDto = SaleStatusDto;

    fn status(&self) -> SaleStatus {
        self.status
    }

    fn set_status(&mut self, status: SaleStatus) {
        self.status = status;
    }

    fn status_dto(status: SaleStatus) -> SaleStatusDto {
        SaleStatusDto { status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_prefers_company_name() {
        let mut sale = Sale {
            id: "15".into(),
            company_id: "3".into(),
            company_name: None,
            product_id: "9".into(),
            product_name: None,
            quantity: 2.0,
            total_amount: 300_000.0,
            status: SaleStatus::New,
            created_at: "2024-05-01T09:00:00Z".into(),
        };
        assert_eq!(sale.title(), "№15 (3)");
        sale.company_name = Some("Beton Servis".into());
        assert_eq!(sale.title(), "№15 (Beton Servis)");
    }

    #[test]
    fn status_dto_serializes_snake_case() {
        let dto = SaleStatusDto {
            status: SaleStatus::InProgress,
        };
        assert_eq!(
            serde_json::to_string(&dto).unwrap(),
            r#"{"status":"in_progress"}"#
        );
    }
}
