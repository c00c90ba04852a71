use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceMeta};
use crate::enums::PaymentMethod;

pub const ENTITY_METADATA: ResourceMeta = ResourceMeta {
    endpoint: "/api/payments",
    list_name: "Платежи",
    element_name: "Платёж",
};

/// Поступление оплаты от компании
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub company_id: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub sale_id: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub method: PaymentMethod,
    #[serde(default)]
    pub note: Option<String>,
    pub paid_at: String,
}

impl Resource for Payment {
    const META: ResourceMeta = ENTITY_METADATA;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        format!("№{}", self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentDto {
    pub company_id: String,
    pub sale_id: Option<String>,
    pub amount: f64,
    pub method: PaymentMethod,
    pub note: Option<String>,
}

impl From<&Payment> for PaymentDto {
    fn from(p: &Payment) -> Self {
        Self {
            company_id: p.company_id.clone(),
            sale_id: p.sale_id.clone(),
            amount: p.amount,
            method: p.method,
            note: p.note.clone(),
        }
    }
}
