use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceMeta, StatusResource};
use crate::enums::CompanyStatus;

pub const ENTITY_METADATA: ResourceMeta = ResourceMeta {
    endpoint: "/api/companies",
    list_name: "Компании",
    element_name: "Компания",
};

/// Компания-клиент (покупатель продукции)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    /// ИНН (STIR)
    #[serde(default)]
    pub inn: Option<String>,
    #[serde(default)]
    pub status: CompanyStatus,
    pub created_at: String,
}

impl Resource for Company {
    const META: ResourceMeta = ENTITY_METADATA;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

/// Тело запросов создания и изменения компании
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyDto {
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub inn: Option<String>,
}

impl From<&Company> for CompanyDto {
    fn from(c: &Company) -> Self {
        Self {
            name: c.name.clone(),
            phone: c.phone.clone(),
            address: c.address.clone(),
            inn: c.inn.clone(),
        }
    }
}

/// `PATCH /api/companies/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyStatusDto {
    pub status: CompanyStatus,
}

impl StatusResource for Company {
    type Status = CompanyStatus;
    type StatusDto = CompanyStatusDto;

    fn status(&self) -> CompanyStatus {
        self.status
    }

    fn set_status(&mut self, status: CompanyStatus) {
        self.status = status;
    }

    fn status_dto(status: CompanyStatus) -> CompanyStatusDto {
        CompanyStatusDto { status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{
            "id": "7",
            "name": "Qurilish Invest",
            "phone": "+998901234567",
            "created_at": "2024-03-15T14:02:26Z"
        }"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.status, CompanyStatus::Active);
        assert_eq!(company.address, None);
        assert_eq!(company.id(), "7");
    }

    #[test]
    fn dto_copies_editable_fields() {
        let company = Company {
            id: "1".into(),
            name: "Alfa".into(),
            phone: "+998711112233".into(),
            address: Some("Toshkent".into()),
            inn: None,
            status: CompanyStatus::Inactive,
            created_at: "2024-01-01T00:00:00Z".into(),
        };
        let dto = CompanyDto::from(&company);
        assert_eq!(dto.name, "Alfa");
        assert_eq!(dto.address.as_deref(), Some("Toshkent"));
    }
}
