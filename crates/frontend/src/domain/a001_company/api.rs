use contracts::domain::a001_company::{Company, CompanyDto};

use crate::shared::api::ApiError;
use crate::shared::crud;

pub async fn save_company(id: Option<&str>, dto: &CompanyDto) -> Result<(), ApiError> {
    crud::save::<Company, _>(id, dto).await
}
