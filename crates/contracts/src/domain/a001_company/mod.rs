pub mod aggregate;

pub use aggregate::{Company, CompanyDto, CompanyStatusDto, ENTITY_METADATA};
