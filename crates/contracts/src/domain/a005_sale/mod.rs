pub mod aggregate;

pub use aggregate::{Sale, SaleDto, SaleStatusDto, ENTITY_METADATA};
