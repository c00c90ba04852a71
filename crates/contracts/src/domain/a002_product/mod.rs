pub mod aggregate;

pub use aggregate::{Product, ProductDto, ProductStatusDto, ENTITY_METADATA};
