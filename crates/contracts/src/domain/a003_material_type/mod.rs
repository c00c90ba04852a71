pub mod aggregate;

pub use aggregate::{MaterialType, MaterialTypeDto, ENTITY_METADATA};
