pub mod aggregate;

pub use aggregate::{Material, MaterialDto, ENTITY_METADATA};
