pub mod aggregate;

pub use aggregate::{Payment, PaymentDto, ENTITY_METADATA};
