pub mod resource;

pub use resource::{Resource, ResourceMeta, StatusResource};
