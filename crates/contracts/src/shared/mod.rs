pub mod list;

pub use list::{total_pages, ListQuery, PaginatedResponse};
