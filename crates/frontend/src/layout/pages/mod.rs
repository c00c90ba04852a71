//! Страницы приложения
//!
//! - `labels` - заголовки страниц по ключу
//! - `registry` - ключ страницы → View и состав меню

pub mod labels;
pub mod registry;

pub use labels::page_label;
pub use registry::{menu_groups, render_page, MenuGroup, MenuItem, DEFAULT_PAGE};
