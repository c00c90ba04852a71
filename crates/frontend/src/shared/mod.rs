pub mod api;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod crud;
pub mod date_utils;
pub mod dropdown;
pub mod icons;
pub mod list_state;
pub mod modal;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
pub mod phone_mask;
