//! Типы обмена с REST API административной консоли.
//!
//! Крейт не зависит от браузера: его используют фронтенд и тесты.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
