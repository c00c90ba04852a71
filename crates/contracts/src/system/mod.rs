pub mod actions;
pub mod auth;
pub mod permissions;
pub mod roles;
pub mod users;
