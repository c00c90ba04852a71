pub mod badge;
pub mod button;
pub mod dropdown_panel;
pub mod input;
pub mod phone_input;
pub mod select;
pub mod status_select;
pub mod textarea;

pub use badge::{Badge, BadgeTone, StatusBadge};
pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use phone_input::PhoneInput;
pub use select::Select;
pub use status_select::{StatusChangeCallback, StatusChangeFuture, StatusSelect};
pub use textarea::Textarea;
