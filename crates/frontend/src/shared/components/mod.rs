pub mod confirm_dialog;
pub mod form_modal;
pub mod list_toolbar;
pub mod money_cell;
pub mod pagination_controls;
pub mod row_status;
pub mod success_modal;
pub mod ui;
