//! Ядро плавающего выпадающего списка (`Select`, `StatusSelect`).
//!
//! Чистая логика (геометрия, фильтр, автомат состояний, удержание
//! ресурсов) отделена от DOM-обвязки в `dom` и `overlay`, поэтому
//! тестируется без браузера.

pub mod dom;
pub mod filter;
pub mod geometry;
pub mod machine;
pub mod overlay;
pub mod scoped;
pub mod timer;

pub use filter::{
    enum_options, filter_options, label_for, options_from, panel_rows, search_visible, PanelRows,
    SelectOption, SEARCH_THRESHOLD,
};
pub use geometry::{AnchorRect, DropdownVariant, OverlayPosition, ScrollOffset, OVERLAY_OFFSET};
pub use machine::{
    CloseTicket, CommitPhase, DropdownMachine, SelectOutcome, STATUS_CLOSE_DELAY_MS,
    SUCCESS_FLASH_MS,
};
pub use overlay::{use_overlay, OverlayHandle};
pub use scoped::Scoped;
pub use timer::TimerSlot;
