//! # taskdash-components
//!
//! Leptos UI for the task dashboard: the status chart panel, its legend and
//! the mode picker, plus the adapter from task-status counts to a series.

pub mod legend;
pub mod mode_selector;
pub mod status;
pub mod status_panel;

pub use legend::*;
pub use mode_selector::*;
pub use status::*;
pub use status_panel::*;
