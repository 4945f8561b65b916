//! Service layer for wizard-nav
//!
//! Turns a step position into what the layout layer needs: the button row
//! and the progress label.

pub mod progress;
pub mod selector;

pub use progress::format_step_label;
pub use selector::{select_buttons, ButtonSelector};
