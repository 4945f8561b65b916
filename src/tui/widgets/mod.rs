//! Reusable widgets for the TUI

pub mod button_bar;

pub use button_bar::ButtonBar;
