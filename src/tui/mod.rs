//! Terminal User Interface module
//!
//! An interactive walkthrough that drives a wizard through the button rows
//! the selector produces, drawn with ratatui.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::{DemoApp, DemoOutcome};
pub use terminal::run_demo;
