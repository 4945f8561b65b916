//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod buttons;
pub mod step;

pub use buttons::{handle_buttons_command, handle_label_command};
pub use step::{ResolvedPosition, StepArgs};
