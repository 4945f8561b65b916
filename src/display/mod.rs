//! Display formatting for terminal output
//!
//! Provides utilities for formatting button rows and progress labels for
//! the CLI, as text tables or machine-readable documents.

pub mod buttons;

pub use buttons::{format_button_row, format_button_table, render_step, RenderedButton, RenderedStep};
