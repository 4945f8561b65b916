//! wizard-nav - Navigation buttons for multi-step form wizards
//!
//! Given where a wizard currently is among its steps, this crate decides
//! which navigation buttons to show (First, Previous, Next, Finish) and
//! formats the "Step X of Y" progress label. Rendering the buttons is left
//! to the caller's layout layer; a ratatui button bar and an interactive
//! demo are included.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Step positions and button descriptors
//! - `services`: Button-set selection and progress labels
//! - `config`: Configuration and path management
//! - `display`: Text, JSON and YAML output for the CLI
//! - `cli`: Command handlers
//! - `tui`: ratatui widgets and the demo walkthrough
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use wizard_nav::models::{ButtonKind, StepPosition};
//! use wizard_nav::services::{format_step_label, select_buttons};
//!
//! let position = StepPosition::ordinal(2, 3).unwrap();
//! let buttons = select_buttons(&position);
//!
//! assert_eq!(buttons.kinds(), vec![ButtonKind::GotoPrevious, ButtonKind::Next]);
//! assert_eq!(format_step_label(&position), "Step 2 of 3");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{WizardError, WizardResult};
pub use models::{ButtonAction, ButtonDescriptor, ButtonKind, ButtonSet, ButtonStyle, StepPosition};
pub use services::{format_step_label, select_buttons, ButtonSelector};
