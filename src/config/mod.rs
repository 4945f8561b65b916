//! Configuration module for wizard-nav
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Button labels and presentation names persisted as JSON

pub mod paths;
pub mod settings;

pub use crate::models::ButtonLabels;
pub use paths::WizardPaths;
pub use settings::{ButtonFieldNames, OutputFormat, Settings, StyleClasses};
