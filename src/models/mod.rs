//! Core data models for wizard-nav
//!
//! The step position handed over by a wizard controller, and the button
//! descriptors produced for it.

pub mod button;
pub mod step;

pub use button::{ButtonAction, ButtonDescriptor, ButtonKind, ButtonLabels, ButtonSet, ButtonStyle};
pub use step::StepPosition;
