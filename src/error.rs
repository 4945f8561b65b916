//! Custom error types for wizard-nav
//!
//! The button selector and progress formatter are total functions and never
//! fail. Errors only arise at the edges: building a step position from
//! untrusted input, loading settings, and driving the terminal.

use thiserror::Error;

/// The main error type for wizard-nav operations
#[derive(Error, Debug)]
pub enum WizardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Invalid step position input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl WizardError {
    /// Create a "not found" error for step keys
    pub fn step_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Step",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for WizardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WizardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for WizardError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for wizard-nav operations
pub type WizardResult<T> = Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WizardError::Validation("step 0 is out of range".into());
        assert_eq!(err.to_string(), "Validation error: step 0 is out of range");
        assert!(err.is_validation());
    }

    #[test]
    fn test_step_not_found() {
        let err = WizardError::step_not_found("billing");
        assert_eq!(err.to_string(), "Step not found: billing");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WizardError = io_err.into();
        assert!(matches!(err, WizardError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: WizardError = json_err.into();
        assert!(matches!(err, WizardError::Json(_)));
    }
}
