//! User settings for wizard-nav
//!
//! Holds the localized button labels and the mapping from button styles and
//! actions to the names the rendering layer expects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::WizardPaths;
use crate::error::WizardError;
use crate::models::{ButtonAction, ButtonDescriptor, ButtonLabels, ButtonStyle};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// CSS-style class names for each button style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleClasses {
    #[serde(default = "default_primary_class")]
    pub primary: String,
    #[serde(default = "default_plain_class")]
    pub plain: String,
}

fn default_primary_class() -> String {
    "btn btn-primary".to_string()
}

fn default_plain_class() -> String {
    "btn".to_string()
}

impl Default for StyleClasses {
    fn default() -> Self {
        Self {
            primary: default_primary_class(),
            plain: default_plain_class(),
        }
    }
}

impl StyleClasses {
    /// Class string for a style
    pub fn class_for(&self, style: ButtonStyle) -> &str {
        match style {
            ButtonStyle::Primary => &self.primary,
            ButtonStyle::Plain => &self.plain,
        }
    }
}

/// Form field names the buttons post under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonFieldNames {
    /// Field carrying the target step of a navigation button
    #[serde(default = "default_navigate_field")]
    pub navigate: String,
    /// Field of the submit button
    #[serde(default = "default_submit_field")]
    pub submit: String,
}

fn default_navigate_field() -> String {
    "wizard_goto_step".to_string()
}

fn default_submit_field() -> String {
    "submit".to_string()
}

impl Default for ButtonFieldNames {
    fn default() -> Self {
        Self {
            navigate: default_navigate_field(),
            submit: default_submit_field(),
        }
    }
}

impl ButtonFieldNames {
    /// Field name a button posts under
    pub fn field_for<S>(&self, button: &ButtonDescriptor<S>) -> &str {
        match button.action {
            ButtonAction::NavigateTo(_) => &self.navigate,
            ButtonAction::Submit => &self.submit,
        }
    }
}

/// User settings for wizard-nav
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Button text by kind
    #[serde(default)]
    pub labels: ButtonLabels,

    /// Class names by style
    #[serde(default)]
    pub style_classes: StyleClasses,

    /// Form field names by action
    #[serde(default)]
    pub field_names: ButtonFieldNames,

    /// Default output format for CLI commands
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            labels: ButtonLabels::default(),
            style_classes: StyleClasses::default(),
            field_names: ButtonFieldNames::default(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &WizardPaths) -> Result<Self, WizardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                WizardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WizardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WizardPaths) -> Result<(), WizardError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            WizardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            WizardError::Io(format!("Failed to write settings file: {}", e))
        })?;

        tracing::debug!(path = %settings_path.display(), "saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ButtonKind;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.labels.get(ButtonKind::Next), "Next");
        assert_eq!(settings.style_classes.class_for(ButtonStyle::Primary), "btn btn-primary");
        assert_eq!(settings.style_classes.class_for(ButtonStyle::Plain), "btn");
        assert_eq!(settings.field_names.navigate, "wizard_goto_step");
        assert_eq!(settings.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WizardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.labels.set(ButtonKind::Finish, "Terminer");
        settings.output_format = OutputFormat::Json;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.labels.get(ButtonKind::Finish), "Terminer");
        assert_eq!(loaded.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WizardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.labels, ButtonLabels::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WizardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"labels": {"next": "Weiter"}, "style_classes": {"primary": "button is-primary"}}"#,
        )
        .unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.labels.next, "Weiter");
        assert_eq!(settings.labels.finish, "Finish");
        assert_eq!(settings.style_classes.primary, "button is-primary");
        assert_eq!(settings.style_classes.plain, "btn");
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WizardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, WizardError::Config(_)));
    }

    #[test]
    fn test_field_names() {
        let names = ButtonFieldNames::default();
        let back = ButtonDescriptor::navigate(ButtonKind::GotoPrevious, 1usize, "Previous");
        let next: ButtonDescriptor<usize> = ButtonDescriptor::submit(ButtonKind::Next, "Next");
        assert_eq!(names.field_for(&back), "wizard_goto_step");
        assert_eq!(names.field_for(&next), "submit");
    }
}
