//! Path management for wizard-nav
//!
//! ## Path Resolution Order
//!
//! 1. `WIZARD_NAV_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/wizard-nav` or `~/.config/wizard-nav`
//! 3. Windows: `%APPDATA%\wizard-nav`

use std::path::PathBuf;

use crate::error::WizardError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "WIZARD_NAV_CONFIG_DIR";

/// Manages the paths used by wizard-nav
#[derive(Debug, Clone)]
pub struct WizardPaths {
    base_dir: PathBuf,
}

impl WizardPaths {
    /// Resolve the config directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or app-data directory can be determined.
    pub fn new() -> Result<Self, WizardError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create WizardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/wizard-nav/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), WizardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WizardError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, WizardError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                WizardError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("wizard-nav"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, WizardError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| WizardError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("wizard-nav"))
}
