//! Code for loading program settings.
use crate::log::DEFAULT_LOG_LEVEL;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Default log level for program
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Default number of sorted-curve rows shown in the preview
fn default_preview_rows() -> usize {
    300
}

/// Program settings from config file
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// The default program log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// How many sorted-curve rows to include in the preview
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            preview_rows: default_preview_rows(),
        }
    }
}

impl Settings {
    /// Read the settings file from the current directory.
    ///
    /// If the file is not present, default values for settings will be used
    ///
    /// # Returns
    ///
    /// The program settings as a `Settings` struct or an error if the file is invalid
    pub fn load() -> Result<Settings> {
        Self::load_from_path(Path::new(SETTINGS_FILE_NAME))
    }

    /// Read from the specified path, falling back to defaults if absent
    fn load_from_path(file_path: &Path) -> Result<Settings> {
        if !file_path.is_file() {
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", file_path.display()))
    }
}
