//! Configuration settings for zametki.
//!
//! Settings are loaded from `~/.zametki/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::ZametkiError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns defaults if no config file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ZametkiError> {
        let paths = Paths::new()?;
        Self::load_from(&paths)
    }

    /// Load configuration from specific paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(paths: &Paths) -> Result<Self, ZametkiError> {
        if !paths.config_file.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&paths.config_file)
            .map_err(|e| ZametkiError::Config(format!("Failed to read config: {e}")))?;

        serde_yaml::from_str(&contents)
            .map_err(|e| ZametkiError::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to specific paths.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_to(&self, paths: &Paths) -> Result<(), ZametkiError> {
        paths.ensure_dirs()?;

        let contents = serde_yaml::to_string(self)
            .map_err(|e| ZametkiError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(&paths.config_file, contents)
            .map_err(|e| ZametkiError::Config(format!("Failed to write config: {e}")))
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}
