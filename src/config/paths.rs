//! Path resolution for zametki configuration and data files.
//!
//! All zametki data is stored in `~/.zametki/`:
//! - `config.yaml` - Main configuration file
//! - `zametki.db` - SQLite database with the notes table

use std::path::PathBuf;

use crate::error::ZametkiError;

/// Paths to zametki configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.zametki/`
    pub root: PathBuf,
    /// Config file: `~/.zametki/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.zametki/zametki.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ZametkiError> {
        let home = std::env::var("HOME")
            .map_err(|_| ZametkiError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".zametki")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("zametki.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), ZametkiError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                ZametkiError::Config(format!(
                    "Failed to create directory {:?}: {e}",
                    self.root
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".zametki"))
        })
    }
}
