//! Configuration management for zametki.
//!
//! This module handles loading and saving configuration from `~/.zametki/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig};
