//! Path management for LaunchDeck configuration and data files.
//!
//! ```text
//! ~/.config/launchdeck/          # Config directory
//! └── config.toml                # Application configuration
//!
//! ~/.local/share/launchdeck/     # Data directory
//! └── favorites.json             # Persisted favorites (JsonFileStore)
//! ```

use launchdeck_core::error::{LaunchDeckError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "launchdeck";

pub struct LaunchDeckPaths;

impl LaunchDeckPaths {
    /// Returns the configuration directory (e.g. `~/.config/launchdeck/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| LaunchDeckError::config("Cannot find config directory"))
    }

    /// Returns the data directory (e.g. `~/.local/share/launchdeck/`).
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| LaunchDeckError::config("Cannot find data directory"))
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the favorites file inside `data_dir`.
    pub fn favorites_file(data_dir: &std::path::Path) -> PathBuf {
        data_dir.join("favorites.json")
    }
}
