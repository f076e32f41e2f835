//! Application configuration.
//!
//! Resolution order, lowest to highest priority:
//! 1. built-in defaults
//! 2. `~/.config/launchdeck/config.toml` (or an explicit path)
//! 3. environment variables (`LAUNCHDECK_ENDPOINT`, `LAUNCHDECK_DATA_DIR`)
//!
//! Command-line flags are applied on top by the binary.

use launchdeck_core::error::{LaunchDeckError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::graphql_launch_source::DEFAULT_ENDPOINT;
use crate::paths::LaunchDeckPaths;

pub const ENDPOINT_ENV: &str = "LAUNCHDECK_ENDPOINT";
pub const DATA_DIR_ENV: &str = "LAUNCHDECK_DATA_DIR";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// GraphQL endpoint serving `launchesPast`, `launchesUpcoming` and `launch`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Directory holding `favorites.json`. Defaults to the platform data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            data_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads the config from `path`, or from the default location when `None`.
    ///
    /// A missing file yields defaults. A file that exists but does not parse
    /// is an error; configuration mistakes should be visible.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => LaunchDeckPaths::config_file()?,
        };

        let mut config = Self::from_file(&path)?;
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            LaunchDeckError::config(format!("Invalid config file {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Applies environment overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        if let Some(data_dir) = lookup(DATA_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            self.data_dir = Some(PathBuf::from(data_dir));
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolves the data directory, falling back to the platform default.
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => LaunchDeckPaths::data_dir(),
        }
    }

    pub fn favorites_file(&self) -> Result<PathBuf> {
        Ok(LaunchDeckPaths::favorites_file(&self.resolved_data_dir()?))
    }
}
