pub mod favorite;
pub mod list;
pub mod show;

use anyhow::{Context, Result};
use launchdeck_application::LaunchListUseCase;
use launchdeck_core::launch::{LaunchSource, Partition};
use launchdeck_core::storage::KeyValueStore;
use launchdeck_infrastructure::{AppConfig, GraphQlLaunchSource, JsonFileStore, MemoryStore};
use std::path::PathBuf;
use std::sync::Arc;

/// Command-line overrides applied on top of the loaded config.
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub endpoint: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub ephemeral: bool,
}

/// Collaborators shared by every command.
pub struct AppContext {
    source: Arc<dyn LaunchSource>,
    storage: Arc<dyn KeyValueStore>,
}

impl AppContext {
    pub fn build(overrides: Overrides) -> Result<Self> {
        let mut config = AppConfig::load(overrides.config.as_deref()).context("Failed to load config")?;
        if let Some(endpoint) = overrides.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(data_dir) = overrides.data_dir {
            config.data_dir = Some(data_dir);
        }

        let source = GraphQlLaunchSource::new(config.endpoint.clone(), config.request_timeout())
            .context("Failed to create launch source")?;

        let storage: Arc<dyn KeyValueStore> = if overrides.ephemeral {
            Arc::new(MemoryStore::new())
        } else {
            let path = config
                .favorites_file()
                .context("Failed to resolve favorites file")?;
            tracing::debug!(path = %path.display(), "Using favorites file");
            Arc::new(JsonFileStore::new(path))
        };

        tracing::debug!(endpoint = %config.endpoint, "Configured launch source");
        Ok(Self {
            source: Arc::new(source),
            storage,
        })
    }

    pub fn usecase(&self, partition: Partition) -> LaunchListUseCase {
        LaunchListUseCase::new(self.source.clone(), self.storage.clone(), partition)
    }
}
