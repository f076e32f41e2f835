//! Persisted favorites for one partition.

use std::sync::Arc;

use super::model::FavoriteSet;
use crate::error::Result;
use crate::launch::{LaunchRecord, Partition};
use crate::storage::KeyValueStore;

/// Storage key holding the favorite records of a partition.
pub fn storage_key(partition: Partition) -> &'static str {
    match partition {
        Partition::Past => "favoritePastLaunches",
        Partition::Future => "favoriteFutureLaunches",
    }
}

/// Favorites of a single partition, written through to a [`KeyValueStore`].
///
/// Only the record sequence is persisted. The id index is rebuilt on load,
/// so the two can never disagree after a reload.
pub struct FavoritesStore {
    partition: Partition,
    favorites: FavoriteSet,
    storage: Arc<dyn KeyValueStore>,
}

impl FavoritesStore {
    /// Loads the partition's favorites from `storage`.
    ///
    /// Missing, unreadable or malformed values yield an empty store; the
    /// problem is logged and never surfaced to the caller.
    pub fn load(partition: Partition, storage: Arc<dyn KeyValueStore>) -> Self {
        let key = storage_key(partition);
        let favorites = match storage.load(key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<LaunchRecord>>(&raw) {
                Ok(records) => FavoriteSet::from_records(records),
                Err(e) => {
                    tracing::warn!(key, error = %e, "Ignoring malformed favorites entry");
                    FavoriteSet::new()
                }
            },
            Ok(None) => FavoriteSet::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read favorites, starting empty");
                FavoriteSet::new()
            }
        };

        tracing::debug!(
            partition = %partition,
            count = favorites.len(),
            "Loaded favorites"
        );

        Self {
            partition,
            favorites,
            storage,
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// The underlying favorite set.
    pub fn set(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Current favorites in insertion order.
    pub fn all(&self) -> &[LaunchRecord] {
        self.favorites.records()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.favorites.ids()
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Adds or removes `record` (matched by id) and persists immediately.
    ///
    /// Returns `true` if the record is a favorite afterwards. When the write
    /// fails the in-memory change is undone and the error is returned.
    pub fn toggle(&mut self, record: &LaunchRecord) -> Result<bool> {
        if let Some((position, removed)) = self.favorites.remove(&record.id) {
            if let Err(e) = self.persist() {
                self.favorites.restore(position, removed);
                return Err(e);
            }
            tracing::info!(partition = %self.partition, id = %record.id, "Removed favorite");
            Ok(false)
        } else {
            self.favorites.insert(record.clone());
            if let Err(e) = self.persist() {
                self.favorites.remove(&record.id);
                return Err(e);
            }
            tracing::info!(partition = %self.partition, id = %record.id, "Added favorite");
            Ok(true)
        }
    }

    fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string(self.favorites.records())?;
        self.storage.save(storage_key(self.partition), &serialized)
    }
}
