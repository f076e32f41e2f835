//! File-backed key-value store.
//!
//! All keys live in one JSON object file. Writes go through a temporary file,
//! fsync and an atomic rename while an exclusive lock is held, so a reader
//! never sees a half-written file and concurrent writers never drop each
//! other's keys.

use fs2::FileExt;
use launchdeck_core::error::{LaunchDeckError, Result};
use launchdeck_core::storage::KeyValueStore;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

type Entries = BTreeMap<String, String>;

/// [`KeyValueStore`] persisted as a single JSON file.
///
/// ```text
/// {
///   "favoritePastLaunches": "[{\"id\":\"1\", ...}]",
///   "favoriteFutureLaunches": "[]"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all entries. A missing or empty file is an empty map; a corrupt
    /// file is logged and also treated as empty.
    fn read_entries(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        match serde_json::from_str::<Entries>(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Store file is corrupt, treating it as empty"
                );
                Ok(Entries::new())
            }
        }
    }

    /// Replaces the file with `entries`. Each write gets its own temp file in
    /// the target directory, which is then renamed over the store file.
    fn write_entries(&self, entries: &Entries) -> Result<()> {
        let dir = parent_dir(&self.path);
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(entries)?;

        let mut tmp_file = NamedTempFile::new_in(dir)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.as_file().sync_all()?;
        tmp_file
            .persist(&self.path)
            .map_err(|e| LaunchDeckError::from(e.error))?;
        Ok(())
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let _lock = FileLock::acquire(&self.path)?;

        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)?;

        tracing::debug!(path = %self.path.display(), key, "Saved store entry");
        Ok(())
    }
}

/// Exclusive lock on a sibling `.lock` file, released when dropped.
///
/// The lock file itself is never removed: every writer must lock the same
/// inode for the lock to exclude anyone.
struct FileLock {
    _file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");
        fs::create_dir_all(parent_dir(&lock_path))?;

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()
            .map_err(|e| LaunchDeckError::storage(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { _file: file })
    }
}
