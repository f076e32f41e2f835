//! Key-value persistence trait.

use crate::error::Result;

/// String-keyed persistence capability, the equivalent of browser local storage.
///
/// Values are opaque serialized strings; callers own the format. Implementations
/// must make a successful `save` visible to the next `load` of the same key.
pub trait KeyValueStore: Send + Sync {
    /// Loads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: value present
    /// - `Ok(None)`: nothing stored under `key`
    /// - `Err(_)`: the backend could not be read
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}
