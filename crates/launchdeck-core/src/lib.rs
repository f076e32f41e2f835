//! Domain layer for LaunchDeck.
//!
//! Holds the launch model, outcome classification, faceted filtering and the
//! persisted favorites store, plus the collaborator traits (`LaunchSource`,
//! `KeyValueStore`) that infrastructure crates implement.

pub mod error;
pub mod favorites;
pub mod launch;
pub mod storage;

// Re-export common error type
pub use error::{LaunchDeckError, Result};
pub use storage::KeyValueStore;
