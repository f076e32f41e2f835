//! Launch source trait.
//!
//! Defines the remote query capability the list engine consumes.

use async_trait::async_trait;

use super::model::{LaunchDetail, LaunchRecord, Partition};
use crate::error::Result;

/// An abstract source of launch data.
///
/// Decouples the list engine from the transport (GraphQL over HTTP, fixtures,
/// a local cache). Implementations classify their failures as
/// `LaunchDeckError::Fetch`, or `LaunchDeckError::NotFound` for unknown ids.
#[async_trait]
pub trait LaunchSource: Send + Sync {
    /// Fetches the full collection for one partition.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<LaunchRecord>)`: records in service order
    /// - `Err(LaunchDeckError::Fetch)`: the service could not be queried
    async fn fetch_partition(&self, partition: Partition) -> Result<Vec<LaunchRecord>>;

    /// Fetches the extended view of a single launch.
    ///
    /// # Returns
    ///
    /// - `Ok(LaunchDetail)`: launch found
    /// - `Err(LaunchDeckError::NotFound)`: no launch with that id
    /// - `Err(LaunchDeckError::Fetch)`: the service could not be queried
    async fn fetch_detail(&self, id: &str) -> Result<LaunchDetail>;
}
