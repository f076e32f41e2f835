//! Infrastructure for LaunchDeck: storage backends, the GraphQL launch source
//! and configuration loading.

pub mod config;
pub mod dto;
pub mod graphql_launch_source;
pub mod paths;
pub mod storage;

pub use crate::config::AppConfig;
pub use crate::graphql_launch_source::GraphQlLaunchSource;
pub use crate::paths::LaunchDeckPaths;
pub use crate::storage::{JsonFileStore, MemoryStore};
