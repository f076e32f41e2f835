//! Data transfer objects for the remote launch service.

pub mod launch;
