//! Launch domain model.
//!
//! A launch is identified by its `id` alone: two records with the same id are
//! the same entity even if a refetch changed their mission name or outcome.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::LaunchDeckError;

/// One of the two independent launch collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    /// Launches that already happened.
    Past,
    /// Scheduled launches.
    Future,
}

impl Partition {
    pub const ALL: [Partition; 2] = [Partition::Past, Partition::Future];

    pub fn as_str(&self) -> &'static str {
        match self {
            Partition::Past => "past",
            Partition::Future => "future",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Partition {
    type Err = LaunchDeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "past" => Ok(Partition::Past),
            "future" | "upcoming" => Ok(Partition::Future),
            other => Err(LaunchDeckError::config(format!(
                "unknown partition '{}' (expected 'past' or 'future')",
                other
            ))),
        }
    }
}

/// Tri-state launch result.
///
/// Serialized as a JSON boolean, or `null` when the outcome is not known yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum LaunchOutcome {
    Success,
    Failure,
    #[default]
    Unknown,
}

impl From<Option<bool>> for LaunchOutcome {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => LaunchOutcome::Success,
            Some(false) => LaunchOutcome::Failure,
            None => LaunchOutcome::Unknown,
        }
    }
}

impl From<LaunchOutcome> for Option<bool> {
    fn from(value: LaunchOutcome) -> Self {
        match value {
            LaunchOutcome::Success => Some(true),
            LaunchOutcome::Failure => Some(false),
            LaunchOutcome::Unknown => None,
        }
    }
}

/// Rocket reference carried by every launch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rocket {
    pub name: String,
    #[serde(rename = "type")]
    pub rocket_type: String,
}

impl Rocket {
    pub fn new(name: impl Into<String>, rocket_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rocket_type: rocket_type.into(),
        }
    }
}

/// A single launch as listed in a partition.
///
/// Equality and hashing only consider `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRecord {
    /// Opaque identifier, unique within a partition and stable across fetches.
    pub id: String,
    pub mission_name: String,
    pub rocket: Rocket,
    /// ISO-8601-like timestamp as delivered by the service.
    pub launch_date_local: String,
    #[serde(default)]
    pub launch_success: LaunchOutcome,
}

impl LaunchRecord {
    pub fn new(
        id: impl Into<String>,
        mission_name: impl Into<String>,
        rocket: Rocket,
        launch_date_local: impl Into<String>,
        launch_success: LaunchOutcome,
    ) -> Self {
        Self {
            id: id.into(),
            mission_name: mission_name.into(),
            rocket,
            launch_date_local: launch_date_local.into(),
            launch_success,
        }
    }

    /// Parses `launch_date_local` into an instant.
    ///
    /// Accepts RFC 3339 with an offset (`2006-03-25T10:30:00+12:00`) and falls
    /// back to a naive timestamp interpreted as UTC. Returns `None` otherwise.
    pub fn launch_instant(&self) -> Option<DateTime<FixedOffset>> {
        parse_launch_date(&self.launch_date_local)
    }
}

impl PartialEq for LaunchRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for LaunchRecord {}

impl Hash for LaunchRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Extended view of a single launch, fetched on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchDetail {
    #[serde(flatten)]
    pub launch: LaunchRecord,
    #[serde(default)]
    pub details: Option<String>,
}

impl LaunchDetail {
    /// Free-text details, or `"NA"` when the service has none.
    pub fn details_or_na(&self) -> &str {
        match self.details.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => "NA",
        }
    }
}

pub(crate) fn parse_launch_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}
