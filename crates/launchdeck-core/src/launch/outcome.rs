//! Outcome classification.
//!
//! The same mapping feeds the filter vocabulary, the filter predicate and every
//! display of a launch's result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::model::LaunchOutcome;
use crate::error::LaunchDeckError;

/// Display category of a launch outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OutcomeCategory {
    Yes,
    No,
    #[serde(rename = "NA")]
    NA,
}

impl OutcomeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeCategory::Yes => "Yes",
            OutcomeCategory::No => "No",
            OutcomeCategory::NA => "NA",
        }
    }
}

impl fmt::Display for OutcomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutcomeCategory {
    type Err = LaunchDeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(OutcomeCategory::Yes),
            "no" => Ok(OutcomeCategory::No),
            "na" => Ok(OutcomeCategory::NA),
            other => Err(LaunchDeckError::config(format!(
                "unknown outcome '{}' (expected Yes, No or NA)",
                other
            ))),
        }
    }
}

/// Maps a tri-state outcome to its display category.
pub fn classify(outcome: LaunchOutcome) -> OutcomeCategory {
    match outcome {
        LaunchOutcome::Success => OutcomeCategory::Yes,
        LaunchOutcome::Failure => OutcomeCategory::No,
        LaunchOutcome::Unknown => OutcomeCategory::NA,
    }
}
