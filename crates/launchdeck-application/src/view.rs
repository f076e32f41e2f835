//! Derived list view handed to the display layer.

use launchdeck_core::favorites::FavoriteSet;
use launchdeck_core::launch::filter::{self, FilterSelection};
use launchdeck_core::launch::{LaunchDetail, LaunchRecord, OutcomeCategory, Partition};
use std::collections::BTreeSet;

/// Load state of the active partition as seen by the display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionStatus {
    Loading,
    Ready,
    /// The last fetch failed; nothing is shown until the user refreshes.
    Unavailable(String),
}

/// State of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Closed,
    Loading { id: String },
    Ready(LaunchDetail),
    /// The id no longer resolves on the service ("no data found").
    NotFound { id: String },
    Unavailable { id: String, message: String },
}

/// The two filtered sequences for one partition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedLists {
    pub favorites: Vec<LaunchRecord>,
    pub launches: Vec<LaunchRecord>,
}

/// Computes the favorites and main lists for a raw collection.
///
/// Favorites are matched by id and only ever appear in `favorites`; the main
/// list never repeats them, even if a refetch changed their other fields.
pub fn recompute(
    raw: &[LaunchRecord],
    favorites: &FavoriteSet,
    selection: &FilterSelection,
) -> DerivedLists {
    let launches = filter::apply(raw, selection)
        .into_iter()
        .filter(|record| !favorites.contains(&record.id))
        .collect();
    DerivedLists {
        favorites: filter::apply(favorites.records(), selection),
        launches,
    }
}

/// Everything the display layer needs to render the active partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchListView {
    pub partition: Partition,
    pub status: PartitionStatus,
    /// Favorited launches passing the current filters, in pin order.
    pub favorites: Vec<LaunchRecord>,
    /// Non-favorite launches passing the current filters, in service order.
    pub launches: Vec<LaunchRecord>,
    pub rocket_options: BTreeSet<String>,
    pub outcome_options: BTreeSet<OutcomeCategory>,
    pub selection: FilterSelection,
    pub detail: Option<String>,
}

impl LaunchListView {
    /// Single-list presentation: favorites first, then the rest.
    pub fn combined(&self) -> impl Iterator<Item = &LaunchRecord> {
        self.favorites.iter().chain(self.launches.iter())
    }

    pub fn len(&self) -> usize {
        self.favorites.len() + self.launches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty() && self.launches.is_empty()
    }
}
