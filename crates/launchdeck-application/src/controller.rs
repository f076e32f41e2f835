//! Launch list controller.
//!
//! A synchronous state machine over the active partition, the filter
//! selection and the detail selection. Fetching happens outside: starting a
//! fetch hands out a [`FetchTicket`], and only the latest ticket issued for a
//! partition may complete it. Older completions are dropped.

use launchdeck_core::error::{LaunchDeckError, Result};
use launchdeck_core::favorites::FavoritesStore;
use launchdeck_core::launch::filter::{self, FilterSelection};
use launchdeck_core::launch::{LaunchDetail, LaunchRecord, OutcomeCategory, Partition};
use launchdeck_core::storage::KeyValueStore;
use std::collections::HashMap;
use std::sync::Arc;

use crate::view::{DetailView, LaunchListView, PartitionStatus, recompute};

/// Handle for one in-flight partition fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub partition: Partition,
    seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PartitionState {
    Idle,
    Loading { seq: u64 },
    Ready(Vec<LaunchRecord>),
    Unavailable(String),
}

static IDLE: PartitionState = PartitionState::Idle;

pub struct LaunchListController {
    storage: Arc<dyn KeyValueStore>,
    active: Partition,
    selection: FilterSelection,
    partitions: HashMap<Partition, PartitionState>,
    favorites: HashMap<Partition, FavoritesStore>,
    detail: DetailView,
    next_seq: u64,
}

impl LaunchListController {
    /// Creates a controller showing `initial`, loading its favorites from `storage`.
    pub fn new(storage: Arc<dyn KeyValueStore>, initial: Partition) -> Self {
        let mut controller = Self {
            storage,
            active: initial,
            selection: FilterSelection::default(),
            partitions: HashMap::new(),
            favorites: HashMap::new(),
            detail: DetailView::Closed,
            next_seq: 0,
        };
        controller.ensure_favorites(initial);
        controller
    }

    pub fn active_partition(&self) -> Partition {
        self.active
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    // ------------------------------------------------------------------
    // Partition and fetch lifecycle
    // ------------------------------------------------------------------

    /// Switches the active partition. Filters and favorites are kept.
    ///
    /// Returns a ticket only when the partition was never fetched. A failed
    /// partition stays unavailable until [`refresh`](Self::refresh).
    pub fn select_partition(&mut self, partition: Partition) -> Option<FetchTicket> {
        if self.active != partition {
            tracing::debug!(from = %self.active, to = %partition, "Switching partition");
        }
        self.active = partition;
        self.ensure_favorites(partition);

        let needs_fetch = matches!(self.state(partition), PartitionState::Idle);
        needs_fetch.then(|| self.issue_ticket(partition))
    }

    /// User-requested refetch of the active partition.
    ///
    /// Returns `None` if a fetch for it is already in flight.
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        if matches!(self.state(self.active), PartitionState::Loading { .. }) {
            return None;
        }
        Some(self.issue_ticket(self.active))
    }

    /// Records the result of a fetch. Returns `false` if the ticket was stale.
    ///
    /// Failures replace any earlier data with an unavailable state.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<LaunchRecord>>,
    ) -> bool {
        let current = matches!(
            self.state(ticket.partition),
            PartitionState::Loading { seq } if *seq == ticket.seq
        );
        if !current {
            tracing::warn!(partition = %ticket.partition, "Discarding stale fetch result");
            return false;
        }

        let next = match result {
            Ok(records) => {
                tracing::debug!(partition = %ticket.partition, count = records.len(), "Partition ready");
                PartitionState::Ready(records)
            }
            Err(e) => {
                tracing::warn!(partition = %ticket.partition, error = %e, "Partition unavailable");
                PartitionState::Unavailable(e.to_string())
            }
        };
        self.partitions.insert(ticket.partition, next);
        true
    }

    pub fn status(&self, partition: Partition) -> PartitionStatus {
        match self.state(partition) {
            PartitionState::Idle | PartitionState::Loading { .. } => PartitionStatus::Loading,
            PartitionState::Ready(_) => PartitionStatus::Ready,
            PartitionState::Unavailable(message) => PartitionStatus::Unavailable(message.clone()),
        }
    }

    /// The last fetched collection for `partition`, if it is ready.
    pub fn raw(&self, partition: Partition) -> Option<&[LaunchRecord]> {
        match self.partitions.get(&partition) {
            Some(PartitionState::Ready(records)) => Some(records),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    pub fn set_rocket_filter<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection.selected_rockets = names.into_iter().map(Into::into).collect();
    }

    pub fn set_outcome_filter<I>(&mut self, categories: I)
    where
        I: IntoIterator<Item = OutcomeCategory>,
    {
        self.selection.selected_outcomes = categories.into_iter().collect();
    }

    pub fn clear_filters(&mut self) {
        self.selection = FilterSelection::default();
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    /// Toggles `record` in the active partition's favorites.
    pub fn toggle_favorite(&mut self, record: &LaunchRecord) -> Result<bool> {
        let partition = self.active;
        self.ensure_favorites(partition);
        self.favorites
            .get_mut(&partition)
            .ok_or_else(|| LaunchDeckError::storage("favorites not loaded"))?
            .toggle(record)
    }

    /// Toggles the launch with `id`, looked up in the fetched collection first
    /// and then among existing favorites.
    pub fn toggle_favorite_by_id(&mut self, id: &str) -> Result<bool> {
        let record = self
            .find_record(id)
            .cloned()
            .ok_or_else(|| LaunchDeckError::not_found("launch", id))?;
        self.toggle_favorite(&record)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.active_favorites()
            .is_some_and(|store| store.is_favorite(id))
    }

    /// All favorites of the active partition, unfiltered.
    pub fn favorites(&self) -> &[LaunchRecord] {
        self.active_favorites().map(|store| store.all()).unwrap_or(&[])
    }

    // ------------------------------------------------------------------
    // Detail
    // ------------------------------------------------------------------

    pub fn open_detail(&mut self, id: impl Into<String>) {
        self.detail = DetailView::Loading { id: id.into() };
    }

    pub fn close_detail(&mut self) {
        self.detail = DetailView::Closed;
    }

    pub fn detail_selection(&self) -> Option<&str> {
        match &self.detail {
            DetailView::Closed => None,
            DetailView::Loading { id }
            | DetailView::NotFound { id }
            | DetailView::Unavailable { id, .. } => Some(id.as_str()),
            DetailView::Ready(detail) => Some(detail.launch.id.as_str()),
        }
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    /// Records a detail lookup for `id`. Ignored if another launch (or none)
    /// is selected by now.
    pub fn complete_detail(&mut self, id: &str, result: Result<LaunchDetail>) -> bool {
        if self.detail_selection() != Some(id) {
            tracing::debug!(id, "Discarding detail for a launch that is no longer selected");
            return false;
        }
        self.detail = match result {
            Ok(detail) => DetailView::Ready(detail),
            Err(LaunchDeckError::NotFound { .. }) => DetailView::NotFound { id: id.to_string() },
            Err(e) => DetailView::Unavailable {
                id: id.to_string(),
                message: e.to_string(),
            },
        };
        true
    }

    // ------------------------------------------------------------------
    // Derived view
    // ------------------------------------------------------------------

    /// Recomputes the view for the active partition from current state.
    pub fn view(&self) -> LaunchListView {
        let status = self.status(self.active);
        let raw = self.raw(self.active).unwrap_or(&[]);

        let lists = match (self.active_favorites(), &status) {
            (Some(store), PartitionStatus::Ready) => recompute(raw, store.set(), &self.selection),
            _ => Default::default(),
        };

        LaunchListView {
            partition: self.active,
            status,
            favorites: lists.favorites,
            launches: lists.launches,
            rocket_options: filter::distinct_rocket_names(raw),
            outcome_options: filter::distinct_outcome_categories(raw),
            selection: self.selection.clone(),
            detail: self.detail_selection().map(str::to_string),
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn state(&self, partition: Partition) -> &PartitionState {
        self.partitions.get(&partition).unwrap_or(&IDLE)
    }

    fn issue_ticket(&mut self, partition: Partition) -> FetchTicket {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.partitions.insert(partition, PartitionState::Loading { seq });
        tracing::debug!(partition = %partition, seq, "Fetch started");
        FetchTicket { partition, seq }
    }

    fn ensure_favorites(&mut self, partition: Partition) {
        if !self.favorites.contains_key(&partition) {
            let store = FavoritesStore::load(partition, self.storage.clone());
            self.favorites.insert(partition, store);
        }
    }

    fn active_favorites(&self) -> Option<&FavoritesStore> {
        self.favorites.get(&self.active)
    }

    fn find_record(&self, id: &str) -> Option<&LaunchRecord> {
        self.raw(self.active)
            .and_then(|records| records.iter().find(|record| record.id == id))
            .or_else(|| self.favorites().iter().find(|record| record.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchdeck_core::launch::{LaunchOutcome, Rocket};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStore {
        values: Mutex<HashMap<String, String>>,
    }

    impl KeyValueStore for MapStore {
        fn load(&self, key: &str) -> Result<Option<String>> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        fn save(&self, key: &str, value: &str) -> Result<()> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn launch(id: &str, rocket: &str, outcome: LaunchOutcome) -> LaunchRecord {
        LaunchRecord::new(
            id,
            format!("Mission {}", id),
            Rocket::new(rocket, "rocket"),
            "2020-01-01T00:00:00Z",
            outcome,
        )
    }

    fn past_catalog() -> Vec<LaunchRecord> {
        vec![
            launch("1", "Falcon 9", LaunchOutcome::Success),
            launch("2", "Falcon Heavy", LaunchOutcome::Unknown),
        ]
    }

    fn ids(records: &[LaunchRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn ready_controller(storage: Arc<dyn KeyValueStore>) -> LaunchListController {
        let mut controller = LaunchListController::new(storage, Partition::Past);
        let ticket = controller.select_partition(Partition::Past).unwrap();
        assert!(controller.complete_fetch(ticket, Ok(past_catalog())));
        controller
    }

    #[test]
    fn test_outcome_filter_scenario() {
        let mut controller = ready_controller(Arc::new(MapStore::default()));
        controller.set_outcome_filter([OutcomeCategory::NA]);

        let view = controller.view();
        assert_eq!(view.status, PartitionStatus::Ready);
        assert_eq!(ids(&view.launches), vec!["2"]);
        assert!(view.favorites.is_empty());
    }

    #[test]
    fn test_favorite_moves_record_out_of_main_list() {
        let mut controller = ready_controller(Arc::new(MapStore::default()));
        assert!(controller.toggle_favorite_by_id("1").unwrap());

        let view = controller.view();
        assert_eq!(ids(&view.favorites), vec!["1"]);
        assert_eq!(ids(&view.launches), vec!["2"]);
        assert_eq!(view.combined().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["1", "2"]);

        assert!(!controller.toggle_favorite_by_id("1").unwrap());
        let view = controller.view();
        assert!(view.favorites.is_empty());
        assert_eq!(ids(&view.launches), vec!["1", "2"]);
    }

    #[test]
    fn test_toggle_unknown_id_is_not_found() {
        let mut controller = ready_controller(Arc::new(MapStore::default()));
        let err = controller.toggle_favorite_by_id("404").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_filters_survive_partition_switch() {
        let mut controller = ready_controller(Arc::new(MapStore::default()));
        controller.set_rocket_filter(["Falcon 9"]);

        let ticket = controller.select_partition(Partition::Future).unwrap();
        controller.complete_fetch(ticket, Ok(vec![launch("10", "Falcon 9", LaunchOutcome::Unknown)]));
        assert_eq!(controller.view().selection.selected_rockets.len(), 1);

        // Returning to a ready partition does not refetch.
        assert!(controller.select_partition(Partition::Past).is_none());
        assert_eq!(ids(&controller.view().launches), vec!["1"]);
    }

    #[test]
    fn test_favorites_are_per_partition() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MapStore::default());
        let mut controller = ready_controller(storage);
        controller.toggle_favorite_by_id("1").unwrap();

        let ticket = controller.select_partition(Partition::Future).unwrap();
        controller.complete_fetch(ticket, Ok(vec![launch("1", "Falcon 9", LaunchOutcome::Unknown)]));

        assert!(!controller.is_favorite("1"));
        assert_eq!(ids(&controller.view().launches), vec!["1"]);
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut controller = LaunchListController::new(Arc::new(MapStore::default()), Partition::Past);
        let first = controller.select_partition(Partition::Past).unwrap();

        // Only one fetch per partition while loading.
        assert!(controller.select_partition(Partition::Past).is_none());
        assert!(controller.refresh().is_none());

        assert!(controller.complete_fetch(first, Err(LaunchDeckError::fetch("timeout"))));
        let retry = controller.refresh().unwrap();

        assert!(!controller.complete_fetch(first, Ok(past_catalog())));
        assert!(controller.complete_fetch(retry, Ok(vec![launch("3", "Falcon 1", LaunchOutcome::Failure)])));
        assert_eq!(ids(&controller.view().launches), vec!["3"]);
    }

    #[test]
    fn test_result_for_inactive_partition_is_kept_not_rendered() {
        let mut controller = LaunchListController::new(Arc::new(MapStore::default()), Partition::Past);
        let past = controller.select_partition(Partition::Past).unwrap();
        let future = controller.select_partition(Partition::Future).unwrap();

        assert!(controller.complete_fetch(past, Ok(past_catalog())));
        let view = controller.view();
        assert_eq!(view.partition, Partition::Future);
        assert_eq!(view.status, PartitionStatus::Loading);
        assert!(view.is_empty());

        controller.complete_fetch(future, Ok(vec![]));
        assert!(controller.select_partition(Partition::Past).is_none());
        assert_eq!(controller.view().len(), 2);
    }

    #[test]
    fn test_fetch_error_drops_stale_data() {
        let mut controller = ready_controller(Arc::new(MapStore::default()));
        let ticket = controller.refresh().unwrap();
        controller.complete_fetch(ticket, Err(LaunchDeckError::fetch("HTTP 502")));

        let view = controller.view();
        assert!(matches!(view.status, PartitionStatus::Unavailable(ref m) if m.contains("HTTP 502")));
        assert!(view.is_empty());
        assert!(view.rocket_options.is_empty());
    }

    #[test]
    fn test_unavailable_partition_waits_for_refresh() {
        let mut controller = LaunchListController::new(Arc::new(MapStore::default()), Partition::Future);
        let ticket = controller.select_partition(Partition::Future).unwrap();
        controller.complete_fetch(ticket, Err(LaunchDeckError::fetch("timeout")));

        assert!(controller.select_partition(Partition::Past).is_some());
        assert!(controller.select_partition(Partition::Future).is_none());
        assert!(matches!(
            controller.status(Partition::Future),
            PartitionStatus::Unavailable(_)
        ));

        assert!(controller.refresh().is_some());
        assert_eq!(controller.status(Partition::Future), PartitionStatus::Loading);
    }

    #[test]
    fn test_detail_selection_does_not_touch_lists() {
        let mut controller = ready_controller(Arc::new(MapStore::default()));
        let before = controller.view();

        controller.open_detail("2");
        let during = controller.view();
        assert_eq!(during.detail.as_deref(), Some("2"));
        assert_eq!(during.launches, before.launches);

        assert!(controller.complete_detail("2", Err(LaunchDeckError::not_found("launch", "2"))));
        assert_eq!(controller.detail(), &DetailView::NotFound { id: "2".to_string() });

        controller.open_detail("1");
        assert!(!controller.complete_detail("2", Err(LaunchDeckError::fetch("late"))));

        controller.close_detail();
        assert!(controller.view().detail.is_none());
    }

    #[test]
    fn test_option_vocabularies_come_from_raw_collection() {
        let controller = ready_controller(Arc::new(MapStore::default()));
        let view = controller.view();
        assert_eq!(
            view.rocket_options.into_iter().collect::<Vec<_>>(),
            vec!["Falcon 9".to_string(), "Falcon Heavy".to_string()]
        );
        assert_eq!(
            view.outcome_options.into_iter().collect::<Vec<_>>(),
            vec![OutcomeCategory::Yes, OutcomeCategory::NA]
        );
    }
}
