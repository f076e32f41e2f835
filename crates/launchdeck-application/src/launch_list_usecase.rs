//! Launch list use case.
//!
//! Drives a [`LaunchListController`] with an asynchronous [`LaunchSource`]:
//! transitions that need data start a fetch, await it and feed the result
//! back through the controller's ticket check.

use launchdeck_core::error::Result;
use launchdeck_core::launch::{LaunchRecord, LaunchSource, OutcomeCategory, Partition};
use launchdeck_core::storage::KeyValueStore;
use std::sync::Arc;

use crate::controller::{FetchTicket, LaunchListController};
use crate::view::{DetailView, LaunchListView};

/// Use case for browsing, filtering and pinning launches.
///
/// # Responsibilities
///
/// - Fetching a partition when it becomes active and has no data
/// - Explicit refresh (there is no automatic retry)
/// - Favorite toggling with immediate persistence
/// - Loading the detail view on demand
pub struct LaunchListUseCase {
    /// Remote launch data
    source: Arc<dyn LaunchSource>,
    /// List state machine
    controller: LaunchListController,
}

impl LaunchListUseCase {
    /// Creates a new `LaunchListUseCase`.
    ///
    /// # Arguments
    ///
    /// * `source` - Where launches and launch details are fetched from
    /// * `storage` - Persistence for favorites
    /// * `initial` - Partition shown first; nothing is fetched until
    ///   [`select_partition`](Self::select_partition) is called
    pub fn new(
        source: Arc<dyn LaunchSource>,
        storage: Arc<dyn KeyValueStore>,
        initial: Partition,
    ) -> Self {
        Self {
            source,
            controller: LaunchListController::new(storage, initial),
        }
    }

    pub fn controller(&self) -> &LaunchListController {
        &self.controller
    }

    pub fn view(&self) -> LaunchListView {
        self.controller.view()
    }

    /// Activates `partition`, fetching it if needed, and returns the new view.
    pub async fn select_partition(&mut self, partition: Partition) -> LaunchListView {
        if let Some(ticket) = self.controller.select_partition(partition) {
            self.run_fetch(ticket).await;
        }
        self.controller.view()
    }

    /// Refetches the active partition.
    pub async fn refresh(&mut self) -> LaunchListView {
        if let Some(ticket) = self.controller.refresh() {
            self.run_fetch(ticket).await;
        }
        self.controller.view()
    }

    pub fn set_rocket_filter<I, S>(&mut self, names: I) -> LaunchListView
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.controller.set_rocket_filter(names);
        self.controller.view()
    }

    pub fn set_outcome_filter<I>(&mut self, categories: I) -> LaunchListView
    where
        I: IntoIterator<Item = OutcomeCategory>,
    {
        self.controller.set_outcome_filter(categories);
        self.controller.view()
    }

    pub fn clear_filters(&mut self) -> LaunchListView {
        self.controller.clear_filters();
        self.controller.view()
    }

    /// Toggles a favorite in the active partition. Returns the new membership.
    pub fn toggle_favorite(&mut self, record: &LaunchRecord) -> Result<bool> {
        self.controller.toggle_favorite(record)
    }

    /// Toggles a favorite by id (fetched launches first, then stored favorites).
    pub fn toggle_favorite_by_id(&mut self, id: &str) -> Result<bool> {
        self.controller.toggle_favorite_by_id(id)
    }

    /// Opens the detail view for `id` and loads it.
    pub async fn open_detail(&mut self, id: &str) -> DetailView {
        self.controller.open_detail(id);
        let result = self.source.fetch_detail(id).await;
        self.controller.complete_detail(id, result);
        self.controller.detail().clone()
    }

    pub fn close_detail(&mut self) {
        self.controller.close_detail();
    }

    async fn run_fetch(&mut self, ticket: FetchTicket) {
        let result = self.source.fetch_partition(ticket.partition).await;
        self.controller.complete_fetch(ticket, result);
    }
}
