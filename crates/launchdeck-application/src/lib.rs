//! Application layer for LaunchDeck.
//!
//! Coordinates the domain types from `launchdeck-core` into the list state the
//! display layer renders: which partition is active, what is filtered, which
//! launches are pinned and which launch is open in the detail view.

pub mod controller;
pub mod launch_list_usecase;
pub mod view;

pub use controller::{FetchTicket, LaunchListController};
pub use launch_list_usecase::LaunchListUseCase;
pub use view::{DerivedLists, DetailView, LaunchListView, PartitionStatus, recompute};
