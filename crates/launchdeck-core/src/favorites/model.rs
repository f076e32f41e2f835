//! In-memory favorite set.

use std::collections::HashSet;

use crate::launch::LaunchRecord;

/// Ordered favorite launches plus an id index for membership checks.
///
/// Both structures are only mutated together, so every indexed id has exactly
/// one record in the sequence and vice versa.
#[derive(Debug, Clone, Default)]
pub struct FavoriteSet {
    records: Vec<LaunchRecord>,
    ids: HashSet<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from stored records; later duplicates of an id are dropped.
    pub fn from_records(records: impl IntoIterator<Item = LaunchRecord>) -> Self {
        let mut set = Self::new();
        for record in records {
            if !set.contains(&record.id) {
                set.insert(record);
            }
        }
        set
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends `record` unless its id is already present.
    pub fn insert(&mut self, record: LaunchRecord) -> bool {
        if !self.ids.insert(record.id.clone()) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Removes the record with `id`, returning it with its former position.
    pub fn remove(&mut self, id: &str) -> Option<(usize, LaunchRecord)> {
        if !self.ids.remove(id) {
            return None;
        }
        let position = self.records.iter().position(|record| record.id == id)?;
        Some((position, self.records.remove(position)))
    }

    /// Puts a removed record back at its former position.
    pub(crate) fn restore(&mut self, position: usize, record: LaunchRecord) {
        if self.ids.insert(record.id.clone()) {
            let position = position.min(self.records.len());
            self.records.insert(position, record);
        }
    }

    /// Flips membership of `record` by id. Returns `true` if it is now a favorite.
    pub fn toggle(&mut self, record: &LaunchRecord) -> bool {
        if self.remove(&record.id).is_some() {
            false
        } else {
            self.insert(record.clone())
        }
    }

    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let sequence_ids: HashSet<&str> = self.ids().collect();
        sequence_ids.len() == self.records.len()
            && sequence_ids.len() == self.ids.len()
            && self.ids.iter().all(|id| sequence_ids.contains(id.as_str()))
    }
}
