//! Faceted filtering over launch collections.
//!
//! A record passes when it matches every non-empty dimension; inside one
//! dimension any selected value is enough.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::model::LaunchRecord;
use super::outcome::{OutcomeCategory, classify};

/// Rocket-name and outcome selections. Empty sets mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub selected_rockets: BTreeSet<String>,
    pub selected_outcomes: BTreeSet<OutcomeCategory>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rockets<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_rockets = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_outcomes<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = OutcomeCategory>,
    {
        self.selected_outcomes = categories.into_iter().collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.selected_rockets.is_empty() && self.selected_outcomes.is_empty()
    }

    /// Whether a single record passes both dimensions.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        let rocket_ok = self.selected_rockets.is_empty()
            || self.selected_rockets.contains(&record.rocket.name);
        let outcome_ok = self.selected_outcomes.is_empty()
            || self
                .selected_outcomes
                .contains(&classify(record.launch_success));
        rocket_ok && outcome_ok
    }
}

/// Distinct rocket names in `records`, skipping blank names.
pub fn distinct_rocket_names<'a, I>(records: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .map(|record| record.rocket.name.as_str())
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Distinct outcome categories present in `records`.
pub fn distinct_outcome_categories<'a, I>(records: I) -> BTreeSet<OutcomeCategory>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .map(|record| classify(record.launch_success))
        .collect()
}

/// Returns the records matching `selection`, in their original order.
pub fn apply(records: &[LaunchRecord], selection: &FilterSelection) -> Vec<LaunchRecord> {
    if selection.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| selection.matches(record))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Stable sort by parsed launch date. Unparseable dates go last in both orders.
pub fn sort_by_launch_date(records: &mut [LaunchRecord], order: SortOrder) {
    records.sort_by(|a, b| match (a.launch_instant(), b.launch_instant()) {
        (Some(left), Some(right)) => match order {
            SortOrder::Ascending => left.cmp(&right),
            SortOrder::Descending => right.cmp(&left),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::model::{LaunchOutcome, Rocket};

    fn launch(id: &str, rocket: &str, outcome: LaunchOutcome, date: &str) -> LaunchRecord {
        LaunchRecord::new(id, format!("Mission {}", id), Rocket::new(rocket, "rocket"), date, outcome)
    }

    fn catalog() -> Vec<LaunchRecord> {
        vec![
            launch("1", "Falcon 9", LaunchOutcome::Success, "2020-01-07T21:19:00-05:00"),
            launch("2", "Falcon Heavy", LaunchOutcome::Unknown, "2019-04-11T18:35:00-04:00"),
            launch("3", "Falcon 1", LaunchOutcome::Failure, "2006-03-25T10:30:00+12:00"),
            launch("4", "Falcon 9", LaunchOutcome::Failure, "2016-09-01T09:07:00-04:00"),
            launch("5", "", LaunchOutcome::Unknown, "not a date"),
        ]
    }

    fn ids(records: &[LaunchRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let records = catalog();
        let filtered = apply(&records, &FilterSelection::new());
        assert_eq!(ids(&filtered), ids(&records));
    }

    #[test]
    fn test_outcome_na_selects_unknown_launches() {
        let records = vec![
            launch("1", "Falcon 9", LaunchOutcome::Success, "2020-01-07T21:19:00-05:00"),
            launch("2", "Falcon Heavy", LaunchOutcome::Unknown, "2019-04-11T18:35:00-04:00"),
        ];
        let selection = FilterSelection::new().with_outcomes([OutcomeCategory::NA]);
        assert_eq!(ids(&apply(&records, &selection)), vec!["2"]);
    }

    #[test]
    fn test_dimensions_are_conjunctive_values_disjunctive() {
        let records = catalog();

        let rockets = FilterSelection::new().with_rockets(["Falcon 9", "Falcon 1"]);
        assert_eq!(ids(&apply(&records, &rockets)), vec!["1", "3", "4"]);

        let both = rockets.with_outcomes([OutcomeCategory::No]);
        assert_eq!(ids(&apply(&records, &both)), vec!["3", "4"]);

        let none = FilterSelection::new()
            .with_rockets(["Falcon Heavy"])
            .with_outcomes([OutcomeCategory::Yes]);
        assert!(apply(&records, &none).is_empty());
    }

    #[test]
    fn test_filtered_result_is_ordered_subset() {
        let records = catalog();
        let selection = FilterSelection::new().with_outcomes([OutcomeCategory::NA, OutcomeCategory::No]);
        let filtered = apply(&records, &selection);

        let mut cursor = records.iter();
        for record in &filtered {
            assert!(cursor.any(|candidate| candidate.id == record.id));
        }
    }

    #[test]
    fn test_distinct_vocabularies() {
        let records = catalog();
        let rockets: Vec<String> = distinct_rocket_names(&records).into_iter().collect();
        assert_eq!(rockets, vec!["Falcon 1", "Falcon 9", "Falcon Heavy"]);

        let outcomes: Vec<OutcomeCategory> = distinct_outcome_categories(&records).into_iter().collect();
        assert_eq!(
            outcomes,
            vec![OutcomeCategory::Yes, OutcomeCategory::No, OutcomeCategory::NA]
        );
    }

    #[test]
    fn test_sort_by_launch_date() {
        let mut records = catalog();
        sort_by_launch_date(&mut records, SortOrder::Ascending);
        assert_eq!(ids(&records), vec!["3", "4", "2", "1", "5"]);

        sort_by_launch_date(&mut records, SortOrder::Descending);
        assert_eq!(ids(&records), vec!["1", "2", "4", "3", "5"]);
    }
}
