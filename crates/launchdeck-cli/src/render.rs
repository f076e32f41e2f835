//! Plain-text rendering of list and detail views.

use colored::Colorize;
use launchdeck_application::{DetailView, LaunchListView};
use launchdeck_core::launch::filter::{self, SortOrder};
use launchdeck_core::launch::{LaunchDetail, LaunchRecord, classify};
use std::ops::Range;

const HEADERS: [&str; 7] = ["Fav", "Id", "Mission Name", "Rocket Name", "Rocket Type", "Launch Date", "Success"];

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One page of the combined list, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub size: usize,
}

impl Page {
    /// Zero values are treated as 1.
    pub fn new(number: usize, size: usize) -> Self {
        Self {
            number: number.max(1),
            size: size.max(1),
        }
    }

    pub fn count(&self, total: usize) -> usize {
        total.div_ceil(self.size).max(1)
    }

    /// Row range of this page over `total` rows; past the end it is empty.
    pub fn bounds(&self, total: usize) -> Range<usize> {
        let start = ((self.number - 1) * self.size).min(total);
        let end = (start + self.size).min(total);
        start..end
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// `d/m/yyyy` in the launch's own offset, or the raw string if unparseable.
pub fn format_launch_date(record: &LaunchRecord) -> String {
    match record.launch_instant() {
        Some(instant) => instant.format("%-d/%-m/%Y").to_string(),
        None => record.launch_date_local.clone(),
    }
}

fn row(record: &LaunchRecord, favorite: bool) -> [String; 7] {
    [
        if favorite { "★".to_string() } else { String::new() },
        record.id.clone(),
        record.mission_name.clone(),
        record.rocket.name.clone(),
        record.rocket.rocket_type.clone(),
        format_launch_date(record),
        classify(record.launch_success).to_string(),
    ]
}

/// Renders records as an aligned table; favorites get a gold star.
pub fn table(favorites: &[LaunchRecord], launches: &[LaunchRecord]) -> String {
    let rows: Vec<[String; 7]> = favorites
        .iter()
        .map(|record| row(record, true))
        .chain(launches.iter().map(|record| row(record, false)))
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = *w))
        .collect();
    out.push_str(&header.join("  ").bold().to_string());
    out.push('\n');

    for cells in rows {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(column, (cell, w))| {
                let padded = format!("{:<width$}", cell, width = *w);
                if column == 0 && !cell.is_empty() {
                    padded.yellow().to_string()
                } else {
                    padded
                }
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Renders one page of a list view, optionally sorting each section by
/// launch date. Favorites come first and count toward the page size.
pub fn list_view(view: &LaunchListView, sort: Option<SortOrder>, page: Page) -> String {
    let mut favorites = view.favorites.clone();
    let mut launches = view.launches.clone();
    if let Some(order) = sort {
        filter::sort_by_launch_date(&mut favorites, order);
        filter::sort_by_launch_date(&mut launches, order);
    }

    let rockets: Vec<&str> = view.rocket_options.iter().map(String::as_str).collect();
    let outcomes: Vec<&str> = view.outcome_options.iter().map(|o| o.as_str()).collect();

    let mut out = String::new();
    out.push_str(&format!("{} launches\n", capitalize(view.partition.as_str())).bold().to_string());
    out.push_str(&format!("Rockets:  {}\n", rockets.join(", ")));
    out.push_str(&format!("Outcomes: {}\n\n", outcomes.join(", ")));
    let total = favorites.len() + launches.len();
    if total == 0 {
        out.push_str("No launches match the current filters.\n");
        return out;
    }

    let rows = page.bounds(total);
    let pinned = favorites.len();
    let favorites_page = &favorites[rows.start.min(pinned)..rows.end.min(pinned)];
    let launches_page = &launches[rows.start.saturating_sub(pinned)..rows.end.saturating_sub(pinned)];
    if rows.is_empty() {
        out.push_str(&format!("No launches on page {}.\n", page.number));
    } else {
        out.push_str(&table(favorites_page, launches_page));
    }
    out.push_str(&format!(
        "\nPage {} of {} ({} launches)\n",
        page.number,
        page.count(total),
        total
    ));
    out
}

pub fn detail(detail: &LaunchDetail) -> String {
    let launch = &detail.launch;
    let mut out = String::new();
    out.push_str(&format!("{}\n", launch.mission_name.bold()));
    out.push_str(&format!("Rocket Name:    {}\n", launch.rocket.name));
    out.push_str(&format!("Rocket Type:    {}\n", launch.rocket.rocket_type));
    out.push_str(&format!("Launch Date:    {}\n", format_launch_date(launch)));
    out.push_str(&format!("Launch Success: {}\n", classify(launch.launch_success)));
    out.push_str(&format!("Details:        {}\n", detail.details_or_na()));
    out
}

pub fn detail_view(view: &DetailView) -> String {
    match view {
        DetailView::Ready(launch) => detail(launch),
        DetailView::NotFound { .. } => "No data found.\n".to_string(),
        DetailView::Unavailable { message, .. } => format!("Error: {}\n", message),
        DetailView::Loading { id } => format!("Loading launch {}...\n", id),
        DetailView::Closed => String::new(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchdeck_application::PartitionStatus;
    use launchdeck_core::launch::{LaunchOutcome, Partition, Rocket};

    fn launch(id: &str, date: &str, outcome: LaunchOutcome) -> LaunchRecord {
        LaunchRecord::new(id, format!("Mission {}", id), Rocket::new("Falcon 9", "FT"), date, outcome)
    }

    #[test]
    fn test_format_launch_date() {
        let record = launch("1", "2006-03-25T10:30:00+12:00", LaunchOutcome::Failure);
        assert_eq!(format_launch_date(&record), "25/3/2006");

        let unparsed = launch("2", "TBD", LaunchOutcome::Unknown);
        assert_eq!(format_launch_date(&unparsed), "TBD");
    }

    #[test]
    fn test_table_lists_favorites_first() {
        colored::control::set_override(false);
        let favorites = vec![launch("9", "2020-01-01T00:00:00Z", LaunchOutcome::Success)];
        let launches = vec![launch("3", "2021-01-01T00:00:00Z", LaunchOutcome::Unknown)];

        let rendered = table(&favorites, &launches);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Fav"));
        assert!(lines[1].starts_with('★') && lines[1].contains("Mission 9") && lines[1].contains("Yes"));
        assert!(lines[2].contains("Mission 3") && lines[2].ends_with("NA"));
    }

    #[test]
    fn test_detail_shows_three_way_outcome_and_na_details() {
        colored::control::set_override(false);
        let rendered = detail(&LaunchDetail {
            launch: launch("5", "2030-01-01T00:00:00Z", LaunchOutcome::Unknown),
            details: None,
        });
        assert!(rendered.contains("Launch Success: NA"));
        assert!(rendered.contains("Details:        NA"));
    }

    #[test]
    fn test_page_bounds() {
        let page = Page::new(2, 20);
        assert_eq!(page.bounds(45), 20..40);
        assert_eq!(Page::new(3, 20).bounds(45), 40..45);
        assert!(Page::new(4, 20).bounds(45).is_empty());
        assert_eq!(page.count(45), 3);
        assert_eq!(page.count(0), 1);
        assert_eq!(Page::new(0, 0), Page::new(1, 1));
    }

    #[test]
    fn test_list_view_pages_across_favorites_and_launches() {
        colored::control::set_override(false);
        let favorites: Vec<LaunchRecord> = (0..3)
            .map(|i| launch(&format!("f{}", i), "2020-01-01T00:00:00Z", LaunchOutcome::Success))
            .collect();
        let launches: Vec<LaunchRecord> = (0..22)
            .map(|i| launch(&format!("m{}", i), "2021-01-01T00:00:00Z", LaunchOutcome::Failure))
            .collect();
        let view = LaunchListView {
            partition: Partition::Past,
            status: PartitionStatus::Ready,
            favorites,
            launches,
            rocket_options: Default::default(),
            outcome_options: Default::default(),
            selection: Default::default(),
            detail: None,
        };

        let first = list_view(&view, None, Page::default());
        assert!(first.contains("Mission f0") && first.contains("Mission m16"));
        assert!(!first.contains("Mission m17"));
        assert!(first.contains("Page 1 of 2 (25 launches)"));

        let second = list_view(&view, None, Page::new(2, DEFAULT_PAGE_SIZE));
        assert!(!second.contains("Mission f0") && !second.contains("Mission m16 "));
        assert!(second.contains("Mission m17") && second.contains("Mission m21"));
        assert!(second.contains("Page 2 of 2"));

        assert!(list_view(&view, None, Page::new(5, DEFAULT_PAGE_SIZE)).contains("No launches on page 5."));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("past"), "Past");
        assert_eq!(capitalize(""), "");
    }
}
