//! Pure projection of the page state into what the screen shows.
//!
//! `PageView::render` rebuilds the rows from the list and `PageView::tick`
//! refreshes the time labels in place. Neither touches the terminal.

use crate::remaining::CountdownLabel;
use crate::CountdownEntry;
use chrono::{DateTime, Utc};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "No countdowns yet. Add one!";
pub const LOAD_ERROR_MESSAGE: &str =
    "Could not load the countdowns. Check that the endpoint URL is correct and deployed.";

/// Lifecycle of the page: `Loading` until the first fetch settles, then
/// `Ready` for good, or `Error` with no way back short of a restart.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Ready(Vec<CountdownEntry>),
    Error(String),
}

impl PageState {
    pub fn entries(&self) -> Option<&[CountdownEntry]> {
        match self {
            Self::Ready(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn entries_mut(&mut self) -> Option<&mut Vec<CountdownEntry>> {
        match self {
            Self::Ready(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// One displayed countdown row.
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownItemView {
    pub index: usize,
    pub title: String,
    pub target_date: String,
    pub target: Option<DateTime<Utc>>,
    pub label: CountdownLabel,
}

impl CountdownItemView {
    fn from_entry(index: usize, entry: &CountdownEntry) -> Self {
        Self {
            index,
            title: entry.title.clone(),
            target_date: entry.target_date.clone(),
            target: entry.target(),
            label: CountdownLabel::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Loading,
    Error { detail: String },
    Empty,
    Items(Vec<CountdownItemView>),
}

impl PageView {
    pub fn render(state: &PageState) -> Self {
        match state {
            PageState::Loading => Self::Loading,
            PageState::Error(detail) => Self::Error {
                detail: detail.clone(),
            },
            PageState::Ready(entries) if entries.is_empty() => Self::Empty,
            PageState::Ready(entries) => Self::Items(
                entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| CountdownItemView::from_entry(index, entry))
                    .collect(),
            ),
        }
    }

    pub fn tick(&mut self, now: DateTime<Utc>) {
        if let Self::Items(items) = self {
            for item in items.iter_mut() {
                item.label = CountdownLabel::compute(item.target, now);
            }
        }
    }

    pub fn items(&self) -> &[CountdownItemView] {
        match self {
            Self::Items(items) => items,
            _ => &[],
        }
    }

    /// Full-panel message shown instead of rows, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE),
            Self::Error { .. } => Some(LOAD_ERROR_MESSAGE),
            Self::Empty => Some(EMPTY_MESSAGE),
            Self::Items(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remaining::{Remaining, COMPLETED_LABEL};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
    }

    fn entries() -> Vec<CountdownEntry> {
        vec![
            CountdownEntry::new("Launch", "2030-01-02"),
            CountdownEntry::new("Past", "2029-12-31"),
            CountdownEntry::new("Typo", "soon"),
        ]
    }

    #[test]
    fn test_render_one_item_per_entry_in_order() {
        let view = PageView::render(&PageState::Ready(entries()));
        let titles: Vec<_> = view.items().iter().map(|item| item.title.as_str()).collect();
        let indexes: Vec<_> = view.items().iter().map(|item| item.index).collect();

        assert_eq!(titles, vec!["Launch", "Past", "Typo"]);
        assert_eq!(indexes, vec![0, 1, 2]);
        assert!(view.message().is_none());
    }

    #[test]
    fn test_render_starts_pending() {
        let view = PageView::render(&PageState::Ready(entries()));
        assert!(view
            .items()
            .iter()
            .all(|item| item.label == CountdownLabel::Pending));
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let view = PageView::render(&PageState::Ready(Vec::new()));
        assert_eq!(view, PageView::Empty);
        assert_eq!(view.message(), Some(EMPTY_MESSAGE));
        assert!(view.items().is_empty());
    }

    #[test]
    fn test_loading_and_error_messages() {
        assert_eq!(
            PageView::render(&PageState::Loading).message(),
            Some(LOADING_MESSAGE)
        );

        let view = PageView::render(&PageState::Error("HTTP 404".to_string()));
        assert_eq!(view.message(), Some(LOAD_ERROR_MESSAGE));
        assert_eq!(
            view,
            PageView::Error {
                detail: "HTTP 404".to_string()
            }
        );
    }

    #[test]
    fn test_tick_updates_every_label() {
        let mut view = PageView::render(&PageState::Ready(entries()));
        view.tick(now());

        let labels: Vec<_> = view.items().iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            vec![
                CountdownLabel::Remaining(Remaining {
                    days: 1,
                    hours: 0,
                    minutes: 0,
                    seconds: 0
                }),
                CountdownLabel::Completed,
                CountdownLabel::InvalidDate,
            ]
        );
        assert_eq!(view.items()[1].label.to_string(), COMPLETED_LABEL);
    }

    #[test]
    fn test_tick_on_message_views_is_noop() {
        let mut view = PageView::render(&PageState::Loading);
        view.tick(now());
        assert_eq!(view, PageView::Loading);
    }

    #[test]
    fn test_page_state_accessors() {
        let mut state = PageState::Ready(entries());
        assert!(state.is_ready());
        assert_eq!(state.entries().map(|e| e.len()), Some(3));
        state.entries_mut().unwrap().clear();
        assert_eq!(state.entries().map(|e| e.len()), Some(0));

        let mut failed = PageState::Error("boom".to_string());
        assert!(failed.entries().is_none());
        assert!(failed.entries_mut().is_none());
        assert!(!PageState::Loading.is_ready());
    }
}
