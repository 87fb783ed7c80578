//! Volunteer events shown on the page and the search the form submits.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dom::SelectOption;
use crate::error::{EvlistError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Published,
    Ongoing,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
        }
    }

    /// Class carried by the status badge
    pub fn css_class(&self) -> String {
        format!("status-{}", self.as_str())
    }

    pub fn all() -> [EventStatus; 3] {
        [Self::Published, Self::Ongoing, Self::Completed]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub ngo: String,
    pub date: NaiveDateTime,
    pub location: String,
    #[serde(default = "default_status")]
    pub status: EventStatus,
    pub max_volunteers: u32,
    #[serde(default)]
    pub registered: u32,
    #[serde(default)]
    pub image: Option<PathBuf>,
}

fn default_status() -> EventStatus {
    EventStatus::Published
}

impl Event {
    pub fn available_spots(&self) -> u32 {
        self.max_volunteers.saturating_sub(self.registered)
    }

    pub fn is_full(&self) -> bool {
        self.available_spots() == 0
    }

    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        self.date < now
    }

    /// Case-insensitive match against title, description or location
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.title, &self.description, &self.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// What the search form submits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub status: Option<EventStatus>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, status: Option<EventStatus>) -> Self {
        Self {
            text: text.into(),
            status,
        }
    }
}

/// All known events plus the filtering the page reload applies
#[derive(Debug, Clone, Default)]
pub struct Listing {
    events: Vec<Event>,
    hide_past_events: bool,
}

impl Listing {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            hide_past_events: false,
        }
    }

    pub fn hide_past_events(mut self, hide: bool) -> Self {
        self.hide_past_events = hide;
        self
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut events: Vec<Event> = serde_json::from_str(&contents)?;
        let base = path.parent().unwrap_or(Path::new(""));

        for event in &mut events {
            if event.title.trim().is_empty() {
                return Err(EvlistError::Listing(format!(
                    "event {} has an empty title",
                    event.id
                )));
            }
            // Image paths are relative to the listing file
            if let Some(image) = event.image.as_mut().filter(|i| i.is_relative()) {
                *image = base.join(&*image);
            }
        }

        tracing::info!("Loaded {} events from {}", events.len(), path.display());
        Ok(Self::new(events))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events the page shows for `query`, in date order
    pub fn search(&self, query: &SearchQuery, now: DateTime<Local>) -> Vec<Event> {
        let now = now.naive_local();
        let mut results: Vec<Event> = self
            .events
            .iter()
            .filter(|e| !self.hide_past_events || !e.is_past(now))
            .filter(|e| e.matches_query(&query.text))
            .filter(|e| query.status.is_none_or(|s| e.status == s))
            .cloned()
            .collect();

        results.sort_by_key(|e| e.date);
        results
    }
}

/// Options of the status filter select; the empty value means "All"
pub fn status_filter_options() -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("All", "")];
    options.extend(
        EventStatus::all()
            .into_iter()
            .map(|s| SelectOption::new(s.display_name(), s.as_str())),
    );
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn event(id: u64, title: &str, location: &str, status: EventStatus, day: u32) -> Event {
        Event {
            id,
            title: title.to_string(),
            description: format!("{} description", title),
            ngo: "Green Earth".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 11, day)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            location: location.to_string(),
            status,
            max_volunteers: 10,
            registered: 0,
            image: None,
        }
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 11, 10, 0, 0, 0).unwrap()
    }

    fn listing() -> Listing {
        Listing::new(vec![
            event(1, "Beach Cleanup", "Santa Monica", EventStatus::Published, 20),
            event(2, "Tree Planting", "Griffith Park", EventStatus::Ongoing, 15),
            event(3, "Food Drive", "Downtown", EventStatus::Completed, 2),
        ])
    }

    #[test]
    fn test_query_matches_title_description_or_location_case_insensitively() {
        let listing = listing();
        let results = listing.search(&SearchQuery::new("BEACH", None), now());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);

        let results = listing.search(&SearchQuery::new("griffith", None), now());
        assert_eq!(results[0].id, 2);

        let results = listing.search(&SearchQuery::new("drive description", None), now());
        assert_eq!(results[0].id, 3);
    }

    #[test]
    fn test_blank_query_returns_everything_sorted_by_date() {
        let ids: Vec<_> = listing()
            .search(&SearchQuery::new("   ", None), now())
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_status_filter() {
        let results = listing().search(&SearchQuery::new("", Some(EventStatus::Ongoing)), now());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Tree Planting");
    }

    #[test]
    fn test_past_events_hidden_when_configured() {
        let ids: Vec<_> = listing()
            .hide_past_events(true)
            .search(&SearchQuery::default(), now())
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_spots() {
        let mut e = event(1, "Beach Cleanup", "Santa Monica", EventStatus::Published, 20);
        e.registered = 12;
        assert_eq!(e.available_spots(), 0);
        assert!(e.is_full());
    }

    #[test]
    fn test_load_reads_json_file_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[{"id": 7, "title": "River Walk", "description": "Pick up litter",
                "ngo": "Clean Rivers", "date": "2026-12-01T10:00:00",
                "location": "Riverside", "max_volunteers": 12}]"#,
        )
        .unwrap();

        let listing = Listing::load(&path).unwrap();
        assert_eq!(listing.len(), 1);
        let results = listing.search(&SearchQuery::default(), now());
        assert_eq!(results[0].status, EventStatus::Published);
        assert_eq!(results[0].registered, 0);
    }

    #[test]
    fn test_load_resolves_images_next_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[{"id": 7, "title": "River Walk", "description": "", "ngo": "x",
                "date": "2026-12-01T10:00:00", "location": "", "max_volunteers": 1,
                "image": "img/river.png"}]"#,
        )
        .unwrap();

        let listing = Listing::load(&path).unwrap();
        let results = listing.search(&SearchQuery::default(), now());
        assert_eq!(
            results[0].image.as_deref(),
            Some(dir.path().join("img/river.png").as_path())
        );
    }

    #[test]
    fn test_load_rejects_untitled_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[{"id": 1, "title": " ", "description": "", "ngo": "x",
                "date": "2026-12-01T10:00:00", "location": "", "max_volunteers": 1}]"#,
        )
        .unwrap();

        assert!(matches!(Listing::load(&path), Err(EvlistError::Listing(_))));
    }

    #[test]
    fn test_filter_options_start_with_all() {
        let options = status_filter_options();
        assert_eq!(options[0], SelectOption::new("All", ""));
        assert_eq!(EventStatus::parse(&options[2].value), Some(EventStatus::Ongoing));
        assert_eq!(EventStatus::parse(""), None);
    }
}
