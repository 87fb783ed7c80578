use chrono::NaiveDate;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

use crate::app_core::PageCore;
use crate::config::Settings;
use crate::dom::{ElementId, ElementLookup, Selector};
use crate::input::{Key, KeyEvent, MouseInput};
use crate::listing::{Event, EventStatus, Listing};
use crate::notify::{Notifier, Severity};
use crate::state::PageState;

/// Notifier that records every call instead of showing anything
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    calls: Vec<(String, Severity)>,
}

impl RecordingNotifier {
    pub fn calls(&self) -> &[(String, Severity)] {
        &self.calls
    }

    /// Calls carrying `message`
    pub fn count(&self, message: &str) -> usize {
        self.calls.iter().filter(|(m, _)| m == message).count()
    }
}

impl Notifier for RecordingNotifier {
    fn show_notification(&mut self, message: &str, severity: Severity) {
        self.calls.push((message.to_string(), severity));
    }
}

/// An upcoming event with predictable fields, dated `id` days into 2030
pub fn sample_event(id: u64, title: &str, status: EventStatus) -> Event {
    let date = NaiveDate::from_ymd_opt(2030, 1, 1)
        .and_then(|d| d.checked_add_days(chrono::Days::new(id)))
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid sample date");

    Event {
        id,
        title: title.to_string(),
        description: format!("Join us for {}", title.to_lowercase()),
        ngo: "Green Earth".to_string(),
        date,
        location: "Santa Monica".to_string(),
        status,
        max_volunteers: 20,
        registered: 5,
        image: None,
    }
}

/// Drives a [`PageCore`] the way the terminal loop does, with a manual clock
pub struct TestPage {
    core: PageCore<RecordingNotifier>,
    now: Instant,
    area: Rect,
}

impl TestPage {
    pub const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 40,
    };

    pub fn new(events: Vec<Event>) -> Self {
        Self::with_settings(events, Settings::default())
    }

    pub fn with_settings(events: Vec<Event>, settings: Settings) -> Self {
        let now = Instant::now();
        let core = PageCore::new(
            Listing::new(events),
            settings,
            RecordingNotifier::default(),
            now,
        );
        let mut page = Self {
            core,
            now,
            area: Self::AREA,
        };
        page.relayout();
        page
    }

    fn relayout(&mut self) {
        self.core.layout(self.area);
    }

    /// Resize the viewport and lay the page out again
    pub fn resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
        self.relayout();
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.send_key_event(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
        self.relayout();
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type `text` one character at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    pub fn click(&mut self, column: u16, row: u16) {
        self.core.handle_mouse(MouseInput::click(column, row));
        self.relayout();
    }

    pub fn hover(&mut self, column: u16, row: u16) {
        self.core.handle_mouse(MouseInput::moved(column, row));
        self.relayout();
    }

    /// Click the middle of an element's laid-out area
    pub fn click_element(&mut self, id: ElementId) {
        let (column, row) = self.center_of(id);
        self.click(column, row);
    }

    pub fn hover_element(&mut self, id: ElementId) {
        let (column, row) = self.center_of(id);
        self.hover(column, row);
    }

    fn center_of(&self, id: ElementId) -> (u16, u16) {
        let rect = self
            .state()
            .doc
            .get(id)
            .and_then(|e| e.rect)
            .unwrap_or_else(|| panic!("element {:?} is not laid out", id));
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    /// Move the clock forward and run due timers
    pub fn advance(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
        self.core.tick(self.now);
        self.relayout();
    }

    pub fn query(&self, selector: Selector) -> Option<ElementId> {
        self.state().doc.query(selector)
    }

    pub fn query_all(&self, selector: Selector) -> Vec<ElementId> {
        self.state().doc.query_all(selector)
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &PageState {
        self.core.state()
    }

    pub fn notifier(&self) -> &RecordingNotifier {
        self.core.notifier()
    }

    pub fn core(&self) -> &PageCore<RecordingNotifier> {
        &self.core
    }

    /// Assert that the page should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "Page should be marked for quit but is not"
        );
    }

    /// Assert that the page should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "Page should NOT be marked for quit but is"
        );
    }
}
