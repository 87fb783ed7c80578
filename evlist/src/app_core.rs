use chrono::Local;
use ratatui::layout::Rect;
use std::time::Instant;

use crate::behaviors::PageContext;
use crate::commands::executor::{self, Host};
use crate::commands::handlers;
use crate::config::Settings;
use crate::dom::{DomEvent, ElementLookup, EventKind, Selector};
use crate::input::{KeyEvent, MouseInput};
use crate::listing::{Listing, SearchQuery};
use crate::notify::Notifier;
use crate::page::log_page_stats;
use crate::state::PageState;
use crate::timers::{TimerAction, TimerQueue};
use crate::ui::layouts;

/// Testable page core without terminal dependencies
///
/// Generic over N (notifier) so tests can record notifications instead of
/// drawing them. The core owns the clock-driven timer queue; callers feed it
/// the current instant through [`PageCore::tick`].
pub struct PageCore<N: Notifier> {
    state: PageState,
    timers: TimerQueue,
    notifier: N,
    listing: Listing,
    settings: Settings,
}

impl<N: Notifier> PageCore<N> {
    /// Create the core and load the unfiltered page
    pub fn new(listing: Listing, settings: Settings, notifier: N, now: Instant) -> Self {
        let mut core = Self {
            state: PageState::new(Vec::new(), SearchQuery::default(), &settings),
            timers: TimerQueue::new(now),
            notifier,
            listing,
            settings,
        };
        core.load_page(SearchQuery::default());
        core
    }

    fn parts(&mut self) -> (&mut PageState, Host<'_>) {
        (
            &mut self.state,
            Host {
                timers: &mut self.timers,
                notifier: &mut self.notifier,
                settings: &self.settings,
            },
        )
    }

    /// Replace the page with the results for `query`, as a form submission
    /// reload would. Pending timers belong to the old page and are dropped.
    fn load_page(&mut self, query: SearchQuery) {
        let events = self.listing.search(&query, Local::now());
        tracing::info!(
            count = events.len(),
            query = %query.text,
            status = ?query.status,
            "Loading event list page"
        );

        self.timers.clear();
        self.state = PageState::new(events, query, &self.settings);
        log_page_stats(&self.state.doc);
        self.load_images();

        if self.settings.autofocus_search {
            if let Some(input) = self.state.search_input() {
                self.state.doc.focus(input);
            }
        }

        let (state, mut host) = self.parts();
        executor::run_queue(state, &mut host, None);
    }

    /// Fire `load` or `error` on every card image depending on whether its
    /// file can be read
    fn load_images(&mut self) {
        for image in self.state.doc.query_all(Selector::EventImage) {
            let exists = self
                .state
                .doc
                .get(image)
                .and_then(|e| e.event_index)
                .and_then(|i| self.state.event(i))
                .and_then(|e| e.image.as_ref())
                .is_some_and(|path| path.exists());

            let kind = if exists {
                EventKind::Load
            } else {
                EventKind::Error
            };
            self.state.doc.queue(DomEvent::new(image, kind));
        }
    }

    /// Handle keyboard input and execute the resulting command
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.state) {
            tracing::debug!("Executing command: {:?}", command);
            let (state, mut host) = self.parts();
            executor::execute_command(command, state, &mut host);
        }
    }

    pub fn handle_mouse(&mut self, input: MouseInput) {
        let (state, mut host) = self.parts();
        executor::handle_mouse(state, &mut host, input);
    }

    /// Lay the page out in `area` and report card visibility to the
    /// intersection observer
    pub fn layout(&mut self, area: Rect) {
        let ratios = layouts::layout_page(&mut self.state, area);
        let mut cx = PageContext::new(&mut self.state.doc, &mut self.timers, &mut self.notifier);
        self.state.behaviors.handle_layout(&mut cx, &ratios);
    }

    /// Advance the clock to `now`, running every timer that came due
    pub fn tick(&mut self, now: Instant) {
        let actions = self.timers.advance(now);
        if !actions.is_empty() {
            let (state, mut host) = self.parts();
            executor::run_timers(state, &mut host, &actions);
        }

        if actions.contains(&TimerAction::CompleteSubmit) {
            if let Some(query) = self.state.pending_submit.take() {
                self.load_page(query);
            }
        }

        if self.state.is_submitting() {
            self.state.throbber.calc_next();
        }
    }

    /// Get read-only access to the current page state (for rendering or assertions)
    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }
}
