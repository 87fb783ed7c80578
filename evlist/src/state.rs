use throbber_widgets_tui::ThrobberState;

use crate::behaviors::Behaviors;
use crate::config::Settings;
use crate::dom::{Document, ElementId, ElementLookup, Selector};
use crate::listing::{Event, EventStatus, SearchQuery};
use crate::page::build_page;

/// Popups drawn over the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    EventDetail(usize),
    NgoProfile(usize),
    /// Enlarged event image
    Image(usize),
    Help,
}

/// Everything the page renders from
#[derive(Debug, Clone)]
pub struct PageState {
    pub doc: Document,
    pub behaviors: Behaviors,
    /// Events currently rendered as cards, indexed by `Element::event_index`
    pub events: Vec<Event>,
    pub query: SearchQuery,
    pub overlay: Option<Overlay>,
    /// Index of the first card in the viewport
    pub scroll: usize,
    /// Cards that fit fully in the viewport at the last layout
    pub visible_cards: usize,
    /// Element under the pointer followed by its ancestors
    pub hovered: Vec<ElementId>,
    /// Query of a submission waiting for its round trip
    pub pending_submit: Option<SearchQuery>,
    pub throbber: ThrobberState,
    pub should_quit: bool,
}

impl PageState {
    pub fn new(events: Vec<Event>, query: SearchQuery, settings: &Settings) -> Self {
        let doc = build_page(&events, &query);
        let behaviors = Behaviors::bind(&doc, settings);

        Self {
            doc,
            behaviors,
            events,
            query,
            overlay: None,
            scroll: 0,
            visible_cards: 1,
            hovered: Vec::new(),
            pending_submit: None,
            throbber: ThrobberState::default(),
            should_quit: false,
        }
    }

    pub fn search_input(&self) -> Option<ElementId> {
        self.doc.query(Selector::SearchInput)
    }

    pub fn is_submitting(&self) -> bool {
        self.pending_submit.is_some()
    }

    /// What the form would submit right now
    pub fn form_query(&self) -> SearchQuery {
        let text = self
            .search_input()
            .and_then(|id| self.doc.get(id))
            .map(|e| e.value.clone())
            .unwrap_or_default();
        let status = self
            .doc
            .query(Selector::FilterSelect)
            .and_then(|id| self.doc.get(id))
            .and_then(|e| EventStatus::parse(e.selected_value()));

        SearchQuery::new(text, status)
    }

    pub fn event(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }
}
