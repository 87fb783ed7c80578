//! Builds the event list page tree the way the server renders it.

use itertools::Itertools;

use crate::dom::{Document, ElementId, ElementKind, ElementLookup, Selector, Style};
use crate::listing::{status_filter_options, Event, SearchQuery};

pub const SEARCH_BUTTON_LABEL: &str = "Search";
pub const VIEW_EVENT_LABEL: &str = "View Details";
pub use crate::behaviors::press::NGO_BUTTON_LABEL as VIEW_NGO_LABEL;
pub const HIGHLIGHT_CLASS: &str = "highlight";
pub const SCROLL_TOP_LABEL: &str = "↑ Top";

/// Cards scrolled past before the scroll-to-top control shows
pub const SCROLL_TOP_AFTER: usize = 2;

/// Render `events` as a page, keeping the submitted query in the form
pub fn build_page(events: &[Event], query: &SearchQuery) -> Document {
    let mut doc = Document::new();
    let body = doc.body();

    let search_box = doc.append(body, ElementKind::SearchBox);
    doc.set_class(search_box, "search-box", true);
    let input = doc.append(search_box, ElementKind::SearchInput);
    if let Some(element) = doc.get_mut(input) {
        element.value = query.text.clone();
    }
    let button = doc.append(search_box, ElementKind::SearchButton);
    if let Some(element) = doc.get_mut(button) {
        element.label = SEARCH_BUTTON_LABEL.to_string();
    }

    let filter = doc.append(body, ElementKind::FilterSelect);
    doc.set_class(filter, "filter-select", true);
    let options = status_filter_options();
    let selected = query
        .status
        .and_then(|s| options.iter().position(|o| o.value == s.as_str()))
        .unwrap_or(0);
    if let Some(element) = doc.get_mut(filter) {
        element.options = options;
        element.selected = selected;
    }

    if !events.is_empty() {
        let badge = doc.append(body, ElementKind::CountBadge);
        if let Some(element) = doc.get_mut(badge) {
            element.label = event_count_label(events.len());
        }
    }

    for (index, event) in events.iter().enumerate() {
        append_card(&mut doc, index, event, &query.text);
    }

    let scroll_top = doc.append(body, ElementKind::ScrollTopButton);
    doc.set_class(scroll_top, "scroll-to-top", true);
    if let Some(element) = doc.get_mut(scroll_top) {
        element.label = SCROLL_TOP_LABEL.to_string();
    }

    doc
}

fn append_card(doc: &mut Document, index: usize, event: &Event, query: &str) -> ElementId {
    let card = doc.append(doc.body(), ElementKind::EventCard);
    doc.set_class(card, "event-card", true);
    if highlights(event, query) {
        doc.set_class(card, HIGHLIGHT_CLASS, true);
    }
    if let Some(element) = doc.get_mut(card) {
        element.style = Style::hidden_card();
    }

    if event.image.is_some() {
        let image = doc.append(card, ElementKind::EventImage);
        doc.set_class(image, "event-image", true);
        if let Some(element) = doc.get_mut(image) {
            element.style.opacity = Some(0.0);
        }
    }

    let content = doc.append(card, ElementKind::CardContent);

    let badge = doc.append(content, ElementKind::StatusBadge);
    doc.set_class(badge, "event-status", true);
    doc.set_class(badge, &event.status.css_class(), true);
    if let Some(element) = doc.get_mut(badge) {
        element.label = event.status.display_name().to_string();
    }

    let view = doc.append(content, ElementKind::ViewEventButton);
    if let Some(element) = doc.get_mut(view) {
        element.label = VIEW_EVENT_LABEL.to_string();
    }
    let ngo = doc.append(content, ElementKind::ViewNgoButton);
    if let Some(element) = doc.get_mut(ngo) {
        element.label = VIEW_NGO_LABEL.to_string();
    }

    for id in [card, content, badge, view, ngo] {
        if let Some(element) = doc.get_mut(id) {
            element.event_index = Some(index);
        }
    }
    if let Some(image) = doc.query_within(card, Selector::EventImage) {
        if let Some(element) = doc.get_mut(image) {
            element.event_index = Some(index);
        }
    }

    card
}

/// Whether a card should flash for the current query
fn highlights(event: &Event, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    !needle.is_empty()
        && (event.title.to_lowercase().contains(&needle)
            || event.description.to_lowercase().contains(&needle))
}

pub fn event_count_label(count: usize) -> String {
    format!("{} Event{} Found", count, if count == 1 { "" } else { "s" })
}

/// Log a summary of what the page shows
pub fn log_page_stats(doc: &Document) {
    let cards = doc.query_all(Selector::EventCard);
    if cards.is_empty() {
        return;
    }

    let by_status = doc
        .query_all(Selector::StatusBadge)
        .into_iter()
        .filter_map(|b| doc.get(b))
        .flat_map(|e| e.classes.iter().map(String::as_str))
        .filter(|class| class.starts_with("status-"))
        .counts();
    let count = |class: &str| by_status.get(class).copied().unwrap_or(0);

    tracing::info!(
        total = cards.len(),
        open = count("status-published") + count("status-open"),
        ongoing = count("status-ongoing"),
        "Events summary"
    );
}
