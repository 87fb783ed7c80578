pub mod components;
pub mod layouts;
pub mod theme;

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::dom::{ElementKind, ElementLookup, Selector};
use crate::notify::NotificationCenter;
use crate::state::{Overlay, PageState};
use components::*;

pub const PAGE_TITLE: &str = "Volunteer Events";

/// Pure render of the page. Layout must already have run for this frame
/// so every visible element carries its area.
pub fn render_page(f: &mut Frame, state: &PageState, notifications: &NotificationCenter) {
    let areas = layouts::page_layout(f.area());
    let doc = &state.doc;

    f.render_widget(
        Paragraph::new(Span::styled(PAGE_TITLE, theme::title_style())),
        areas.title,
    );
    if let Some(badge) = doc
        .ids()
        .filter_map(|id| doc.get(id))
        .find(|e| e.kind == ElementKind::CountBadge)
    {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                badge.label.as_str(),
                theme::loading_style(),
            )))
            .alignment(Alignment::Right),
            areas.count_badge,
        );
    }
    if state.is_submitting() {
        loading_indicator::render_loading_indicator(f, areas.loading, &state.throbber);
    }

    search_box::render_search_box(f, doc);
    filter_select::render_filter_select(f, doc);

    let cards = doc.query_all(Selector::EventCard);
    if cards.is_empty() {
        empty_state::render_empty_state(f, areas.content, &state.query);
    }
    for card in cards {
        let event = doc
            .get(card)
            .and_then(|e| e.event_index)
            .and_then(|i| state.event(i));
        if let Some(event) = event {
            event_card::render_event_card(f, doc, card, event);
        }
    }

    help_bar::render_help_bar(f, areas.help, help_bar::help_text(state));
    scroll_top::render_scroll_top(f, doc);

    tooltip::render_tooltip(f, doc);

    match state.overlay {
        Some(Overlay::EventDetail(index)) => {
            if let Some(event) = state.event(index) {
                event_detail::render_event_detail(f, event);
            }
        }
        Some(Overlay::NgoProfile(index)) => {
            if let Some(event) = state.event(index) {
                let listed = state.events.iter().filter(|e| e.ngo == event.ngo).count();
                event_detail::render_ngo_profile(f, event, listed);
            }
        }
        Some(Overlay::Image(index)) => {
            if let Some(event) = state.event(index) {
                event_detail::render_image_modal(f, event);
            }
        }
        Some(Overlay::Help) => help_popup::render_help_popup(f),
        None => {}
    }

    notifications::render_notifications(f, notifications);
}
