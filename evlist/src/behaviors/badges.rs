use crate::dom::{Document, DomEvent, ElementId, ElementLookup, EventKind, Selector};

use super::{Behavior, PageContext};

/// Hover tooltips explaining an event's status badge
#[derive(Debug, Clone)]
pub struct StatusTooltips {
    badges: Vec<ElementId>,
}

impl StatusTooltips {
    pub fn bind(lookup: &impl ElementLookup) -> Self {
        Self {
            badges: lookup.query_all(Selector::StatusBadge),
        }
    }
}

/// Tooltip text for a badge, derived from its status class
pub fn status_message(doc: &Document, badge: ElementId) -> &'static str {
    let Some(element) = doc.get(badge) else {
        return "";
    };

    if element.has_class("status-published") || element.has_class("status-open") {
        "Event is accepting registrations"
    } else if element.has_class("status-ongoing") {
        "Event is currently in progress"
    } else if element.has_class("status-completed") {
        "This event has ended"
    } else if element.has_class("status-closed") {
        "Registration closed"
    } else {
        ""
    }
}

impl Behavior for StatusTooltips {
    fn handle_event(&mut self, cx: &mut PageContext<'_>, event: &mut DomEvent) {
        if !self.badges.contains(&event.target) {
            return;
        }

        match event.kind {
            EventKind::MouseEnter => {
                let message = status_message(cx.doc, event.target);
                if !message.is_empty() {
                    cx.doc.show_tooltip(event.target, message.to_string());
                }
            }
            EventKind::MouseLeave => cx.doc.hide_tooltip(event.target),
            _ => {}
        }
    }
}
