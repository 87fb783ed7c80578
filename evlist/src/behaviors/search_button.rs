use crate::dom::{DomEvent, ElementId, ElementLookup, EventKind, Selector};
use crate::notify::Severity;

use super::{Behavior, PageContext};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search query";
pub const SEARCHING_MESSAGE: &str = "Searching events...";
pub const SEARCHING_LABEL: &str = "Searching...";
pub const LOADING_CLASS: &str = "loading";

/// Loading feedback on the search button while the form submits.
///
/// A blank query only warns; the form still submits and shows every event.
#[derive(Debug, Clone)]
pub struct SearchSubmitFeedback {
    input: Option<ElementId>,
    button: Option<ElementId>,
}

impl SearchSubmitFeedback {
    pub fn bind(lookup: &impl ElementLookup) -> Self {
        Self {
            input: lookup.query(Selector::SearchInput),
            button: lookup.query(Selector::SearchButton),
        }
    }

    fn on_click(&self, cx: &mut PageContext<'_>, button: ElementId) {
        let query_is_blank = self
            .input
            .and_then(|input| cx.doc.get(input))
            .is_none_or(|input| input.value.trim().is_empty());

        if query_is_blank {
            cx.notifier
                .show_notification(EMPTY_QUERY_MESSAGE, Severity::Error);
            return;
        }

        cx.doc.set_class(button, LOADING_CLASS, true);
        if let Some(element) = cx.doc.get_mut(button) {
            element.disabled = true;
            element.label = SEARCHING_LABEL.to_string();
        }
        cx.notifier
            .show_notification(SEARCHING_MESSAGE, Severity::Info);
    }
}

impl Behavior for SearchSubmitFeedback {
    fn handle_event(&mut self, cx: &mut PageContext<'_>, event: &mut DomEvent) {
        if Some(event.target) == self.button && matches!(event.kind, EventKind::Click { .. }) {
            self.on_click(cx, event.target);
        }
    }
}
