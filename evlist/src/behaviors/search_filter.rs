//! Search box and status filter interaction.
//!
//! Keeps the search input's visual affordances in sync with what the user
//! does and forwards submit-on-enter, clear-on-escape and filter-changed
//! to the rest of the page.

use std::time::Duration;

use crate::config::Settings;
use crate::dom::{
    Document, DomEvent, ElementId, ElementLookup, EventKind, Selector, Transform,
};
use crate::input::Key;
use crate::notify::{Notifier, Severity};
use crate::timers::{TimerAction, TimerId, TimerQueue};

use super::{Behavior, PageContext};

/// Class set on the search box while the query is non-blank
pub const HAS_VALUE_CLASS: &str = "has-value";

pub const FILTERING_MESSAGE: &str = "Filtering events...";

#[derive(Debug, Clone)]
pub struct SearchFilterController {
    input: Option<ElementId>,
    submit: Option<ElementId>,
    filter: Option<ElementId>,
    /// Debounce slot, cleared and re-armed on every input event
    pending_debounce: Option<TimerId>,
    debounce: Duration,
    lift: i16,
}

impl SearchFilterController {
    /// Create a controller over explicit targets
    pub fn new(
        input: Option<ElementId>,
        submit: Option<ElementId>,
        filter: Option<ElementId>,
        settings: &Settings,
    ) -> Self {
        Self {
            input,
            submit,
            filter,
            pending_debounce: None,
            debounce: settings.search_debounce(),
            lift: settings.lift_offset,
        }
    }

    pub fn bind(lookup: &impl ElementLookup, settings: &Settings) -> Self {
        Self::new(
            lookup.query(Selector::SearchInput),
            lookup.query(Selector::SearchButton),
            lookup.query(Selector::FilterSelect),
            settings,
        )
    }

    pub fn input(&self) -> Option<ElementId> {
        self.input
    }

    pub fn pending_debounce(&self) -> Option<TimerId> {
        self.pending_debounce
    }

    /// Element that moves when the input gains focus: its container
    fn lift_target(&self, doc: &Document) -> Option<ElementId> {
        self.input.and_then(|input| doc.parent(input))
    }

    /// Raise the search box by the configured offset
    pub fn on_focus(&self, doc: &mut Document) {
        if let Some(target) = self.lift_target(doc) {
            lift(doc, target, self.lift);
        }
    }

    /// Undo [`on_focus`](Self::on_focus); a no-op when nothing is lifted
    pub fn on_blur(&self, doc: &mut Document) {
        if let Some(target) = self.lift_target(doc) {
            lower(doc, target);
        }
    }

    /// `Escape` clears the query and drops focus.
    ///
    /// Clearing does not fire `input`, so `has-value` and any pending
    /// debounce are reset here to keep them in step with the empty value.
    pub fn on_key_down(&mut self, doc: &mut Document, timers: &mut TimerQueue, key: Key) {
        let Some(input) = self.input else {
            return;
        };
        if key != Key::Esc {
            return;
        }

        if let Some(element) = doc.get_mut(input) {
            element.value.clear();
        }
        if let Some(pending) = self.pending_debounce.take() {
            timers.cancel(pending);
        }
        if let Some(container) = doc.parent(input) {
            doc.set_class(container, HAS_VALUE_CLASS, false);
        }
        doc.blur(input);
        tracing::debug!("Search cleared");
    }

    /// `Enter` submits through the search button instead of the form default
    pub fn on_key_press(&self, doc: &mut Document, event: &mut DomEvent, key: Key) {
        if self.input.is_none() || key != Key::Enter {
            return;
        }

        event.prevent_default();
        match self.submit {
            Some(button) => doc.click(button),
            None => tracing::debug!("No search button, Enter ignored"),
        }
    }

    /// Sync the `has-value` flag with the current query and re-arm the
    /// debounce slot
    pub fn on_input(&mut self, doc: &mut Document, timers: &mut TimerQueue) {
        let Some(input) = self.input else {
            return;
        };

        if let Some(pending) = self.pending_debounce.take() {
            timers.cancel(pending);
        }

        let has_value = doc
            .get(input)
            .is_some_and(|e| !e.value.trim().is_empty());
        if let Some(container) = doc.parent(input) {
            doc.set_class(container, HAS_VALUE_CLASS, has_value);
        }

        self.pending_debounce = Some(timers.schedule(self.debounce, TimerAction::SearchSettled));
    }

    pub fn on_filter_change(&self, notifier: &mut dyn Notifier) {
        if self.filter.is_some() {
            notifier.show_notification(FILTERING_MESSAGE, Severity::Info);
        }
    }
}

impl Behavior for SearchFilterController {
    fn handle_event(&mut self, cx: &mut PageContext<'_>, event: &mut DomEvent) {
        let target = Some(event.target);

        if target == self.input {
            match event.kind {
                EventKind::Focus => self.on_focus(cx.doc),
                EventKind::Blur => self.on_blur(cx.doc),
                EventKind::KeyDown(key) => self.on_key_down(cx.doc, cx.timers, key),
                EventKind::KeyPress(key) => self.on_key_press(cx.doc, event, key),
                EventKind::Input => self.on_input(cx.doc, cx.timers),
                _ => {}
            }
        } else if target == self.filter {
            match event.kind {
                EventKind::Change => self.on_filter_change(cx.notifier),
                EventKind::Focus => lift(cx.doc, event.target, self.lift),
                EventKind::Blur => lower(cx.doc, event.target),
                _ => {}
            }
        }
    }

    fn handle_timer(&mut self, _cx: &mut PageContext<'_>, action: TimerAction) {
        if action == TimerAction::SearchSettled && self.pending_debounce.take().is_some() {
            tracing::trace!("Search input settled");
        }
    }
}

fn lift(doc: &mut Document, target: ElementId, offset: i16) {
    if let Some(element) = doc.get_mut(target) {
        element.style.transform = Some(Transform::TranslateY(-offset));
    }
}

fn lower(doc: &mut Document, target: ElementId) {
    if let Some(element) = doc.get_mut(target) {
        element.style.transform = None;
    }
}
