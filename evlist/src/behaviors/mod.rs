//! Page behaviours: listeners bound to optional page elements.
//!
//! Each behaviour resolves its targets once through [`ElementLookup`] and
//! keeps them as `Option<ElementId>`. A missing element disables the
//! behaviour that needs it and nothing else.

pub mod badges;
pub mod cards;
pub mod images;
pub mod press;
pub mod search_button;
pub mod search_filter;

use crate::config::Settings;
use crate::dom::{Document, DomEvent, ElementId, ElementLookup};
use crate::notify::Notifier;
use crate::timers::{TimerAction, TimerQueue};

pub use badges::StatusTooltips;
pub use cards::{CardAnimator, IntersectionEntry, IntersectionObserver};
pub use images::ImageFallback;
pub use press::PressFeedback;
pub use search_button::SearchSubmitFeedback;
pub use search_filter::SearchFilterController;

/// Everything a handler may touch while it runs
pub struct PageContext<'a> {
    pub doc: &'a mut Document,
    pub timers: &'a mut TimerQueue,
    pub notifier: &'a mut dyn Notifier,
}

impl<'a> PageContext<'a> {
    pub fn new(
        doc: &'a mut Document,
        timers: &'a mut TimerQueue,
        notifier: &'a mut dyn Notifier,
    ) -> Self {
        Self {
            doc,
            timers,
            notifier,
        }
    }
}

/// A set of listeners attached to page elements
pub trait Behavior {
    /// Called for every dispatched event; implementations ignore targets
    /// they are not bound to
    fn handle_event(&mut self, cx: &mut PageContext<'_>, event: &mut DomEvent);

    fn handle_timer(&mut self, _cx: &mut PageContext<'_>, _action: TimerAction) {}
}

/// All behaviours of the event list page
#[derive(Debug, Clone)]
pub struct Behaviors {
    pub search: SearchFilterController,
    pub submit: SearchSubmitFeedback,
    pub cards: CardAnimator,
    pub press: PressFeedback,
    pub badges: StatusTooltips,
    pub images: ImageFallback,
}

impl Behaviors {
    pub fn bind(lookup: &impl ElementLookup, settings: &Settings) -> Self {
        Self {
            search: SearchFilterController::bind(lookup, settings),
            submit: SearchSubmitFeedback::bind(lookup),
            cards: CardAnimator::bind(lookup, settings.reveal_threshold),
            press: PressFeedback::bind(lookup, settings),
            badges: StatusTooltips::bind(lookup),
            images: ImageFallback::bind(lookup),
        }
    }

    fn all_mut(&mut self) -> [&mut dyn Behavior; 6] {
        [
            &mut self.search,
            &mut self.submit,
            &mut self.cards,
            &mut self.press,
            &mut self.badges,
            &mut self.images,
        ]
    }

    pub fn handle_event(&mut self, cx: &mut PageContext<'_>, event: &mut DomEvent) {
        for behavior in self.all_mut() {
            behavior.handle_event(cx, event);
        }
    }

    pub fn handle_timer(&mut self, cx: &mut PageContext<'_>, action: TimerAction) {
        for behavior in self.all_mut() {
            behavior.handle_timer(cx, action);
        }
    }

    /// Feed freshly laid-out visibility ratios to the card observer
    pub fn handle_layout(&mut self, cx: &mut PageContext<'_>, ratios: &[(ElementId, f32)]) {
        self.cards.on_layout(cx, ratios);
    }
}
