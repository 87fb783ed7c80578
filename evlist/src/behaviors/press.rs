//! Ripple and press feedback for the card buttons.

use std::time::Duration;

use crate::config::Settings;
use crate::dom::{
    DomEvent, ElementId, ElementKind, ElementLookup, EventKind, Ripple, Selector, Transform,
};
use crate::input::Position;
use crate::notify::Severity;
use crate::timers::TimerAction;

use super::{Behavior, PageContext};

pub const PRESSED_SCALE: f32 = 0.95;
pub const NGO_BUTTON_LABEL: &str = "View NGO Profile";
pub const LOADING_NGO_MESSAGE: &str = "Loading NGO profile...";

#[derive(Debug, Clone)]
pub struct PressFeedback {
    buttons: Vec<ElementId>,
    press_reset: Duration,
    ripple_lifetime: Duration,
}

impl PressFeedback {
    pub fn bind(lookup: &impl ElementLookup, settings: &Settings) -> Self {
        let mut buttons = lookup.query_all(Selector::ViewEventButton);
        buttons.extend(lookup.query_all(Selector::ViewNgoButton));

        Self {
            buttons,
            press_reset: settings.press_reset(),
            ripple_lifetime: settings.ripple_lifetime(),
        }
    }

    /// Spawn a ripple at the pointer, scale the button down and schedule
    /// its restore. Rapid clicks overlap freely.
    pub fn on_click(&self, cx: &mut PageContext<'_>, button: ElementId, pointer: Option<Position>) {
        let ripple_id = cx.doc.next_ripple_id();
        let Some(element) = cx.doc.get_mut(button) else {
            return;
        };

        if let Some(rect) = element.rect {
            // Keyboard activation has no pointer: ripple from the centre
            let pointer = pointer.unwrap_or(Position::new(
                rect.x + rect.width / 2,
                rect.y + rect.height / 2,
            ));
            let size = rect.width.max(rect.height);
            element.ripples.push(Ripple {
                id: ripple_id,
                x: i32::from(pointer.column) - i32::from(rect.x) - i32::from(size / 2),
                y: i32::from(pointer.row) - i32::from(rect.y) - i32::from(size / 2),
                size,
            });
            cx.timers.schedule(
                self.ripple_lifetime,
                TimerAction::RemoveRipple {
                    element: button,
                    ripple: ripple_id,
                },
            );
        }

        element.style.transform = Some(Transform::Scale(PRESSED_SCALE));
        let is_ngo_button = element.kind == ElementKind::ViewNgoButton;
        cx.timers
            .schedule(self.press_reset, TimerAction::ReleasePress(button));

        if is_ngo_button {
            cx.notifier
                .show_notification(LOADING_NGO_MESSAGE, Severity::Info);
        }
    }
}

impl Behavior for PressFeedback {
    fn handle_event(&mut self, cx: &mut PageContext<'_>, event: &mut DomEvent) {
        if !self.buttons.contains(&event.target) {
            return;
        }

        match event.kind {
            EventKind::Click { pointer } => self.on_click(cx, event.target, pointer),
            EventKind::MouseLeave => {
                if let Some(element) = cx.doc.get_mut(event.target) {
                    if element.kind == ElementKind::ViewNgoButton {
                        element.label = NGO_BUTTON_LABEL.to_string();
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_timer(&mut self, cx: &mut PageContext<'_>, action: TimerAction) {
        match action {
            TimerAction::ReleasePress(button) if self.buttons.contains(&button) => {
                if let Some(element) = cx.doc.get_mut(button) {
                    element.style.transform = None;
                }
            }
            TimerAction::RemoveRipple { element, ripple } if self.buttons.contains(&element) => {
                if let Some(element) = cx.doc.get_mut(element) {
                    element.ripples.retain(|r| r.id != ripple);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use crate::testing::RecordingNotifier;
    use crate::timers::TimerQueue;
    use ratatui::layout::Rect;
    use std::time::Instant;

    struct Fixture {
        doc: Document,
        timers: TimerQueue,
        notifier: RecordingNotifier,
        press: PressFeedback,
        view: ElementId,
        ngo: ElementId,
        start: Instant,
    }

    impl Fixture {
        fn new() -> Self {
            let mut doc = Document::new();
            let card = doc.append(doc.body(), ElementKind::EventCard);
            let view = doc.append(card, ElementKind::ViewEventButton);
            let ngo = doc.append(card, ElementKind::ViewNgoButton);
            doc.get_mut(view).unwrap().rect = Some(Rect::new(10, 5, 14, 1));
            doc.get_mut(ngo).unwrap().label = "Open".to_string();
            let press = PressFeedback::bind(&doc, &Settings::default());
            let start = Instant::now();

            Self {
                doc,
                timers: TimerQueue::new(start),
                notifier: RecordingNotifier::default(),
                press,
                view,
                ngo,
                start,
            }
        }

        fn send(&mut self, target: ElementId, kind: EventKind) {
            let mut event = DomEvent::new(target, kind);
            let mut cx = PageContext::new(&mut self.doc, &mut self.timers, &mut self.notifier);
            self.press.handle_event(&mut cx, &mut event);
        }

        fn advance(&mut self, ms: u64) {
            let due = self
                .timers
                .advance(self.start + Duration::from_millis(ms));
            for action in due {
                let mut cx =
                    PageContext::new(&mut self.doc, &mut self.timers, &mut self.notifier);
                self.press.handle_timer(&mut cx, action);
            }
        }
    }

    #[test]
    fn test_click_scales_down_then_restores_after_150ms() {
        let mut f = Fixture::new();
        f.send(f.view, EventKind::Click { pointer: Some(Position::new(12, 5)) });
        assert!(f.doc.get(f.view).unwrap().style.is_pressed());

        f.advance(149);
        assert!(f.doc.get(f.view).unwrap().style.is_pressed());
        f.advance(150);
        assert_eq!(f.doc.get(f.view).unwrap().style.transform, None);
    }

    #[test]
    fn test_ripple_centred_on_pointer_and_removed_later() {
        let mut f = Fixture::new();
        f.send(f.view, EventKind::Click { pointer: Some(Position::new(12, 5)) });

        let ripples = &f.doc.get(f.view).unwrap().ripples;
        assert_eq!(ripples.len(), 1);
        assert_eq!(ripples[0].size, 14);
        assert_eq!((ripples[0].x, ripples[0].y), (2 - 7, -7));

        f.advance(600);
        assert!(f.doc.get(f.view).unwrap().ripples.is_empty());
    }

    #[test]
    fn test_rapid_clicks_overlap() {
        let mut f = Fixture::new();
        f.send(f.view, EventKind::Click { pointer: None });
        f.advance(100);
        f.send(f.view, EventKind::Click { pointer: None });
        assert_eq!(f.doc.get(f.view).unwrap().ripples.len(), 2);

        // first release fires while the second press is still held
        f.advance(150);
        assert_eq!(f.doc.get(f.view).unwrap().style.transform, None);
        f.advance(250);
        assert_eq!(f.doc.get(f.view).unwrap().style.transform, None);
        f.advance(650);
        assert_eq!(f.doc.get(f.view).unwrap().ripples.len(), 1);
    }

    #[test]
    fn test_unlaid_button_still_presses_without_ripple() {
        let mut f = Fixture::new();
        f.send(f.ngo, EventKind::Click { pointer: None });
        let ngo = f.doc.get(f.ngo).unwrap();
        assert!(ngo.ripples.is_empty());
        assert!(ngo.style.is_pressed());
    }

    #[test]
    fn test_ngo_button_notifies_and_restores_label() {
        let mut f = Fixture::new();
        f.send(f.ngo, EventKind::Click { pointer: None });
        assert_eq!(
            f.notifier.calls(),
            &[(LOADING_NGO_MESSAGE.to_string(), Severity::Info)]
        );

        f.send(f.ngo, EventKind::MouseLeave);
        assert_eq!(f.doc.get(f.ngo).unwrap().label, NGO_BUTTON_LABEL);

        f.send(f.view, EventKind::Click { pointer: None });
        assert_eq!(f.notifier.calls().len(), 1);
    }
}
