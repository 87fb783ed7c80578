//! Event card fade-in, hover raise and click-to-view.

use std::collections::{HashMap, HashSet};

use crate::dom::{DomEvent, ElementId, ElementKind, ElementLookup, EventKind, Selector, Transform};

use super::{Behavior, PageContext};

pub const HOVER_Z_INDEX: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub ratio: f32,
    pub is_intersecting: bool,
}

/// Reports when an observed element's visible ratio crosses the threshold.
///
/// The first measurement of an element always produces an entry, later
/// measurements only when the element moves across the threshold.
#[derive(Debug, Clone)]
pub struct IntersectionObserver {
    threshold: f32,
    observed: Vec<ElementId>,
    last: HashMap<ElementId, bool>,
}

impl IntersectionObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            observed: Vec::new(),
            last: HashMap::new(),
        }
    }

    pub fn observe(&mut self, target: ElementId) {
        if !self.observed.contains(&target) {
            self.observed.push(target);
        }
    }

    pub fn observed(&self) -> &[ElementId] {
        &self.observed
    }

    /// Compare new ratios against the previous state. Observed elements
    /// missing from `ratios` are treated as fully out of view.
    pub fn update(&mut self, ratios: &[(ElementId, f32)]) -> Vec<IntersectionEntry> {
        let mut entries = Vec::new();

        for target in &self.observed {
            let ratio = ratios
                .iter()
                .find(|(id, _)| id == target)
                .map(|(_, r)| *r)
                .unwrap_or(0.0);
            let is_intersecting = ratio >= self.threshold;

            if self.last.insert(*target, is_intersecting) != Some(is_intersecting) {
                entries.push(IntersectionEntry {
                    target: *target,
                    ratio,
                    is_intersecting,
                });
            }
        }

        entries
    }
}

#[derive(Debug, Clone)]
pub struct CardAnimator {
    cards: Vec<ElementId>,
    observer: IntersectionObserver,
    revealed: HashSet<ElementId>,
}

impl CardAnimator {
    pub fn bind(lookup: &impl ElementLookup, threshold: f32) -> Self {
        let cards = lookup.query_all(Selector::EventCard);
        let mut observer = IntersectionObserver::new(threshold);
        for card in &cards {
            observer.observe(*card);
        }

        Self {
            cards,
            observer,
            revealed: HashSet::new(),
        }
    }

    pub fn is_revealed(&self, card: ElementId) -> bool {
        self.revealed.contains(&card)
    }

    pub fn on_layout(&mut self, cx: &mut PageContext<'_>, ratios: &[(ElementId, f32)]) {
        let entries = self.observer.update(ratios);
        self.on_intersection(cx, &entries);
    }

    /// Reveal cards that came into view. Reveal is one-way: leaving the
    /// viewport again never hides a card.
    pub fn on_intersection(&mut self, cx: &mut PageContext<'_>, entries: &[IntersectionEntry]) {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if !self.cards.contains(&entry.target) || !self.revealed.insert(entry.target) {
                continue;
            }
            if let Some(card) = cx.doc.get_mut(entry.target) {
                card.style.opacity = Some(1.0);
                card.style.transform = Some(Transform::TranslateY(0));
                tracing::trace!(card = entry.target.index(), ratio = entry.ratio, "Card revealed");
            }
        }
    }

    /// A click inside a card's body that did not hit one of its buttons
    /// activates the card's view button
    fn on_click(&self, cx: &mut PageContext<'_>, target: ElementId) {
        let Some(content) = cx.doc.closest(target, ElementKind::CardContent) else {
            return;
        };
        if cx.doc.get(target).is_some_and(|e| e.kind.is_button()) {
            return;
        }
        let Some(card) = cx.doc.closest(content, ElementKind::EventCard) else {
            return;
        };
        if !self.cards.contains(&card) {
            return;
        }
        if let Some(view) = cx.doc.query_within(card, Selector::ViewEventButton) {
            cx.doc.click(view);
        }
    }
}

impl Behavior for CardAnimator {
    fn handle_event(&mut self, cx: &mut PageContext<'_>, event: &mut DomEvent) {
        match event.kind {
            EventKind::MouseEnter if self.cards.contains(&event.target) => {
                if let Some(card) = cx.doc.get_mut(event.target) {
                    card.style.z_index = Some(HOVER_Z_INDEX);
                }
            }
            EventKind::MouseLeave if self.cards.contains(&event.target) => {
                if let Some(card) = cx.doc.get_mut(event.target) {
                    card.style.z_index = None;
                }
            }
            EventKind::Click { .. } => self.on_click(cx, event.target),
            _ => {}
        }
    }
}
