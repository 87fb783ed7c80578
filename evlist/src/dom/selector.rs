use std::fmt;

use super::{Document, ElementId, ElementKind};

/// The selectors the page behaviours bind to.
///
/// Every one of them is optional: page variants without a search box or
/// without cards simply resolve to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    EventCard,
    SearchInput,
    SearchButton,
    FilterSelect,
    ViewEventButton,
    EventImage,
    StatusBadge,
    ViewNgoButton,
    ScrollTopButton,
}

impl Selector {
    pub fn css(&self) -> &'static str {
        match self {
            Self::EventCard => ".event-card",
            Self::SearchInput => ".search-box input",
            Self::SearchButton => ".search-box button",
            Self::FilterSelect => ".filter-select",
            Self::ViewEventButton => ".btn-view-event",
            Self::EventImage => ".event-image",
            Self::StatusBadge => ".event-status",
            Self::ViewNgoButton => ".btn-view-ngo",
            Self::ScrollTopButton => ".scroll-to-top",
        }
    }

    /// Whether `id` in `doc` is matched by this selector
    pub fn matches(&self, doc: &Document, id: ElementId) -> bool {
        let Some(element) = doc.get(id) else {
            return false;
        };

        match self {
            Self::EventCard => element.kind == ElementKind::EventCard,
            Self::SearchInput => {
                element.kind == ElementKind::SearchInput
                    && doc.has_ancestor_kind(id, ElementKind::SearchBox)
            }
            Self::SearchButton => {
                element.kind == ElementKind::SearchButton
                    && doc.has_ancestor_kind(id, ElementKind::SearchBox)
            }
            Self::FilterSelect => element.kind == ElementKind::FilterSelect,
            Self::ViewEventButton => element.kind == ElementKind::ViewEventButton,
            Self::EventImage => element.kind == ElementKind::EventImage,
            Self::StatusBadge => element.kind == ElementKind::StatusBadge,
            Self::ViewNgoButton => element.kind == ElementKind::ViewNgoButton,
            Self::ScrollTopButton => element.kind == ElementKind::ScrollTopButton,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css())
    }
}

/// Capability to resolve selectors to element handles.
///
/// Behaviours receive this at bind time instead of reaching for a global
/// document, so they can be bound against any tree.
pub trait ElementLookup {
    fn query(&self, selector: Selector) -> Option<ElementId>;
    fn query_all(&self, selector: Selector) -> Vec<ElementId>;
}

impl ElementLookup for Document {
    fn query(&self, selector: Selector) -> Option<ElementId> {
        self.ids().find(|id| selector.matches(self, *id))
    }

    fn query_all(&self, selector: Selector) -> Vec<ElementId> {
        self.ids().filter(|id| selector.matches(self, *id)).collect()
    }
}
