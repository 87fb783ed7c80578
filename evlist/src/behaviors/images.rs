use crate::dom::{DomEvent, ElementId, ElementKind, ElementLookup, EventKind, Selector};

use super::{Behavior, PageContext};

pub const PLACEHOLDER_LABEL: &str = "📅";

/// Fades images in once loaded and swaps broken ones for a placeholder
#[derive(Debug, Clone)]
pub struct ImageFallback {
    images: Vec<ElementId>,
}

impl ImageFallback {
    pub fn bind(lookup: &impl ElementLookup) -> Self {
        Self {
            images: lookup.query_all(Selector::EventImage),
        }
    }
}

impl Behavior for ImageFallback {
    fn handle_event(&mut self, cx: &mut PageContext<'_>, event: &mut DomEvent) {
        if !self.images.contains(&event.target) {
            return;
        }

        match event.kind {
            EventKind::Load => {
                if let Some(image) = cx.doc.get_mut(event.target) {
                    image.style.opacity = Some(1.0);
                }
            }
            EventKind::Error => {
                if let Some(placeholder) = cx
                    .doc
                    .replace_with(event.target, ElementKind::ImagePlaceholder)
                {
                    cx.doc.set_class(placeholder, "event-image-placeholder", true);
                    if let Some(element) = cx.doc.get_mut(placeholder) {
                        element.label = PLACEHOLDER_LABEL.to_string();
                    }
                    tracing::debug!("Image {} failed to load", event.target.index());
                }
            }
            _ => {}
        }
    }
}
