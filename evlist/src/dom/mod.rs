//! Element tree the page behaviours operate on.
//!
//! A flat arena of elements addressed by [`ElementId`]. Like a browser
//! document it tracks the focused element and queues the events that
//! `focus()`, `blur()` and `click()` fire, so the dispatcher can deliver
//! them after the current handler has run to completion.

mod event;
mod selector;
mod style;

pub use event::{DomEvent, EventKind};
pub use selector::{ElementLookup, Selector};
pub use style::{Style, Transform};

use ratatui::layout::Rect;
use std::collections::{BTreeSet, VecDeque};

use crate::input::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Body,
    SearchBox,
    SearchInput,
    SearchButton,
    FilterSelect,
    CountBadge,
    EventCard,
    CardContent,
    EventImage,
    ImagePlaceholder,
    StatusBadge,
    ViewEventButton,
    ViewNgoButton,
    ScrollTopButton,
}

impl ElementKind {
    pub fn is_focusable(self) -> bool {
        matches!(
            self,
            Self::SearchInput
                | Self::SearchButton
                | Self::FilterSelect
                | Self::ViewEventButton
                | Self::ViewNgoButton
        )
    }

    pub fn is_button(self) -> bool {
        matches!(
            self,
            Self::SearchButton | Self::ViewEventButton | Self::ViewNgoButton
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Transient ripple drawn inside a button.
///
/// `x`/`y` are the top-left corner of the ripple square relative to the
/// button, so they can be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ripple {
    pub id: u64,
    pub x: i32,
    pub y: i32,
    pub size: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub anchor: ElementId,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub kind: ElementKind,
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,
    pub classes: BTreeSet<String>,
    pub style: Style,
    /// Form value (input text)
    pub value: String,
    /// Visible text content
    pub label: String,
    pub disabled: bool,
    pub options: Vec<SelectOption>,
    pub selected: usize,
    pub ripples: Vec<Ripple>,
    /// Index into the listing this element renders, for cards and their parts
    pub event_index: Option<usize>,
    /// Last laid-out area, `None` when off screen
    pub rect: Option<Rect>,
    detached: bool,
}

impl Element {
    fn new(kind: ElementKind, parent: Option<ElementId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
            classes: BTreeSet::new(),
            style: Style::default(),
            value: String::new(),
            label: String::new(),
            disabled: false,
            options: Vec::new(),
            selected: 0,
            ripples: Vec::new(),
            event_index: None,
            rect: None,
            detached: false,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Value of the selected option, empty for non-select elements
    pub fn selected_value(&self) -> &str {
        self.options
            .get(self.selected)
            .map(|o| o.value.as_str())
            .unwrap_or("")
    }

    pub fn selected_label(&self) -> &str {
        self.options
            .get(self.selected)
            .map(|o| o.label.as_str())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    focused: Option<ElementId>,
    queued: VecDeque<DomEvent>,
    tooltip: Option<Tooltip>,
    next_ripple_id: u64,
}

impl Document {
    pub fn new() -> Self {
        Self {
            elements: vec![Element::new(ElementKind::Body, None)],
            focused: None,
            queued: VecDeque::new(),
            tooltip: None,
            next_ripple_id: 0,
        }
    }

    pub fn body(&self) -> ElementId {
        ElementId(0)
    }

    /// Create a new element as the last child of `parent`
    pub fn append(&mut self, parent: ElementId, kind: ElementKind) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(kind, Some(parent)));
        if let Some(p) = self.elements.get_mut(parent.0) {
            p.children.push(id);
        }
        id
    }

    /// Replace `old` in its parent with a fresh element of `kind`.
    ///
    /// The old element is detached: selectors no longer match it and it is
    /// never laid out again.
    pub fn replace_with(&mut self, old: ElementId, kind: ElementKind) -> Option<ElementId> {
        let parent = self.get(old)?.parent?;
        let id = ElementId(self.elements.len());
        let mut element = Element::new(kind, Some(parent));
        element.event_index = self.elements[old.0].event_index;
        self.elements.push(element);

        if let Some(slot) = self.elements[parent.0]
            .children
            .iter_mut()
            .find(|child| **child == old)
        {
            *slot = id;
        }

        let removed = &mut self.elements[old.0];
        removed.parent = None;
        removed.rect = None;
        removed.detached = true;

        if self.focused == Some(old) {
            self.focused = None;
        }

        Some(id)
    }

    /// Attached element, `None` for detached or unknown ids
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0).filter(|e| !e.detached)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0).filter(|e| !e.detached)
    }

    /// All attached elements in tree order
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        let mut order = Vec::with_capacity(self.elements.len());
        let mut stack = vec![self.body()];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(element) = self.get(id) {
                stack.extend(element.children.iter().rev().copied());
            }
        }
        order.into_iter()
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(|e| e.parent)
    }

    /// `id` followed by its ancestors up to the body
    pub fn path(&self, id: ElementId) -> Vec<ElementId> {
        let mut path = Vec::new();
        let mut current = self.get(id).map(|_| id);
        while let Some(node) = current {
            path.push(node);
            current = self.parent(node);
        }
        path
    }

    pub fn has_ancestor_kind(&self, id: ElementId, kind: ElementKind) -> bool {
        self.path(id)
            .into_iter()
            .skip(1)
            .any(|a| self.get(a).is_some_and(|e| e.kind == kind))
    }

    /// Nearest element on the path from `id` upwards with the given kind
    pub fn closest(&self, id: ElementId, kind: ElementKind) -> Option<ElementId> {
        self.path(id)
            .into_iter()
            .find(|a| self.get(*a).is_some_and(|e| e.kind == kind))
    }

    /// First descendant of `root` matched by `selector`
    pub fn query_within(&self, root: ElementId, selector: Selector) -> Option<ElementId> {
        self.ids()
            .filter(|id| *id != root)
            .find(|id| selector.matches(self, *id) && self.path(*id).contains(&root))
    }

    pub fn set_class(&mut self, id: ElementId, class: &str, on: bool) {
        if let Some(element) = self.get_mut(id) {
            if on {
                element.classes.insert(class.to_string());
            } else {
                element.classes.remove(class);
            }
        }
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    pub fn is_focused(&self, id: ElementId) -> bool {
        self.focused == Some(id)
    }

    /// Move focus to `id`, queueing `blur` on the previous element and
    /// `focus` on the new one
    pub fn focus(&mut self, id: ElementId) {
        if self.focused == Some(id) {
            return;
        }
        let Some(element) = self.get(id) else {
            return;
        };
        if !element.kind.is_focusable() || element.disabled {
            return;
        }

        if let Some(previous) = self.focused.take() {
            self.queued
                .push_back(DomEvent::new(previous, EventKind::Blur));
        }
        self.focused = Some(id);
        self.queued.push_back(DomEvent::new(id, EventKind::Focus));
    }

    /// Remove focus from `id` if it has it
    pub fn blur(&mut self, id: ElementId) {
        if self.focused == Some(id) {
            self.focused = None;
            self.queued.push_back(DomEvent::new(id, EventKind::Blur));
        }
    }

    /// Programmatic activation, as `element.click()`
    pub fn click(&mut self, id: ElementId) {
        if self.get(id).is_some_and(|e| !e.disabled) {
            self.queued
                .push_back(DomEvent::new(id, EventKind::Click { pointer: None }));
        }
    }

    /// Queue an arbitrary event for the dispatcher
    pub fn queue(&mut self, event: DomEvent) {
        self.queued.push_back(event);
    }

    pub fn take_queued(&mut self) -> Option<DomEvent> {
        self.queued.pop_front()
    }

    /// Focusable, enabled elements in tree order
    pub fn focusables(&self) -> Vec<ElementId> {
        self.ids()
            .filter(|id| {
                self.get(*id)
                    .is_some_and(|e| e.kind.is_focusable() && !e.disabled)
            })
            .collect()
    }

    /// Deepest laid-out element containing `position`
    pub fn hit_test(&self, position: Position) -> Option<ElementId> {
        self.ids()
            .filter(|id| {
                self.get(*id)
                    .and_then(|e| e.rect)
                    .is_some_and(|r| r.contains((position.column, position.row).into()))
            })
            .max_by_key(|id| self.path(*id).len())
    }

    pub fn next_ripple_id(&mut self) -> u64 {
        self.next_ripple_id += 1;
        self.next_ripple_id
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn show_tooltip(&mut self, anchor: ElementId, message: String) {
        self.tooltip = Some(Tooltip { anchor, message });
    }

    pub fn hide_tooltip(&mut self, anchor: ElementId) {
        if self.tooltip.as_ref().is_some_and(|t| t.anchor == anchor) {
            self.tooltip = None;
        }
    }

    /// Forget all laid-out areas before a new layout pass
    pub fn clear_layout(&mut self) {
        for element in &mut self.elements {
            element.rect = None;
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
