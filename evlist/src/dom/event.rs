use crate::input::{Key, Position};

use super::ElementId;

/// What happened to an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind {
    Focus,
    Blur,
    KeyDown(Key),
    KeyPress(Key),
    Input,
    Change,
    /// `pointer` is `None` for clicks triggered programmatically
    Click { pointer: Option<Position> },
    MouseEnter,
    MouseLeave,
    Load,
    Error,
}

/// An event dispatched to a single target element
#[derive(Debug, Clone, PartialEq)]
pub struct DomEvent {
    pub target: ElementId,
    pub kind: EventKind,
    default_prevented: bool,
}

impl DomEvent {
    pub fn new(target: ElementId, kind: EventKind) -> Self {
        Self {
            target,
            kind,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
