use crate::input::KeyEvent;

/// Commands produced from terminal input (user actions → page changes)
#[derive(Debug, Clone, PartialEq)]
pub enum PageCommand {
    /// Deliver a key to the focused element as keydown/keypress
    KeyToFocused(KeyEvent),

    // Focus
    FocusSearch,
    FocusNext,
    FocusPrevious,

    // Scrolling
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    ScrollToTop,

    // Overlays
    CloseOverlay,
    ToggleHelp,

    // System
    Quit,
}
