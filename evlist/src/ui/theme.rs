//! Centralized theme constants and style functions for consistent UI styling.
//!
//! All colors, layout constants, and common styles should be defined here
//! to keep the search bar, filter and cards visually consistent.

use ratatui::style::{Color, Modifier, Style};

use crate::listing::EventStatus;
use crate::notify::Severity;

// =============================================================================
// Colors
// =============================================================================

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for the page title and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

/// Color for loading/status messages
pub const COLOR_LOADING: Color = Color::Yellow;

/// Border color for informational popups
pub const COLOR_BORDER_INFO: Color = Color::Blue;

/// Border color for accent/highlighted elements
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Color for input fields when focused
pub const COLOR_INPUT_FOCUSED: Color = Color::Yellow;

/// Text of cards that have not been revealed yet
pub const COLOR_HIDDEN: Color = Color::DarkGray;

/// Warning for events that are almost full
pub const COLOR_AMBER: Color = Color::Indexed(214);

pub const COLOR_FULL: Color = Color::Red;

// =============================================================================
// Layout Constants
// =============================================================================

/// Margin around the page
pub const SCREEN_MARGIN: u16 = 1;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the search row, one spare row above the box for the lift
pub const SEARCH_ROW_HEIGHT: u16 = 4;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Width of the status filter select
pub const FILTER_WIDTH: u16 = 24;

/// Width of the search button
pub const SEARCH_BUTTON_WIDTH: u16 = 16;

/// Height of one event card, borders included
pub const CARD_HEIGHT: u16 = 6;

/// Width of the image column of a card
pub const CARD_IMAGE_WIDTH: u16 = 8;

/// Remaining spots at or below which a card warns
pub const FEW_SPOTS_LEFT: u32 = 5;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for help bar text
pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for the page title
pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for loading/status messages
pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

/// Border of a focused form control
pub fn focused_border_style() -> Style {
    Style::default()
        .fg(COLOR_INPUT_FOCUSED)
        .add_modifier(Modifier::BOLD)
}

/// Style for info borders
pub fn info_border_style() -> Style {
    Style::default()
        .fg(COLOR_BORDER_INFO)
        .add_modifier(Modifier::BOLD)
}

/// Style for accent borders
pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

/// Style for elements with zero opacity
pub fn hidden_style() -> Style {
    Style::default()
        .fg(COLOR_HIDDEN)
        .add_modifier(Modifier::DIM)
}

/// Style for a card that matches the submitted query
pub fn highlight_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Style for a button, before press and focus effects
pub fn button_style(disabled: bool) -> Style {
    if disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White).bg(Color::Blue)
    }
}

// =============================================================================
// Status and Severity Colors
// =============================================================================

pub fn status_color(status: EventStatus) -> Color {
    match status {
        EventStatus::Published => Color::Green,
        EventStatus::Ongoing => Color::Yellow,
        EventStatus::Completed => Color::Gray,
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Info => Color::Blue,
        Severity::Error => Color::Red,
    }
}

/// Color for a remaining spots count: red when full, amber when few remain
pub fn spots_color(available: u32) -> Color {
    if available == 0 {
        COLOR_FULL
    } else if available <= FEW_SPOTS_LEFT {
        COLOR_AMBER
    } else {
        COLOR_HELP_TEXT
    }
}
