//! Frame shared by the page's modal popups.

use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::{layouts, theme};

/// Border colour of a popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupTone {
    /// Event content: details, images, help
    Accent,
    /// Organisation content
    Info,
}

/// Clear a centered area of the screen, frame it and return the inner area.
///
/// Every popup closes on Esc or a click, so the hint is part of the frame.
pub fn render_popup_frame(f: &mut Frame, size: (u16, u16), title: &str, tone: PopupTone) -> Rect {
    let area = layouts::centered_popup(size.0, size.1, f.area());
    f.render_widget(Clear, area);

    let border_style = match tone {
        PopupTone::Accent => theme::accent_border_style(),
        PopupTone::Info => theme::info_border_style(),
    };
    let block = Block::default()
        .title(Line::from(Span::styled(format!(" {} ", title), theme::title_style())).centered())
        .title_bottom(
            Line::from(Span::styled(CLOSE_HINT, theme::help_text_style())).right_aligned(),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let inner = block.inner(area);
    f.render_widget(block, area);

    inner
}

pub const CLOSE_HINT: &str = " Esc or click to close ";
