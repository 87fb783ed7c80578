//! Help bar with the key hints for the current focus.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::dom::ElementKind;
use crate::state::PageState;
use crate::ui::theme;

pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

pub const HELP_TEXT_DEFAULT: &str = "/: search | Tab: next | j/k: scroll | g: top | ?: help | q: quit";

/// Hint text for whatever currently has focus
pub fn help_text(state: &PageState) -> &'static str {
    let kind = state
        .doc
        .focused()
        .and_then(|id| state.doc.get(id))
        .map(|e| e.kind);

    match kind {
        Some(ElementKind::SearchInput) => "Type to search | Enter: search | Esc: clear | Tab: next",
        Some(ElementKind::FilterSelect) => "←/→: change status | Tab: next | Shift+Tab: previous",
        Some(kind) if kind.is_button() => "Enter/Space: activate | Tab: next | /: search",
        _ => HELP_TEXT_DEFAULT,
    }
}
