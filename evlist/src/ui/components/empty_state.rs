//! What the card area shows when a search matches nothing.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::listing::SearchQuery;
use crate::ui::theme;

pub const NO_EVENTS_MESSAGE: &str = "No events found";

/// Suggestion for getting results back, based on what narrowed the search
pub fn empty_hint(query: &SearchQuery) -> String {
    let text = query.text.trim();
    match (text.is_empty(), query.status) {
        (false, Some(status)) => format!(
            "Nothing {} matches \"{}\". Try another word or status",
            status.display_name().to_lowercase(),
            text
        ),
        (false, None) => format!("Nothing matches \"{}\". Try another word", text),
        (true, Some(status)) => format!(
            "No {} events right now. Try another status",
            status.display_name().to_lowercase()
        ),
        (true, None) => "Check back soon for new volunteering events".to_string(),
    }
}

pub fn render_empty_state(f: &mut Frame, area: Rect, query: &SearchQuery) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(NO_EVENTS_MESSAGE, theme::loading_style())),
        Line::from(""),
        Line::from(Span::styled(empty_hint(query), theme::help_text_style())),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::hidden_style()),
    );

    f.render_widget(paragraph, area);
}
