//! Search input with its submit button.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::behaviors::search_button::LOADING_CLASS;
use crate::behaviors::search_filter::HAS_VALUE_CLASS;
use crate::dom::{Document, ElementLookup, Selector};
use crate::ui::{layouts, theme};

pub const PLACEHOLDER: &str = "Search by title, description or location";

pub fn render_search_box(f: &mut Frame, doc: &Document) {
    let Some(input_id) = doc.query(Selector::SearchInput) else {
        return;
    };
    let Some(search_box) = doc.parent(input_id).and_then(|id| doc.get(id)) else {
        return;
    };
    let Some(input) = doc.get(input_id) else {
        return;
    };

    let lift = |rect: Rect| {
        if search_box.style.is_lifted() {
            layouts::lifted(rect)
        } else {
            rect
        }
    };

    if let Some(rect) = input.rect {
        let focused = doc.is_focused(input_id);
        let border_style = if focused {
            theme::focused_border_style()
        } else if search_box.has_class(HAS_VALUE_CLASS) {
            theme::accent_border_style()
        } else {
            Style::default()
        };

        let text = if input.value.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, theme::help_text_style()))
        } else {
            Line::from(input.value.as_str())
        };

        let area = lift(rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search events ")
            .border_style(border_style);
        let inner = block.inner(area);
        f.render_widget(Paragraph::new(text).block(block), area);

        if focused {
            let width = input.value.chars().count() as u16;
            f.set_cursor_position((
                inner.x + width.min(inner.width.saturating_sub(1)),
                inner.y,
            ));
        }
    }

    if let Some(button_id) = doc.query(Selector::SearchButton) {
        if let Some(button) = doc.get(button_id) {
            if let Some(rect) = button.rect {
                let mut style = theme::button_style(button.disabled);
                if button.has_class(LOADING_CLASS) {
                    style = theme::loading_style().add_modifier(Modifier::BOLD);
                }
                if doc.is_focused(button_id) {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }

                let paragraph = Paragraph::new(button.label.as_str())
                    .style(style)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL));
                f.render_widget(paragraph, lift(rect));
            }
        }
    }
}
