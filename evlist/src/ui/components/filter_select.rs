use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::dom::{Document, ElementLookup, Selector};
use crate::ui::{layouts, theme};

/// Status filter drawn as a closed select: `◀ label ▶`
pub fn render_filter_select(f: &mut Frame, doc: &Document) {
    let Some(select_id) = doc.query(Selector::FilterSelect) else {
        return;
    };
    let Some(select) = doc.get(select_id) else {
        return;
    };
    let Some(rect) = select.rect else {
        return;
    };

    let area = if select.style.is_lifted() {
        layouts::lifted(rect)
    } else {
        rect
    };
    let border_style = if doc.is_focused(select_id) {
        theme::focused_border_style()
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled("◀ ", theme::help_text_style()),
        Span::raw(select.selected_label()),
        Span::styled(" ▶", theme::help_text_style()),
    ]);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Status ")
            .border_style(border_style),
    );
    f.render_widget(paragraph, area);
}
