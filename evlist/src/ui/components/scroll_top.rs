use ratatui::{
    layout::Alignment,
    style::Modifier,
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::dom::{Document, ElementLookup, Selector};
use crate::ui::theme;

/// Draw the scroll-to-top control where layout placed it. Layout leaves it
/// without an area until the list is scrolled far enough.
pub fn render_scroll_top(f: &mut Frame, doc: &Document) {
    let Some(element) = doc
        .query(Selector::ScrollTopButton)
        .and_then(|id| doc.get(id))
    else {
        return;
    };
    let Some(rect) = element.rect else {
        return;
    };

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(element.label.as_str())
            .style(theme::button_style(false).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        rect,
    );
}
