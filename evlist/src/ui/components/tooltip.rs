use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::dom::Document;
use crate::ui::theme;

/// Draw the document's tooltip just above its anchor, or below it when
/// there is no room
pub fn render_tooltip(f: &mut Frame, doc: &Document) {
    let Some(tooltip) = doc.tooltip() else {
        return;
    };
    let Some(anchor) = doc.get(tooltip.anchor).and_then(|e| e.rect) else {
        return;
    };

    let screen = f.area();
    let width = (tooltip.message.chars().count() as u16 + 2).min(screen.width);
    let height = 3;
    let x = anchor.x.min(screen.right().saturating_sub(width));
    let y = if anchor.y >= screen.y + height {
        anchor.y - height
    } else {
        anchor.bottom()
    };
    let area = Rect::new(x, y, width, height).intersection(screen);

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(tooltip.message.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::info_border_style()),
        ),
        area,
    );
}
