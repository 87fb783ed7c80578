//! Toast notifications stacked in the top-right corner.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::notify::NotificationCenter;
use crate::ui::theme;

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;

pub fn render_notifications(f: &mut Frame, notifications: &NotificationCenter) {
    let area = f.area();
    let width = TOAST_WIDTH.min(area.width);

    for (i, notification) in notifications.entries().enumerate() {
        let y = area.y + 1 + i as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let rect = Rect::new(area.right().saturating_sub(width + 1), y, width, TOAST_HEIGHT);
        let color = theme::severity_color(notification.severity);

        let toast = Paragraph::new(notification.message.as_str())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", notification.severity))
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(Clear, rect);
        f.render_widget(toast, rect);
    }
}
