//! One event card: image, status badge, details and the two action buttons.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::dom::{Document, Element, ElementId, ElementKind, Selector};
use crate::listing::Event;
use crate::page::HIGHLIGHT_CLASS;
use crate::ui::theme;

pub fn render_event_card(f: &mut Frame, doc: &Document, card_id: ElementId, event: &Event) {
    let Some(card) = doc.get(card_id) else {
        return;
    };
    let Some(rect) = card.rect else {
        return;
    };

    let hidden = card.style.is_transparent();
    let border_style = if hidden {
        theme::hidden_style()
    } else if card.style.z_index.is_some() {
        theme::accent_border_style().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let content_rect = child_of_kind(doc, card, ElementKind::CardContent)
        .and_then(|id| doc.get(id))
        .and_then(|e| e.rect)
        .unwrap_or(inner);

    let title_style = if hidden {
        theme::hidden_style()
    } else if card.has_class(HIGHLIGHT_CLASS) {
        theme::highlight_style()
    } else {
        theme::title_style()
    };
    let text_style = if hidden {
        theme::hidden_style()
    } else {
        Style::default()
    };

    let available = event.available_spots();
    let spots = if event.is_full() {
        "Full".to_string()
    } else {
        format!("{} spots left", available)
    };
    let spots_style = if hidden {
        theme::hidden_style()
    } else {
        Style::default().fg(theme::spots_color(available))
    };

    let lines = vec![
        Line::from(Span::styled(event.title.as_str(), title_style)),
        Line::from(Span::styled(
            format!(
                "{} · {}",
                event.date.format("%a %d %b %Y, %H:%M"),
                event.location
            ),
            text_style,
        )),
        Line::from(vec![
            Span::styled(format!("{} · ", event.ngo), text_style),
            Span::styled(spots, spots_style),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), content_rect);

    if let Some(image) = child_of_kind(doc, card, ElementKind::EventImage)
        .or_else(|| child_of_kind(doc, card, ElementKind::ImagePlaceholder))
    {
        render_image(f, doc, image);
    }

    if let Some(badge) = doc.query_within(card_id, Selector::StatusBadge) {
        render_status_badge(f, doc, badge, event, hidden);
    }
    for selector in [Selector::ViewEventButton, Selector::ViewNgoButton] {
        if let Some(button) = doc.query_within(card_id, selector) {
            render_button(f, doc, button);
        }
    }
}

fn child_of_kind(doc: &Document, parent: &Element, kind: ElementKind) -> Option<ElementId> {
    parent
        .children
        .iter()
        .copied()
        .find(|c| doc.get(*c).is_some_and(|e| e.kind == kind))
}

fn render_image(f: &mut Frame, doc: &Document, id: ElementId) {
    let Some(element) = doc.get(id) else {
        return;
    };
    let Some(rect) = element.rect else {
        return;
    };

    let (text, style) = match element.kind {
        ElementKind::ImagePlaceholder => (element.label.as_str(), theme::help_text_style()),
        _ if element.style.is_transparent() => return,
        _ => ("▣", theme::accent_border_style()),
    };
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::RIGHT));
    f.render_widget(paragraph, rect);
}

fn render_status_badge(f: &mut Frame, doc: &Document, id: ElementId, event: &Event, hidden: bool) {
    let Some(element) = doc.get(id) else {
        return;
    };
    let Some(rect) = element.rect else {
        return;
    };

    let style = if hidden {
        theme::hidden_style()
    } else {
        Style::default()
            .fg(theme::status_color(event.status))
            .add_modifier(Modifier::BOLD)
    };
    let badge = Paragraph::new(format!("[{}]", element.label)).style(style);
    f.render_widget(badge, rect);
}

fn render_button(f: &mut Frame, doc: &Document, id: ElementId) {
    let Some(element) = doc.get(id) else {
        return;
    };
    let Some(rect) = element.rect else {
        return;
    };

    let mut style = theme::button_style(element.disabled);
    if element.style.is_pressed() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    if doc.is_focused(id) {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }

    let button = Paragraph::new(element.label.as_str())
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(button, rect);

    render_ripples(f, element, rect);
}

/// Draw each ripple as a dot at its centre, clipped to the button
fn render_ripples(f: &mut Frame, element: &Element, rect: Rect) {
    for ripple in &element.ripples {
        let half = i32::from(ripple.size / 2);
        let column = i32::from(rect.x) + ripple.x + half;
        let row = i32::from(rect.y) + ripple.y + half;

        let (Ok(column), Ok(row)) = (u16::try_from(column), u16::try_from(row)) else {
            continue;
        };
        if !rect.contains((column, row).into()) {
            continue;
        }
        if let Some(cell) = f.buffer_mut().cell_mut((column, row)) {
            cell.set_symbol("•");
        }
    }
}
