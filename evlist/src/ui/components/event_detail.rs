//! Popups opened from a card: details, organisation and the enlarged image.

use ratatui::{
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::popup::{render_popup_frame, PopupTone};
use crate::listing::Event;
use crate::ui::{layouts, theme};

pub fn render_event_detail(f: &mut Frame, event: &Event) {
    let inner = render_popup_frame(f, layouts::popup_sizes::MEDIUM, "Event Details", PopupTone::Accent);

    let spots = if event.is_full() {
        "Full".to_string()
    } else {
        format!("{} of {} spots left", event.available_spots(), event.max_volunteers)
    };

    let lines = vec![
        Line::from(Span::styled(event.title.as_str(), theme::title_style())),
        Line::from(""),
        field("Status", event.status.display_name().to_string()),
        field("When", event.date.format("%A %d %B %Y, %H:%M").to_string()),
        field("Where", event.location.clone()),
        field("Organised by", event.ngo.clone()),
        Line::from(vec![
            Span::styled(format!("{:14}", "Volunteers"), theme::help_text_style()),
            Span::styled(
                spots,
                ratatui::style::Style::default().fg(theme::spots_color(event.available_spots())),
            ),
        ]),
        Line::from(""),
        Line::from(event.description.as_str()),
    ];

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

pub fn render_ngo_profile(f: &mut Frame, event: &Event, events_by_ngo: usize) {
    let inner = render_popup_frame(f, layouts::popup_sizes::MEDIUM, "NGO Profile", PopupTone::Info);

    let lines = vec![
        Line::from(Span::styled(event.ngo.as_str(), theme::title_style())),
        Line::from(""),
        field("Events listed", events_by_ngo.to_string()),
        field("Next event", event.title.clone()),
    ];

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// The terminal cannot draw the picture itself, so the modal shows a frame
/// standing in for it with the file it comes from
pub fn render_image_modal(f: &mut Frame, event: &Event) {
    let inner = render_popup_frame(f, layouts::popup_sizes::LARGE, &event.title, PopupTone::Accent);

    let source = event
        .image
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let art_width = inner.width.saturating_sub(4) as usize;
    let art_rows = inner.height.saturating_sub(4) as usize;

    let mut lines = vec![Line::from("")];
    lines.extend(
        std::iter::repeat_n("▒".repeat(art_width), art_rows)
            .map(|row| Line::from(Span::styled(row, theme::accent_border_style()))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(source, theme::help_text_style())));

    f.render_widget(
        Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
        inner,
    );
}

fn field(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:14}", name), theme::help_text_style()),
        Span::raw(value),
    ])
}
