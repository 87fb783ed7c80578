use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use super::popup::{render_popup_frame, PopupTone};
use crate::ui::{layouts, theme};

pub fn render_help_popup(f: &mut Frame) {
    let inner = render_popup_frame(f, layouts::popup_sizes::LARGE, "Help", PopupTone::Accent);

    let items: Vec<ListItem> = help_items()
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::title_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn help_items() -> Vec<(&'static str, &'static str)> {
    vec![
        ("/", "Focus the search box"),
        ("Type", "Edit the search query"),
        ("Enter", "Search (in the search box) or activate a button"),
        ("Esc", "Clear the search box and leave it"),
        ("Tab/Shift+Tab", "Move focus between controls"),
        ("←/→", "Change the status filter"),
        ("Space", "Activate the focused button"),
        ("↓/j ↑/k", "Scroll the event list"),
        ("PgDn/PgUp", "Scroll a page of events"),
        ("g", "Back to the top"),
        ("Click image", "Enlarge the event image"),
        ("Mouse", "Click, hover and scroll the page"),
        ("?", "Toggle this help"),
        ("q/Ctrl+c", "Quit"),
    ]
}
