use ratatui::{layout::Rect, Frame};
use throbber_widgets_tui::ThrobberState;

/// Spinner shown in the header while a search submission is in flight
pub fn render_loading_indicator(f: &mut Frame, area: Rect, throbber_state: &ThrobberState) {
    let simple =
        throbber_widgets_tui::Throbber::default().throbber_set(throbber_widgets_tui::BRAILLE_EIGHT);
    f.render_stateful_widget(simple, area, &mut throbber_state.clone());
}
