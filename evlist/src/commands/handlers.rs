use crate::events::PageCommand;
use crate::input::{Key, KeyEvent};
use crate::state::{Overlay, PageState};

/// Map user input (KeyEvent) to PageCommand based on current page state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &PageState) -> Option<PageCommand> {
    let key = event.key;

    // Priority 0: Ctrl shortcuts work everywhere, including while typing
    if event.modifiers.ctrl {
        return match key {
            Key::Char('c') | Key::Char('q') => Some(PageCommand::Quit),
            _ => None,
        };
    }

    // Priority 1: Overlays swallow input until closed
    if let Some(overlay) = state.overlay {
        return match (overlay, key) {
            (Overlay::Help, Key::Char('?') | Key::Esc) => Some(PageCommand::ToggleHelp),
            (_, Key::Esc | Key::Enter | Key::Char('q')) => Some(PageCommand::CloseOverlay),
            _ => None,
        };
    }

    // Priority 2: '/' always jumps to the search box and is never typed
    if key == Key::Char('/') {
        return Some(PageCommand::FocusSearch);
    }

    // Priority 3: A focused element gets the key
    if state.doc.focused().is_some() {
        return Some(PageCommand::KeyToFocused(event));
    }

    // Priority 4: Page-level keys
    match key {
        Key::Tab => Some(PageCommand::FocusNext),
        Key::BackTab => Some(PageCommand::FocusPrevious),
        Key::Char('j') | Key::Down => Some(PageCommand::ScrollDown),
        Key::Char('k') | Key::Up => Some(PageCommand::ScrollUp),
        Key::PageDown => Some(PageCommand::PageDown),
        Key::PageUp => Some(PageCommand::PageUp),
        Key::Char('g') => Some(PageCommand::ScrollToTop),
        Key::Char('?') => Some(PageCommand::ToggleHelp),
        Key::Char('q') => Some(PageCommand::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::listing::SearchQuery;

    fn page() -> PageState {
        PageState::new(Vec::new(), SearchQuery::default(), &Settings::default())
    }

    #[test]
    fn test_quit_command() {
        let state = page();
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('q')), &state),
            Some(PageCommand::Quit)
        );
    }

    #[test]
    fn test_ctrl_c_quits_while_typing() {
        let mut state = page();
        let input = state.search_input().unwrap();
        state.doc.focus(input);
        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('c')), &state),
            Some(PageCommand::Quit)
        );
    }

    #[test]
    fn test_keys_go_to_focused_input() {
        let mut state = page();
        let input = state.search_input().unwrap();
        state.doc.focus(input);

        for key in [Key::Char('q'), Key::Char('g'), Key::Esc, Key::Enter] {
            assert_eq!(
                handle_key_input(KeyEvent::new(key), &state),
                Some(PageCommand::KeyToFocused(KeyEvent::new(key)))
            );
        }
    }

    #[test]
    fn test_slash_focuses_search_from_elsewhere() {
        let mut state = page();
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('/')), &state),
            Some(PageCommand::FocusSearch)
        );

        let focusables = state.doc.focusables();
        state.doc.focus(focusables[1]);
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('/')), &state),
            Some(PageCommand::FocusSearch)
        );
    }

    #[test]
    fn test_slash_is_not_typed_into_search() {
        let mut state = page();
        let input = state.search_input().unwrap();
        state.doc.focus(input);
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('/')), &state),
            Some(PageCommand::FocusSearch)
        );
    }

    #[test]
    fn test_g_scrolls_to_top() {
        let state = page();
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('g')), &state),
            Some(PageCommand::ScrollToTop)
        );
    }

    #[test]
    fn test_overlay_blocks_page_keys() {
        let mut state = page();
        state.overlay = Some(Overlay::EventDetail(0));
        assert_eq!(handle_key_input(KeyEvent::new(Key::Char('j')), &state), None);
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Esc), &state),
            Some(PageCommand::CloseOverlay)
        );

        state.overlay = Some(Overlay::Help);
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('?')), &state),
            Some(PageCommand::ToggleHelp)
        );
    }

    #[test]
    fn test_escape_without_focus_is_ignored() {
        let state = page();
        assert_eq!(handle_key_input(KeyEvent::new(Key::Esc), &state), None);
    }
}
