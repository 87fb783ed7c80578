use std::time::Instant;

use evlist::behaviors::images::PLACEHOLDER_LABEL;
use evlist::behaviors::press::{LOADING_NGO_MESSAGE, PRESSED_SCALE};
use evlist::behaviors::search_button::{EMPTY_QUERY_MESSAGE, SEARCHING_LABEL, SEARCHING_MESSAGE};
use evlist::behaviors::search_filter::{FILTERING_MESSAGE, HAS_VALUE_CLASS};
use evlist::behaviors::Behaviors;
use evlist::commands::executor::{execute_command, Host};
use evlist::commands::PageCommand;
use evlist::config::Settings;
use evlist::dom::{Document, ElementKind, ElementLookup, SelectOption, Selector, Transform};
use evlist::input::{Key, KeyEvent};
use evlist::listing::{EventStatus, SearchQuery};
use evlist::notify::Severity;
use evlist::page::HIGHLIGHT_CLASS;
use evlist::state::{Overlay, PageState};
use evlist::testing::{sample_event, RecordingNotifier, TestPage};
use evlist::timers::TimerQueue;

fn three_events() -> Vec<evlist::listing::Event> {
    vec![
        sample_event(1, "Beach Cleanup", EventStatus::Published),
        sample_event(2, "Tree Planting", EventStatus::Ongoing),
        sample_event(3, "River Restoration", EventStatus::Completed),
    ]
}

fn many_events(count: u64) -> Vec<evlist::listing::Event> {
    (1..=count)
        .map(|i| sample_event(i, &format!("Event {}", i), EventStatus::Published))
        .collect()
}

fn without_autofocus() -> Settings {
    Settings {
        autofocus_search: false,
        ..Settings::default()
    }
}

#[test]
fn test_quit_flow() {
    let mut page = TestPage::with_settings(three_events(), without_autofocus());

    page.assert_not_quit();
    page.send_key(Key::Char('q'));
    page.assert_should_quit();
}

#[test]
fn test_ctrl_c_quits_while_typing() {
    let mut page = TestPage::new(three_events());
    page.type_text("q");
    page.assert_not_quit();

    page.send_key_event(KeyEvent::with_ctrl(Key::Char('c')));
    page.assert_should_quit();
}

#[test]
fn test_search_box_lifted_on_load_when_autofocused() {
    let page = TestPage::new(three_events());
    let input = page.query(Selector::SearchInput).unwrap();
    let search_box = page.state().doc.parent(input).unwrap();

    assert!(page.state().doc.is_focused(input));
    assert_eq!(
        page.state().doc.get(search_box).unwrap().style.transform,
        Some(Transform::TranslateY(-2))
    );
}

#[test]
fn test_enter_submits_once_and_reloads_filtered_page() {
    let mut page = TestPage::new(three_events());

    page.type_text("beach cleanup");
    page.send_key(Key::Enter);

    // One click on the search button, no second submission from the form
    assert_eq!(page.notifier().count(SEARCHING_MESSAGE), 1);
    assert_eq!(page.notifier().count(EMPTY_QUERY_MESSAGE), 0);
    assert!(page.state().is_submitting());

    let button = page.query(Selector::SearchButton).unwrap();
    let element = page.state().doc.get(button).unwrap();
    assert!(element.disabled);
    assert_eq!(element.label, SEARCHING_LABEL);

    // A second Enter hits a disabled button
    page.send_key(Key::Enter);
    assert_eq!(page.notifier().count(SEARCHING_MESSAGE), 1);

    page.advance(400);

    assert!(!page.state().is_submitting());
    assert_eq!(page.state().query, SearchQuery::new("beach cleanup", None));
    assert_eq!(page.state().events.len(), 1);
    assert_eq!(page.state().events[0].title, "Beach Cleanup");

    let input = page.query(Selector::SearchInput).unwrap();
    assert_eq!(page.state().doc.get(input).unwrap().value, "beach cleanup");
    let card = page.query(Selector::EventCard).unwrap();
    assert!(page.state().doc.get(card).unwrap().has_class(HIGHLIGHT_CLASS));
}

#[test]
fn test_enter_with_empty_query_warns() {
    let mut page = TestPage::new(three_events());
    page.send_key(Key::Enter);

    assert_eq!(
        page.notifier().calls(),
        &[(EMPTY_QUERY_MESSAGE.to_string(), Severity::Error)]
    );
}

#[test]
fn test_search_button_click_submits() {
    let mut page = TestPage::new(three_events());
    page.type_text("tree");

    let button = page.query(Selector::SearchButton).unwrap();
    page.click_element(button);
    assert_eq!(page.notifier().count(SEARCHING_MESSAGE), 1);

    page.advance(400);
    assert_eq!(page.state().events.len(), 1);
    assert_eq!(page.state().events[0].title, "Tree Planting");
}

#[test]
fn test_typing_toggles_has_value_and_rearms_single_debounce() {
    let mut page = TestPage::new(three_events());
    let input = page.query(Selector::SearchInput).unwrap();
    let search_box = page.state().doc.parent(input).unwrap();

    page.type_text("  ");
    assert!(!page.state().doc.get(search_box).unwrap().has_class(HAS_VALUE_CLASS));

    page.type_text("tree");
    assert!(page.state().doc.get(search_box).unwrap().has_class(HAS_VALUE_CLASS));

    // Six input events, one pending timer
    assert_eq!(page.core().timers().len(), 1);
    assert!(page.state().behaviors.search.pending_debounce().is_some());

    page.advance(299);
    assert!(page.state().behaviors.search.pending_debounce().is_some());
    page.advance(1);
    assert!(page.state().behaviors.search.pending_debounce().is_none());
    assert!(page.core().timers().is_empty());
}

#[test]
fn test_escape_clears_and_blurs_search() {
    let mut page = TestPage::new(three_events());
    let input = page.query(Selector::SearchInput).unwrap();
    let search_box = page.state().doc.parent(input).unwrap();

    page.type_text("beach");
    page.send_key(Key::Esc);

    let doc = &page.state().doc;
    assert_eq!(doc.get(input).unwrap().value, "");
    assert!(!doc.get(search_box).unwrap().has_class(HAS_VALUE_CLASS));
    assert_eq!(doc.get(search_box).unwrap().style.transform, None);
    assert_eq!(doc.focused(), None);
    assert!(page.state().behaviors.search.pending_debounce().is_none());
    assert!(page.core().timers().is_empty());

    // Blurred again: Esc now does nothing, '/' brings focus back
    page.send_key(Key::Esc);
    page.send_key(Key::Char('/'));
    assert_eq!(page.state().doc.focused(), Some(input));
}

#[test]
fn test_filter_change_notifies_once() {
    let mut page = TestPage::new(three_events());
    page.send_keys(&[Key::Tab, Key::Tab]);

    let filter = page.query(Selector::FilterSelect).unwrap();
    assert!(page.state().doc.is_focused(filter));
    assert!(page.state().doc.get(filter).unwrap().style.is_lifted());

    page.send_key(Key::Right);

    assert_eq!(
        page.notifier().calls(),
        &[(FILTERING_MESSAGE.to_string(), Severity::Info)]
    );
    assert_eq!(page.state().doc.get(filter).unwrap().selected_label(), "Published");

    page.send_key(Key::Tab);
    assert!(!page.state().doc.get(filter).unwrap().style.is_lifted());
}

#[test]
fn test_filter_change_to_custom_option_notifies_once() {
    let settings = Settings::default();
    let mut state = PageState::new(three_events(), SearchQuery::default(), &settings);
    let filter = state.doc.query(Selector::FilterSelect).unwrap();
    state.doc.get_mut(filter).unwrap().options = vec![
        SelectOption::new("All", ""),
        SelectOption::new("Environment", "environment"),
    ];
    state.doc.focus(filter);

    let mut timers = TimerQueue::new(Instant::now());
    let mut notifier = RecordingNotifier::default();
    let mut host = Host {
        timers: &mut timers,
        notifier: &mut notifier,
        settings: &settings,
    };
    execute_command(
        PageCommand::KeyToFocused(KeyEvent::new(Key::Right)),
        &mut state,
        &mut host,
    );

    assert_eq!(
        notifier.calls(),
        &[("Filtering events...".to_string(), Severity::Info)]
    );
    assert_eq!(
        state.doc.get(filter).unwrap().selected_label(),
        "Environment"
    );
}

#[test]
fn test_missing_elements_disable_only_their_behaviour() {
    let settings = Settings::default();
    let mut state = PageState::new(Vec::new(), SearchQuery::default(), &settings);

    // A search box with no submit button and no filter
    let mut doc = Document::new();
    let search_box = doc.append(doc.body(), ElementKind::SearchBox);
    let input = doc.append(search_box, ElementKind::SearchInput);
    state.behaviors = Behaviors::bind(&doc, &settings);
    state.doc = doc;
    state.doc.focus(input);

    let mut timers = TimerQueue::new(Instant::now());
    let mut notifier = RecordingNotifier::default();
    let mut host = Host {
        timers: &mut timers,
        notifier: &mut notifier,
        settings: &settings,
    };
    for key in [Key::Char('x'), Key::Enter, Key::Right] {
        execute_command(
            PageCommand::KeyToFocused(KeyEvent::new(key)),
            &mut state,
            &mut host,
        );
    }

    // Enter was consumed by the controller without anything to click
    assert!(!state.is_submitting());
    assert!(notifier.calls().is_empty());
    assert_eq!(state.doc.get(input).unwrap().value, "x");
    assert!(state.doc.get(search_box).unwrap().has_class(HAS_VALUE_CLASS));
}

#[test]
fn test_cards_reveal_once_as_they_scroll_into_view() {
    let mut page = TestPage::with_settings(many_events(8), without_autofocus());
    let cards = page.query_all(Selector::EventCard);

    for card in &cards[..5] {
        assert_eq!(page.state().doc.get(*card).unwrap().style.opacity, Some(1.0));
    }
    let last = cards[7];
    assert!(page.state().doc.get(last).unwrap().style.is_transparent());

    page.send_keys(&[Key::Char('j'), Key::Char('j'), Key::Char('j')]);
    assert_eq!(page.state().scroll, 3);
    let revealed = page.state().doc.get(last).unwrap().style;
    assert_eq!(revealed.opacity, Some(1.0));
    assert_eq!(revealed.transform, Some(Transform::TranslateY(0)));

    page.send_keys(&[Key::Char('k'), Key::Char('k'), Key::Char('k')]);
    assert_eq!(page.state().scroll, 0);
    assert_eq!(page.state().doc.get(last).unwrap().style, revealed);
    assert!(page.state().behaviors.cards.is_revealed(last));
}

#[test]
fn test_page_down_is_clamped() {
    let mut page = TestPage::with_settings(many_events(8), without_autofocus());
    page.send_key(Key::PageDown);
    assert_eq!(page.state().scroll, 5);
    page.send_key(Key::PageDown);
    assert_eq!(page.state().scroll, 7);
    page.send_key(Key::PageUp);
    assert_eq!(page.state().scroll, 2);
}

#[test]
fn test_hover_raises_card() {
    let mut page = TestPage::new(three_events());
    let cards = page.query_all(Selector::EventCard);

    page.hover_element(cards[0]);
    assert_eq!(page.state().doc.get(cards[0]).unwrap().style.z_index, Some(10));

    page.hover_element(cards[1]);
    assert_eq!(page.state().doc.get(cards[0]).unwrap().style.z_index, None);
    assert_eq!(page.state().doc.get(cards[1]).unwrap().style.z_index, Some(10));
}

#[test]
fn test_status_badge_tooltip() {
    let mut page = TestPage::new(three_events());
    let badges = page.query_all(Selector::StatusBadge);

    page.hover_element(badges[1]);
    let tooltip = page.state().doc.tooltip().unwrap();
    assert_eq!(tooltip.anchor, badges[1]);
    assert_eq!(tooltip.message, "Event is currently in progress");

    page.hover(0, 0);
    assert!(page.state().doc.tooltip().is_none());
}

#[test]
fn test_view_button_press_ripple_and_detail() {
    let mut page = TestPage::new(three_events());
    let view = page.query(Selector::ViewEventButton).unwrap();

    page.click_element(view);

    let element = page.state().doc.get(view).unwrap();
    assert_eq!(element.style.transform, Some(Transform::Scale(PRESSED_SCALE)));
    assert_eq!(element.ripples.len(), 1);
    assert_eq!(page.state().overlay, Some(Overlay::EventDetail(0)));
    assert!(page.state().doc.is_focused(view));

    page.advance(150);
    let element = page.state().doc.get(view).unwrap();
    assert_eq!(element.style.transform, None);
    assert_eq!(element.ripples.len(), 1);

    page.advance(450);
    assert!(page.state().doc.get(view).unwrap().ripples.is_empty());

    page.send_key(Key::Esc);
    assert_eq!(page.state().overlay, None);
}

#[test]
fn test_rapid_clicks_overlap_ripples() {
    let mut page = TestPage::new(three_events());
    let view = page.query(Selector::ViewEventButton).unwrap();

    page.click_element(view);
    page.send_key(Key::Esc);
    page.click_element(view);

    assert_eq!(page.state().doc.get(view).unwrap().ripples.len(), 2);
}

#[test]
fn test_ngo_button_notifies_loading() {
    let mut page = TestPage::new(three_events());
    let ngo = page.query_all(Selector::ViewNgoButton)[2];

    page.click_element(ngo);

    assert_eq!(
        page.notifier().calls(),
        &[(LOADING_NGO_MESSAGE.to_string(), Severity::Info)]
    );
    assert_eq!(page.state().overlay, Some(Overlay::NgoProfile(2)));
}

#[test]
fn test_keyboard_activation_of_card_button() {
    let mut page = TestPage::new(three_events());
    // input, search button, filter, first view button
    page.send_keys(&[Key::Tab, Key::Tab, Key::Tab]);
    let view = page.query(Selector::ViewEventButton).unwrap();
    assert!(page.state().doc.is_focused(view));

    page.send_key(Key::Enter);
    assert_eq!(page.state().overlay, Some(Overlay::EventDetail(0)));
    assert_eq!(page.state().doc.get(view).unwrap().ripples.len(), 1);
}

#[test]
fn test_click_on_card_body_opens_details() {
    let mut page = TestPage::new(three_events());
    let cards = page.query_all(Selector::EventCard);
    let rect = page.state().doc.get(cards[1]).unwrap().rect.unwrap();

    // Second text row of the card, clear of badge and buttons
    page.click(rect.x + 2, rect.y + 2);

    assert_eq!(page.state().overlay, Some(Overlay::EventDetail(1)));
}

#[test]
fn test_broken_image_replaced_by_placeholder() {
    let mut event = sample_event(1, "Beach Cleanup", EventStatus::Published);
    event.image = Some("/nonexistent/beach.png".into());
    let page = TestPage::new(vec![event]);

    assert!(page.query(Selector::EventImage).is_none());
    let placeholder = page
        .state()
        .doc
        .ids()
        .find(|id| page.state().doc.get(*id).unwrap().kind == ElementKind::ImagePlaceholder)
        .unwrap();
    let element = page.state().doc.get(placeholder).unwrap();
    assert_eq!(element.label, PLACEHOLDER_LABEL);
    assert!(element.has_class("event-image-placeholder"));
    assert!(element.rect.is_some());
}

#[test]
fn test_loaded_image_fades_in() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beach.png");
    std::fs::write(&path, b"png").unwrap();

    let mut event = sample_event(1, "Beach Cleanup", EventStatus::Published);
    event.image = Some(path);
    let page = TestPage::new(vec![event]);

    let image = page.query(Selector::EventImage).unwrap();
    assert_eq!(page.state().doc.get(image).unwrap().style.opacity, Some(1.0));
}

#[test]
fn test_help_toggle() {
    let mut page = TestPage::with_settings(three_events(), without_autofocus());
    assert_eq!(page.state().overlay, None);

    page.send_key(Key::Char('?'));
    assert_eq!(page.state().overlay, Some(Overlay::Help));

    // Page keys are swallowed while the popup is open
    page.send_key(Key::Char('j'));
    assert_eq!(page.state().scroll, 0);

    page.send_key(Key::Char('?'));
    assert_eq!(page.state().overlay, None);
}

#[test]
fn test_slash_is_never_typed_into_search() {
    let mut page = TestPage::new(three_events());
    let input = page.query(Selector::SearchInput).unwrap();

    page.type_text("a");
    page.send_key(Key::Char('/'));
    page.type_text("b");

    assert_eq!(page.state().doc.get(input).unwrap().value, "ab");
    assert!(page.state().doc.is_focused(input));
}

#[test]
fn test_slash_from_card_button_returns_to_search() {
    let mut page = TestPage::new(three_events());
    let input = page.query(Selector::SearchInput).unwrap();
    let view = page.query(Selector::ViewEventButton).unwrap();

    page.send_keys(&[Key::Tab, Key::Tab, Key::Tab]);
    assert!(page.state().doc.is_focused(view));

    page.send_key(Key::Char('/'));
    assert!(page.state().doc.is_focused(input));
    assert_eq!(page.state().doc.get(input).unwrap().value, "");
}

#[test]
fn test_image_click_opens_modal_and_closes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beach.png");
    std::fs::write(&path, b"png").unwrap();

    let mut event = sample_event(1, "Beach Cleanup", EventStatus::Published);
    event.image = Some(path);
    let mut page = TestPage::new(vec![event]);
    let image = page.query(Selector::EventImage).unwrap();

    page.click_element(image);
    assert_eq!(page.state().overlay, Some(Overlay::Image(0)));

    page.send_key(Key::Esc);
    assert_eq!(page.state().overlay, None);

    page.click_element(image);
    assert_eq!(page.state().overlay, Some(Overlay::Image(0)));
    page.click(0, 0);
    assert_eq!(page.state().overlay, None);
}

#[test]
fn test_scroll_top_control_appears_and_returns_to_top() {
    let mut page = TestPage::with_settings(many_events(8), without_autofocus());
    let scroll_top = page.query(Selector::ScrollTopButton).unwrap();
    assert!(page.state().doc.get(scroll_top).unwrap().rect.is_none());

    page.send_keys(&[Key::Char('j'), Key::Char('j')]);
    assert_eq!(page.state().scroll, 2);
    assert!(page.state().doc.get(scroll_top).unwrap().rect.is_some());

    page.click_element(scroll_top);
    assert_eq!(page.state().scroll, 0);
    assert!(page.state().doc.get(scroll_top).unwrap().rect.is_none());

    page.send_key(Key::PageDown);
    page.send_key(Key::Char('g'));
    assert_eq!(page.state().scroll, 0);
}
