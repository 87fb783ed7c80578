use crate::behaviors::PageContext;
use crate::config::Settings;
use crate::dom::{DomEvent, ElementId, ElementKind, EventKind};
use crate::events::PageCommand;
use crate::input::{Key, MouseAction, MouseInput};
use crate::notify::Notifier;
use crate::state::{Overlay, PageState};
use crate::timers::{TimerAction, TimerQueue};

/// Side-effect channels available while executing a command
pub struct Host<'a> {
    pub timers: &'a mut TimerQueue,
    pub notifier: &'a mut dyn Notifier,
    pub settings: &'a Settings,
}

/// Execute a command against the page
pub fn execute_command(command: PageCommand, state: &mut PageState, host: &mut Host<'_>) {
    match command {
        PageCommand::KeyToFocused(event) => {
            if let Some(target) = state.doc.focused() {
                dispatch_key(state, host, target, event.key);
            }
        }
        PageCommand::FocusSearch => {
            if let Some(input) = state.search_input() {
                state.doc.focus(input);
                run_queue(state, host, None);
            }
        }
        PageCommand::FocusNext => {
            focus_step(state, 1);
            run_queue(state, host, None);
        }
        PageCommand::FocusPrevious => {
            focus_step(state, -1);
            run_queue(state, host, None);
        }
        PageCommand::ScrollDown => scroll_by(state, 1),
        PageCommand::ScrollUp => scroll_by(state, -1),
        PageCommand::PageDown => scroll_by(state, state.visible_cards.max(1) as isize),
        PageCommand::PageUp => scroll_by(state, -(state.visible_cards.max(1) as isize)),
        PageCommand::ScrollToTop => state.scroll = 0,
        PageCommand::CloseOverlay => state.overlay = None,
        PageCommand::ToggleHelp => {
            state.overlay = match state.overlay {
                Some(Overlay::Help) => None,
                _ => Some(Overlay::Help),
            };
        }
        PageCommand::Quit => {
            tracing::info!("Quit requested");
            state.should_quit = true;
        }
    }
}

/// Deliver a key as keydown, then keypress unless keydown was prevented
pub fn dispatch_key(state: &mut PageState, host: &mut Host<'_>, target: ElementId, key: Key) {
    let prevented = run_queue(state, host, Some(DomEvent::new(target, EventKind::KeyDown(key))));
    if !prevented && key.is_press_key() {
        run_queue(state, host, Some(DomEvent::new(target, EventKind::KeyPress(key))));
    }
}

/// Dispatch `first` (if any) and then every event queued by handlers and
/// default actions until the document is quiet.
///
/// Returns whether `first` had its default action prevented.
pub fn run_queue(state: &mut PageState, host: &mut Host<'_>, first: Option<DomEvent>) -> bool {
    let mut pending_first = first;
    let mut first_prevented = false;
    let mut is_first = pending_first.is_some();

    while let Some(mut event) = pending_first.take().or_else(|| state.doc.take_queued()) {
        {
            let mut cx = PageContext::new(&mut state.doc, &mut *host.timers, &mut *host.notifier);
            state.behaviors.handle_event(&mut cx, &mut event);
        }

        if is_first {
            first_prevented = event.default_prevented();
            is_first = false;
        }
        if !event.default_prevented() {
            default_action(state, host, &event);
        }
    }

    first_prevented
}

/// Deliver fired timers to the behaviours. `CompleteSubmit` is left to the
/// caller, which owns the listing.
pub fn run_timers(state: &mut PageState, host: &mut Host<'_>, actions: &[TimerAction]) {
    for action in actions {
        if *action == TimerAction::CompleteSubmit {
            continue;
        }
        let mut cx = PageContext::new(&mut state.doc, &mut *host.timers, &mut *host.notifier);
        state.behaviors.handle_timer(&mut cx, *action);
    }
    run_queue(state, host, None);
}

/// What the page does for an event nobody prevented
fn default_action(state: &mut PageState, host: &mut Host<'_>, event: &DomEvent) {
    let Some(element) = state.doc.get(event.target) else {
        return;
    };
    let kind = element.kind;
    let event_index = element.event_index;
    let target = event.target;

    match event.kind {
        EventKind::KeyPress(Key::Char(c)) if kind == ElementKind::SearchInput => {
            if let Some(input) = state.doc.get_mut(target) {
                input.value.push(c);
            }
            state.doc.queue(DomEvent::new(target, EventKind::Input));
        }
        EventKind::KeyDown(Key::Backspace) if kind == ElementKind::SearchInput => {
            let removed = state
                .doc
                .get_mut(target)
                .and_then(|input| input.value.pop());
            if removed.is_some() {
                state.doc.queue(DomEvent::new(target, EventKind::Input));
            }
        }
        EventKind::KeyPress(Key::Enter) if kind == ElementKind::SearchInput => {
            submit(state, host);
        }
        EventKind::KeyDown(Key::Tab) => focus_step(state, 1),
        EventKind::KeyDown(Key::BackTab) => focus_step(state, -1),
        EventKind::KeyDown(Key::Enter | Key::Char(' ')) if kind.is_button() => {
            state.doc.click(target);
        }
        EventKind::KeyDown(Key::Left | Key::Up) if kind == ElementKind::FilterSelect => {
            change_selection(state, target, -1);
        }
        EventKind::KeyDown(Key::Right | Key::Down) if kind == ElementKind::FilterSelect => {
            change_selection(state, target, 1);
        }
        EventKind::Click { .. } => match (kind, event_index) {
            (ElementKind::SearchButton, _) => submit(state, host),
            (ElementKind::ViewEventButton, Some(index)) => {
                tracing::info!("Opening event {}", index);
                state.overlay = Some(Overlay::EventDetail(index));
            }
            (ElementKind::ViewNgoButton, Some(index)) => {
                state.overlay = Some(Overlay::NgoProfile(index));
            }
            (ElementKind::EventImage, Some(index)) => {
                state.overlay = Some(Overlay::Image(index));
            }
            (ElementKind::ScrollTopButton, _) => state.scroll = 0,
            _ => {}
        },
        _ => {}
    }
}

/// Start a form submission; the page reloads when the round trip completes
fn submit(state: &mut PageState, host: &mut Host<'_>) {
    if state.is_submitting() {
        return;
    }

    let query = state.form_query();
    tracing::info!(query = %query.text, status = ?query.status, "Submitting search");
    state.pending_submit = Some(query);
    host.timers
        .schedule(host.settings.submit_latency(), TimerAction::CompleteSubmit);
}

fn focus_step(state: &mut PageState, delta: isize) {
    let focusables = state.doc.focusables();
    if focusables.is_empty() {
        return;
    }

    let len = focusables.len() as isize;
    let next = match state
        .doc
        .focused()
        .and_then(|f| focusables.iter().position(|id| *id == f))
    {
        Some(current) => (current as isize + delta).rem_euclid(len),
        None if delta >= 0 => 0,
        None => len - 1,
    };
    state.doc.focus(focusables[next as usize]);
}

fn change_selection(state: &mut PageState, select: ElementId, delta: isize) {
    let Some(element) = state.doc.get_mut(select) else {
        return;
    };
    if element.options.is_empty() {
        return;
    }

    let last = element.options.len() as isize - 1;
    let next = (element.selected as isize + delta).clamp(0, last) as usize;
    if next != element.selected {
        element.selected = next;
        state.doc.queue(DomEvent::new(select, EventKind::Change));
    }
}

fn scroll_by(state: &mut PageState, delta: isize) {
    let max = state.events.len().saturating_sub(1) as isize;
    state.scroll = (state.scroll as isize + delta).clamp(0, max.max(0)) as usize;
}

/// Route pointer input: focus and click on press, enter/leave on motion
pub fn handle_mouse(state: &mut PageState, host: &mut Host<'_>, input: MouseInput) {
    match input.action {
        MouseAction::Click => {
            if state.overlay.take().is_some() {
                return;
            }

            let hit = state.doc.hit_test(input.position);
            let hit_element = hit.and_then(|id| state.doc.get(id).map(|e| (id, e.kind, e.disabled)));

            match hit_element {
                Some((id, kind, false)) if kind.is_focusable() => state.doc.focus(id),
                _ => {
                    if let Some(focused) = state.doc.focused() {
                        state.doc.blur(focused);
                    }
                }
            }
            if let Some((id, _, false)) = hit_element {
                state.doc.queue(DomEvent::new(
                    id,
                    EventKind::Click {
                        pointer: Some(input.position),
                    },
                ));
            }
            run_queue(state, host, None);
        }
        MouseAction::Move => {
            let hit = state.doc.hit_test(input.position);
            update_hover(state, host, hit);
        }
        MouseAction::ScrollDown => scroll_by(state, 1),
        MouseAction::ScrollUp => scroll_by(state, -1),
    }
}

/// Fire `mouseleave` on elements the pointer left (innermost first) and
/// `mouseenter` on the ones it entered (outermost first)
pub fn update_hover(state: &mut PageState, host: &mut Host<'_>, hit: Option<ElementId>) {
    let path = hit.map(|id| state.doc.path(id)).unwrap_or_default();
    let previous = std::mem::replace(&mut state.hovered, path.clone());

    for id in previous.iter().filter(|id| !path.contains(id)) {
        state.doc.queue(DomEvent::new(*id, EventKind::MouseLeave));
    }
    for id in path.iter().rev().filter(|id| !previous.contains(id)) {
        state.doc.queue(DomEvent::new(*id, EventKind::MouseEnter));
    }
    run_queue(state, host, None);
}
