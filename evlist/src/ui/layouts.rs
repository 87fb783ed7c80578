//! Layout of the event list page.
//!
//! [`page_layout`] is pure. [`layout_page`] writes the resulting areas into
//! the document so hit testing and the intersection observer see what was
//! drawn.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    CARD_HEIGHT, CARD_IMAGE_WIDTH, FILTER_WIDTH, HELP_BAR_HEIGHT, SCREEN_MARGIN,
    SEARCH_BUTTON_WIDTH, SEARCH_ROW_HEIGHT, TITLE_HEIGHT,
};
use crate::dom::{Document, ElementId, ElementKind, ElementLookup, Selector};
use crate::page::{SCROLL_TOP_AFTER, SCROLL_TOP_LABEL};
use crate::state::PageState;

/// Areas of the page chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAreas {
    pub title: Rect,
    pub count_badge: Rect,
    pub loading: Rect,
    /// Search box at rest, one row below the top of the search row
    pub search_box: Rect,
    pub search_input: Rect,
    pub search_button: Rect,
    pub filter: Rect,
    pub content: Rect,
    pub help: Rect,
}

/// Areas inside one fully visible card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardAreas {
    pub image: Option<Rect>,
    pub content: Rect,
    pub badge: Rect,
    pub view_button: Rect,
    pub ngo_button: Rect,
}

pub fn page_layout(area: Rect) -> PageAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(SEARCH_ROW_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(20),
            Constraint::Length(2),
        ])
        .split(rows[0]);

    let search_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(FILTER_WIDTH)])
        .split(rows[1]);
    let search_box = resting(search_row[0]);

    let search_parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(SEARCH_BUTTON_WIDTH)])
        .split(search_box);

    PageAreas {
        title: header[0],
        count_badge: header[1],
        loading: header[2],
        search_box,
        search_input: search_parts[0],
        search_button: search_parts[1],
        filter: resting(search_row[1]),
        content: rows[2],
        help: rows[3],
    }
}

/// Drop the spare top row a control rises into when lifted
fn resting(area: Rect) -> Rect {
    Rect {
        y: area.y.saturating_add(1),
        height: area.height.saturating_sub(1),
        ..area
    }
}

/// Move a control up by the lift row
pub fn lifted(area: Rect) -> Rect {
    Rect {
        y: area.y.saturating_sub(1),
        ..area
    }
}

/// Split a card's area, borders excluded
pub fn card_layout(card: Rect, has_image: bool, badge_width: u16) -> CardAreas {
    let inner = Rect {
        x: card.x.saturating_add(1),
        y: card.y.saturating_add(1),
        width: card.width.saturating_sub(2),
        height: card.height.saturating_sub(2),
    };

    let (image, content) = if has_image {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CARD_IMAGE_WIDTH), Constraint::Min(10)])
            .split(inner);
        (Some(columns[0]), columns[1])
    } else {
        (None, inner)
    };

    let badge_width = badge_width.min(content.width);
    let badge = Rect::new(
        content.right().saturating_sub(badge_width),
        content.y,
        badge_width,
        1,
    );

    let button_row = Rect {
        y: content.bottom().saturating_sub(1),
        height: 1,
        ..content
    };
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Length(1),
            Constraint::Length(20),
            Constraint::Min(0),
        ])
        .split(button_row);

    CardAreas {
        image,
        content,
        badge,
        view_button: buttons[0],
        ngo_button: buttons[2],
    }
}

/// Lay the page out into the document and return every card's visible ratio
pub fn layout_page(state: &mut PageState, area: Rect) -> Vec<(ElementId, f32)> {
    let areas = page_layout(area);
    let doc = &mut state.doc;
    doc.clear_layout();

    let input = doc.query(Selector::SearchInput);
    let chrome = [
        (input.and_then(|i| doc.parent(i)), areas.search_box),
        (input, areas.search_input),
        (doc.query(Selector::SearchButton), areas.search_button),
        (doc.query(Selector::FilterSelect), areas.filter),
        (
            doc.ids()
                .find(|id| doc.get(*id).is_some_and(|e| e.kind == ElementKind::CountBadge)),
            areas.count_badge,
        ),
    ];
    for (id, rect) in chrome {
        set_rect(doc, id, rect);
    }

    let cards = doc.query_all(Selector::EventCard);
    let capacity = (areas.content.height / CARD_HEIGHT).max(1) as usize;
    state.visible_cards = capacity;

    // Keep the card holding focus on screen
    let focused_card = doc
        .focused()
        .and_then(|f| doc.closest(f, ElementKind::EventCard))
        .and_then(|card| cards.iter().position(|c| *c == card));
    if let Some(index) = focused_card {
        if index < state.scroll {
            state.scroll = index;
        } else if index >= state.scroll + capacity {
            state.scroll = index + 1 - capacity;
        }
    }
    state.scroll = state.scroll.min(cards.len().saturating_sub(1));

    if state.scroll >= SCROLL_TOP_AFTER {
        let scroll_top = doc.query(Selector::ScrollTopButton);
        set_rect(doc, scroll_top, scroll_top_area(areas.help));
    }

    let content = areas.content;
    let mut ratios = Vec::with_capacity(cards.len());
    for (index, card) in cards.iter().enumerate() {
        let Some(offset) = index.checked_sub(state.scroll) else {
            ratios.push((*card, 0.0));
            continue;
        };

        let top = content.y as usize + offset * CARD_HEIGHT as usize;
        if top >= content.bottom() as usize {
            ratios.push((*card, 0.0));
            continue;
        }

        let top = top as u16;
        let height = CARD_HEIGHT.min(content.bottom() - top);
        let rect = Rect::new(content.x, top, content.width, height);
        set_rect(doc, Some(*card), rect);
        ratios.push((*card, height as f32 / CARD_HEIGHT as f32));

        if height == CARD_HEIGHT {
            layout_card(doc, *card, rect);
        }
    }

    ratios
}

fn layout_card(doc: &mut Document, card: ElementId, rect: Rect) {
    let image = doc.get(card).and_then(|e| {
        e.children.iter().copied().find(|c| {
            doc.get(*c).is_some_and(|child| {
                matches!(
                    child.kind,
                    ElementKind::EventImage | ElementKind::ImagePlaceholder
                )
            })
        })
    });
    let badge = doc.query_within(card, Selector::StatusBadge);
    let badge_width = badge
        .and_then(|b| doc.get(b))
        .map(|e| e.label.chars().count() as u16 + 2)
        .unwrap_or(0);

    let parts = card_layout(rect, image.is_some(), badge_width);
    let content = doc.get(card).and_then(|e| {
        e.children
            .iter()
            .copied()
            .find(|c| doc.get(*c).is_some_and(|child| child.kind == ElementKind::CardContent))
    });

    if let Some(image_rect) = parts.image {
        set_rect(doc, image, image_rect);
    }
    let view = doc.query_within(card, Selector::ViewEventButton);
    let ngo = doc.query_within(card, Selector::ViewNgoButton);
    set_rect(doc, content, parts.content);
    set_rect(doc, badge, parts.badge);
    set_rect(doc, view, parts.view_button);
    set_rect(doc, ngo, parts.ngo_button);
}

/// Scroll-to-top control at the right end of the help bar
pub fn scroll_top_area(help: Rect) -> Rect {
    let width = (SCROLL_TOP_LABEL.chars().count() as u16 + 2).min(help.width.saturating_sub(2));
    Rect::new(
        help.right().saturating_sub(width + 1),
        help.y.saturating_add(1),
        width,
        1,
    )
}

fn set_rect(doc: &mut Document, id: Option<ElementId>, rect: Rect) {
    if let Some(element) = id.and_then(|id| doc.get_mut(id)) {
        element.rect = Some(rect);
    }
}

/// Create a centered popup rectangle.
///
/// # Arguments
/// * `percent_x` - Width as percentage of parent (0-100)
/// * `percent_y` - Height as percentage of parent (0-100)
/// * `area` - The parent area to center within
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Standard popup sizes
pub mod popup_sizes {
    /// Medium popup (60% x 50%) - for event and organisation details
    pub const MEDIUM: (u16, u16) = (60, 50);

    /// Large popup (80% x 80%) - for help screens
    pub const LARGE: (u16, u16) = (80, 80);
}
