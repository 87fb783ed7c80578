pub mod empty_state;
pub mod event_card;
pub mod event_detail;
pub mod filter_select;
pub mod help_bar;
pub mod help_popup;
pub mod loading_indicator;
pub mod notifications;
pub mod popup;
pub mod scroll_top;
pub mod search_box;
pub mod tooltip;
