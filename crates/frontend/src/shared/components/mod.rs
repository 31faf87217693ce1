pub mod date_range_picker;
pub mod empty_state;
pub mod lazy_tab;
pub mod loading;
pub mod page_header;
pub mod stat_card;
pub mod status_tag;
