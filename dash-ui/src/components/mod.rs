//! Reusable Dioxus RSX components for the dashboard.

mod date_range_selector;
mod error_display;
mod loading_spinner;
mod preset_chips;
mod section_header;
mod stat_card;

pub use date_range_selector::DateRangeSelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use preset_chips::{PresetChip, PresetChips};
pub use section_header::SectionHeader;
pub use stat_card::StatCard;
