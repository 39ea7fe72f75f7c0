//! Date-range presets and picker synchronization for the business dashboard.
//!
//! - `preset`: the named preset catalog, each preset a pure function of "now"
//! - `matcher`: which preset (or "custom") the current range corresponds to
//! - `picker`: lifecycle and inward/outward sync for an external calendar widget
//! - `selection`: the selector's record of requested ranges
//! - `stats`: stats endpoint queries and stale-response filtering

pub mod date_range;
pub mod dates;
pub mod format;
pub mod locale;
pub mod matcher;
pub mod picker;
pub mod preset;
pub mod selection;
pub mod stats;
pub mod value_source;

pub use date_range::DateRange;
pub use locale::Locale;
pub use matcher::{match_active_preset, ActivePreset, CUSTOM_KEY};
pub use preset::{CatalogError, Preset, PresetCatalog, PresetKind};
pub use selection::RangeSelection;

use chrono::{Local, NaiveDateTime};

/// Local wall-clock time, the "now" the UI hands to the catalog.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
