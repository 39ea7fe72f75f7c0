//! Which preset, if any, produced the range currently on screen.

use crate::date_range::DateRange;
use crate::preset::{Preset, PresetCatalog};
use chrono::NaiveDateTime;

/// Key reported when no preset matches.
pub const CUSTOM_KEY: &str = "custom";

/// Derived on every render from the current range; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivePreset<'a> {
    Preset(&'a Preset),
    Custom,
}

impl<'a> ActivePreset<'a> {
    pub fn key(&self) -> &'a str {
        match self {
            ActivePreset::Preset(preset) => preset.key,
            ActivePreset::Custom => CUSTOM_KEY,
        }
    }

    pub fn label(&self) -> &'a str {
        match self {
            ActivePreset::Preset(preset) => preset.label,
            ActivePreset::Custom => "Custom",
        }
    }

    pub fn is(&self, key: &str) -> bool {
        self.key() == key
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, ActivePreset::Custom)
    }
}

/// First preset in catalog order whose range at `now` covers the same
/// calendar days as `range`. Time of day is ignored. Reversed ranges
/// never match and fall through to `Custom`.
pub fn match_active_preset<'a>(
    range: &DateRange,
    catalog: &'a PresetCatalog,
    now: NaiveDateTime,
) -> ActivePreset<'a> {
    catalog
        .presets()
        .iter()
        .find(|preset| preset.compute(now, catalog.locale()).same_days(range))
        .map(ActivePreset::Preset)
        .unwrap_or(ActivePreset::Custom)
}
