//! The selector's side of a range change.
//!
//! Chip clicks and calendar selections both end up in
//! [`RangeSelection::request`], which records the change (self-managed
//! mode only) and yields the value to report to the owner. Every request
//! bumps a revision so the calendar is re-checked against the owner's range
//! on the next render even when the owner kept its old value.

use crate::date_range::DateRange;
use crate::preset::{CatalogError, PresetCatalog};
use crate::value_source::ValueSource;
use chrono::NaiveDateTime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeSelection {
    source: ValueSource<DateRange>,
    revision: u64,
}

impl RangeSelection {
    /// Owned when `owned` is set, else self-managed from the catalog default.
    pub fn new(owned: Option<DateRange>, catalog: &PresetCatalog, now: NaiveDateTime) -> Self {
        Self {
            source: ValueSource::new(owned, || catalog.default_range(now)),
            revision: 0,
        }
    }

    pub fn is_owned(&self) -> bool {
        self.source.is_owned()
    }

    pub fn current(&self, owner: Option<&DateRange>) -> DateRange {
        self.source.current(owner)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Record a user request and return the range to hand to `on_change`.
    pub fn request(&mut self, range: DateRange) -> DateRange {
        self.revision += 1;
        self.source.apply(range)
    }

    /// A chip click: the preset's range computed at `now`.
    pub fn choose_preset(
        &mut self,
        catalog: &PresetCatalog,
        key: &str,
        now: NaiveDateTime,
    ) -> Result<DateRange, CatalogError> {
        let range = catalog.compute(key, now)?;
        Ok(self.request(range))
    }
}
