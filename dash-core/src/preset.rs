//! Named date-range presets.
//!
//! A preset is a pure function of "now" and the locale: it reads no clock
//! and holds no state, so the same `now` always yields the same range.
//! Catalog order is significant; it is the chip order in the selector and
//! the tie-break when two presets produce the same range.

use crate::date_range::DateRange;
use crate::dates::{end_of_period, first_of_month, first_of_period, last_of_month, start_of_week};
use crate::locale::Locale;
use crate::matcher::{match_active_preset, ActivePreset};
use chrono::{Days, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetKind {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    Last7Days,
    Last30Days,
    ThisMonth,
    LastMonth,
    ThisQuarter,
    ThisSemester,
    ThisYear,
    LastYear,
}

impl PresetKind {
    pub const ALL: [PresetKind; 12] = [
        PresetKind::Today,
        PresetKind::Yesterday,
        PresetKind::ThisWeek,
        PresetKind::LastWeek,
        PresetKind::Last7Days,
        PresetKind::Last30Days,
        PresetKind::ThisMonth,
        PresetKind::LastMonth,
        PresetKind::ThisQuarter,
        PresetKind::ThisSemester,
        PresetKind::ThisYear,
        PresetKind::LastYear,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PresetKind::Today => "today",
            PresetKind::Yesterday => "yesterday",
            PresetKind::ThisWeek => "this_week",
            PresetKind::LastWeek => "last_week",
            PresetKind::Last7Days => "last_7_days",
            PresetKind::Last30Days => "last_30_days",
            PresetKind::ThisMonth => "this_month",
            PresetKind::LastMonth => "last_month",
            PresetKind::ThisQuarter => "this_quarter",
            PresetKind::ThisSemester => "this_semester",
            PresetKind::ThisYear => "this_year",
            PresetKind::LastYear => "last_year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PresetKind::Today => "Today",
            PresetKind::Yesterday => "Yesterday",
            PresetKind::ThisWeek => "This Week",
            PresetKind::LastWeek => "Last Week",
            PresetKind::Last7Days => "Last 7 Days",
            PresetKind::Last30Days => "Last 30 Days",
            PresetKind::ThisMonth => "This Month",
            PresetKind::LastMonth => "Last Month",
            PresetKind::ThisQuarter => "This Quarter",
            PresetKind::ThisSemester => "This Semester",
            PresetKind::ThisYear => "This Year",
            PresetKind::LastYear => "Last Year",
        }
    }

    /// First and last calendar day of the preset relative to `today`.
    pub fn bounds(self, today: NaiveDate, locale: &Locale) -> (NaiveDate, NaiveDate) {
        match self {
            PresetKind::Today => (today, today),
            PresetKind::Yesterday => {
                let day = today - Days::new(1);
                (day, day)
            }
            PresetKind::ThisWeek => {
                let start = start_of_week(today, locale.week_start);
                (start, start + Days::new(6))
            }
            PresetKind::LastWeek => {
                let start = start_of_week(today, locale.week_start) - Days::new(7);
                (start, start + Days::new(6))
            }
            PresetKind::Last7Days => (today - Days::new(6), today),
            PresetKind::Last30Days => (today - Days::new(29), today),
            PresetKind::ThisMonth => (first_of_month(today), last_of_month(today)),
            PresetKind::LastMonth => {
                let start = first_of_month(today) - Months::new(1);
                (start, last_of_month(start))
            }
            PresetKind::ThisQuarter => period_bounds(today, 3),
            PresetKind::ThisSemester => period_bounds(today, 6),
            PresetKind::ThisYear => period_bounds(today, 12),
            PresetKind::LastYear => {
                let start = first_of_period(today, 12) - Months::new(12);
                (start, end_of_period(start, 12))
            }
        }
    }
}

fn period_bounds(today: NaiveDate, months: u32) -> (NaiveDate, NaiveDate) {
    let start = first_of_period(today, months);
    (start, end_of_period(start, months))
}

impl std::str::FromStr for PresetKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| CatalogError::UnknownKey(s.to_string()))
    }
}

/// A named preset as shown on a chip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preset {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: PresetKind,
}

impl Preset {
    pub fn new(key: &'static str, label: &'static str, kind: PresetKind) -> Self {
        Self { key, label, kind }
    }

    /// Whole-day range for this preset at `now`.
    pub fn compute(&self, now: NaiveDateTime, locale: &Locale) -> DateRange {
        let (start, end) = self.kind.bounds(now.date(), locale);
        DateRange::from_dates(start, end)
    }
}

impl From<PresetKind> for Preset {
    fn from(kind: PresetKind) -> Self {
        Self::new(kind.key(), kind.label(), kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateKey(String),
    UnknownKey(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateKey(key) => write!(f, "duplicate preset key: {}", key),
            CatalogError::UnknownKey(key) => write!(f, "unknown preset key: {}", key),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Ordered set of presets sharing one locale.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetCatalog {
    locale: Locale,
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Chip order used by the dashboard header.
    pub const STANDARD: [PresetKind; 9] = [
        PresetKind::Today,
        PresetKind::Yesterday,
        PresetKind::ThisWeek,
        PresetKind::LastWeek,
        PresetKind::ThisMonth,
        PresetKind::LastMonth,
        PresetKind::ThisQuarter,
        PresetKind::ThisSemester,
        PresetKind::ThisYear,
    ];

    pub fn standard(locale: Locale) -> Self {
        Self {
            locale,
            presets: Self::STANDARD.into_iter().map(Preset::from).collect(),
        }
    }

    /// Build a catalog from an ordered list; keys must be unique.
    pub fn new(locale: Locale, presets: Vec<Preset>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for preset in &presets {
            if !seen.insert(preset.key) {
                return Err(CatalogError::DuplicateKey(preset.key.to_string()));
            }
        }
        Ok(Self { locale, presets })
    }

    pub fn from_kinds(locale: Locale, kinds: &[PresetKind]) -> Result<Self, CatalogError> {
        Self::new(locale, kinds.iter().copied().map(Preset::from).collect())
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn get(&self, key: &str) -> Result<&Preset, CatalogError> {
        self.presets
            .iter()
            .find(|preset| preset.key == key)
            .ok_or_else(|| CatalogError::UnknownKey(key.to_string()))
    }

    pub fn compute(&self, key: &str, now: NaiveDateTime) -> Result<DateRange, CatalogError> {
        Ok(self.get(key)?.compute(now, &self.locale))
    }

    /// Every preset with its range at `now`, in catalog order.
    pub fn ranges(&self, now: NaiveDateTime) -> Vec<(&Preset, DateRange)> {
        self.presets
            .iter()
            .map(|preset| (preset, preset.compute(now, &self.locale)))
            .collect()
    }

    /// Range a fresh dashboard opens with: this month when the catalog has it,
    /// otherwise the first preset, otherwise today.
    pub fn default_range(&self, now: NaiveDateTime) -> DateRange {
        self.presets
            .iter()
            .find(|preset| preset.kind == PresetKind::ThisMonth)
            .or_else(|| self.presets.first())
            .map(|preset| preset.compute(now, &self.locale))
            .unwrap_or_else(|| DateRange::day(now.date()))
    }

    pub fn active(&self, range: &DateRange, now: NaiveDateTime) -> ActivePreset<'_> {
        match_active_preset(range, self, now)
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::standard(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_range::DateRange;
    use chrono::{NaiveDate, Weekday};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        ymd(y, m, d).and_hms_opt(14, 25, 3).unwrap()
    }

    fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange::from_dates(start, end)
    }

    #[test]
    fn test_every_kind_is_ordered_for_three_years() {
        let locales = [Locale::en_us(), Locale::european()];
        let days = DateRange::from_dates(ymd(2023, 1, 1), ymd(2025, 12, 31)).days();
        for day in days {
            let now = day.and_hms_opt(8, 0, 0).unwrap();
            for locale in &locales {
                for kind in PresetKind::ALL {
                    let computed = Preset::from(kind).compute(now, locale);
                    assert!(computed.is_ordered(), "{:?} on {}", kind, day);
                    assert_eq!(computed.start.time(), chrono::NaiveTime::MIN);
                }
            }
        }
    }

    #[test]
    fn test_compute_is_idempotent_for_same_now() {
        let catalog = PresetCatalog::default();
        let now = at(2024, 8, 14);
        assert_eq!(catalog.ranges(now), catalog.ranges(now));
    }

    #[test]
    fn test_day_presets() {
        let locale = Locale::default();
        let now = at(2024, 3, 1);
        assert_eq!(
            Preset::from(PresetKind::Today).compute(now, &locale),
            range(ymd(2024, 3, 1), ymd(2024, 3, 1))
        );
        assert_eq!(
            Preset::from(PresetKind::Yesterday).compute(now, &locale),
            range(ymd(2024, 2, 29), ymd(2024, 2, 29))
        );
        assert_eq!(
            Preset::from(PresetKind::Last30Days).compute(now, &locale),
            range(ymd(2024, 2, 1), ymd(2024, 3, 1))
        );
    }

    #[test]
    fn test_week_presets_follow_locale() {
        // 2024-01-03 is a Wednesday
        let now = at(2024, 1, 3);
        let monday = Locale::default().with_week_start(Weekday::Mon);
        let sunday = Locale::default().with_week_start(Weekday::Sun);
        assert_eq!(
            Preset::from(PresetKind::ThisWeek).compute(now, &monday),
            range(ymd(2024, 1, 1), ymd(2024, 1, 7))
        );
        assert_eq!(
            Preset::from(PresetKind::ThisWeek).compute(now, &sunday),
            range(ymd(2023, 12, 31), ymd(2024, 1, 6))
        );
        assert_eq!(
            Preset::from(PresetKind::LastWeek).compute(now, &monday),
            range(ymd(2023, 12, 25), ymd(2023, 12, 31))
        );
    }

    #[test]
    fn test_month_presets_across_year_boundary() {
        let locale = Locale::default();
        let now = at(2024, 1, 31);
        assert_eq!(
            Preset::from(PresetKind::ThisMonth).compute(now, &locale),
            range(ymd(2024, 1, 1), ymd(2024, 1, 31))
        );
        assert_eq!(
            Preset::from(PresetKind::LastMonth).compute(now, &locale),
            range(ymd(2023, 12, 1), ymd(2023, 12, 31))
        );
        let march = at(2024, 3, 31);
        assert_eq!(
            Preset::from(PresetKind::LastMonth).compute(march, &locale),
            range(ymd(2024, 2, 1), ymd(2024, 2, 29))
        );
    }

    #[test]
    fn test_semester_in_leap_year_ends_on_june_30() {
        let locale = Locale::default();
        let semester = Preset::from(PresetKind::ThisSemester);
        for now in [at(2024, 1, 1), at(2024, 2, 29), at(2024, 6, 30)] {
            assert_eq!(
                semester.compute(now, &locale),
                range(ymd(2024, 1, 1), ymd(2024, 6, 30))
            );
        }
        assert_eq!(
            semester.compute(at(2023, 12, 31), &locale),
            range(ymd(2023, 7, 1), ymd(2023, 12, 31))
        );
        assert_eq!(
            semester.compute(at(2024, 7, 1), &locale),
            range(ymd(2024, 7, 1), ymd(2024, 12, 31))
        );
    }

    #[test]
    fn test_quarter_and_year_presets() {
        let locale = Locale::default();
        let now = at(2024, 11, 5);
        assert_eq!(
            Preset::from(PresetKind::ThisQuarter).compute(now, &locale),
            range(ymd(2024, 10, 1), ymd(2024, 12, 31))
        );
        assert_eq!(
            Preset::from(PresetKind::ThisQuarter).compute(at(2024, 2, 10), &locale),
            range(ymd(2024, 1, 1), ymd(2024, 3, 31))
        );
        assert_eq!(
            Preset::from(PresetKind::ThisYear).compute(now, &locale),
            range(ymd(2024, 1, 1), ymd(2024, 12, 31))
        );
        assert_eq!(
            Preset::from(PresetKind::LastYear).compute(now, &locale),
            range(ymd(2023, 1, 1), ymd(2023, 12, 31))
        );
    }

    #[test]
    fn test_catalog_rejects_duplicate_keys() {
        let presets = vec![
            Preset::from(PresetKind::Today),
            Preset::new("today", "Now", PresetKind::Yesterday),
        ];
        assert_eq!(
            PresetCatalog::new(Locale::default(), presets),
            Err(CatalogError::DuplicateKey("today".to_string()))
        );
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = PresetCatalog::default();
        let now = at(2024, 5, 20);
        assert_eq!(catalog.presets().len(), PresetCatalog::STANDARD.len());
        assert_eq!(catalog.presets()[0].key, "today");
        assert_eq!(
            catalog.compute("this_month", now).unwrap(),
            range(ymd(2024, 5, 1), ymd(2024, 5, 31))
        );
        assert_eq!(
            catalog.get("fortnight"),
            Err(CatalogError::UnknownKey("fortnight".to_string()))
        );
        assert_eq!("last_year".parse::<PresetKind>(), Ok(PresetKind::LastYear));
    }

    #[test]
    fn test_default_range() {
        let now = at(2024, 5, 20);
        assert_eq!(
            PresetCatalog::default().default_range(now),
            range(ymd(2024, 5, 1), ymd(2024, 5, 31))
        );
        let small = PresetCatalog::from_kinds(Locale::default(), &[PresetKind::Yesterday]).unwrap();
        assert_eq!(small.default_range(now), DateRange::day(ymd(2024, 5, 19)));
        let empty = PresetCatalog::new(Locale::default(), Vec::new()).unwrap();
        assert_eq!(empty.default_range(now), DateRange::day(ymd(2024, 5, 20)));
    }
}
