use crate::dates::{end_of_day, format_date, start_of_day};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem::replace;

/// A `{start, end}` span of wall-clock time. Ranges built by the preset
/// catalog cover whole days (start-of-day through end-of-day); ranges
/// arriving from elsewhere may carry any time of day and are not validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Whole-day range from the first moment of `start` to the last moment of `end`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start_of_day(start),
            end: end_of_day(end),
        }
    }

    /// Single whole day.
    pub fn day(date: NaiveDate) -> Self {
        Self::from_dates(date, date)
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Calendar-day equality on both bounds, ignoring time of day.
    pub fn same_days(&self, other: &DateRange) -> bool {
        self.start_date() == other.start_date() && self.end_date() == other.end_date()
    }

    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Iterate over every calendar day the range touches.
    pub fn days(&self) -> Days {
        Days(self.start_date(), self.end_date())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            format_date(&self.start_date()),
            format_date(&self.end_date())
        )
    }
}

/// Calendar days of a range, first to last. Empty when the range is reversed.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct Days(pub NaiveDate, pub NaiveDate);

impl Iterator for Days {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0 + TimeDelta::days(1);
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DateRange, Days};
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_iteration() {
        let range = DateRange::from_dates(ymd(2022, 1, 1), ymd(2022, 1, 5));
        let dates: Vec<NaiveDate> = range.days().collect();
        assert_eq!(dates.len(), 5);
        assert_eq!(dates[0], ymd(2022, 1, 1));
        assert_eq!(dates[4], ymd(2022, 1, 5));
    }

    #[test]
    fn test_days_single_day() {
        let dates: Vec<NaiveDate> = DateRange::day(ymd(2022, 3, 15)).days().collect();
        assert_eq!(dates, vec![ymd(2022, 3, 15)]);
    }

    #[test]
    fn test_days_reversed_is_empty() {
        let dates: Vec<NaiveDate> = Days(ymd(2022, 3, 15), ymd(2022, 3, 14)).collect();
        assert!(dates.is_empty());
    }

    #[test]
    fn test_same_days_ignores_time() {
        let whole = DateRange::from_dates(ymd(2024, 6, 1), ymd(2024, 6, 30));
        let partial = DateRange::new(
            ymd(2024, 6, 1).and_hms_opt(9, 30, 0).unwrap(),
            ymd(2024, 6, 30).and_hms_opt(12, 0, 0).unwrap(),
        );
        assert!(whole.same_days(&partial));
        assert_ne!(whole, partial);
        assert!(!whole.same_days(&DateRange::from_dates(ymd(2024, 6, 1), ymd(2024, 6, 29))));
    }

    #[test]
    fn test_display_and_order() {
        let range = DateRange::from_dates(ymd(2024, 1, 1), ymd(2024, 1, 31));
        assert_eq!(range.to_string(), "2024-01-01 to 2024-01-31");
        assert!(range.is_ordered());
        let reversed = DateRange::from_dates(ymd(2024, 2, 1), ymd(2024, 1, 1));
        assert!(!reversed.is_ordered());
    }

    #[test]
    fn test_serde_shape() {
        let range = DateRange::day(ymd(2024, 1, 1));
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(json["start"], "2024-01-01T00:00:00");
        assert_eq!(json["end"], "2024-01-01T23:59:59.999");
    }
}
