//! Calendar arithmetic used by the preset catalog and the widget bridges.
//!
//! Every period boundary is derived from the first day of a month and
//! chrono's `Months`/`Days` arithmetic, so month lengths, leap years and
//! year rollovers come out of the calendar rather than fixed day counts.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Display and widget exchange format for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
}

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last representable millisecond of `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(last)
}

/// Shift `date` by a signed number of calendar months. The day is clamped
/// to the length of the target month (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let step = Months::new(months.unsigned_abs());
    if months >= 0 {
        date + step
    } else {
        date - step
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    end_of_period(first_of_month(date), 1)
}

/// Last day of the `months`-long period beginning on `period_start`
/// (a first-of-month). Steps to the first day of the following period and
/// back one day.
pub fn end_of_period(period_start: NaiveDate, months: u32) -> NaiveDate {
    period_start + Months::new(months) - Days::new(1)
}

/// First day of the calendar period of `months` length (3 = quarter,
/// 6 = semester, 12 = year) containing `date`.
pub fn first_of_period(date: NaiveDate, months: u32) -> NaiveDate {
    first_of_month(date) - Months::new(date.month0() % months)
}

/// First day of the week containing `date`, for weeks beginning on `week_start`.
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    date - Days::new(u64::from(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike, Weekday};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_and_format() {
        let date = parse_date(" 2024-02-29 ").unwrap();
        assert_eq!(date, ymd(2024, 2, 29));
        assert_eq!(format_date(&date), "2024-02-29");
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("20240229").is_err());
    }

    #[test]
    fn test_day_boundaries() {
        let date = ymd(2024, 5, 17);
        assert_eq!(start_of_day(date).time(), NaiveTime::MIN);
        let end = end_of_day(date);
        assert_eq!(end.date(), date);
        assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
        assert!(start_of_day(date) < end);
    }

    #[test]
    fn test_add_months_clamps_and_crosses_years() {
        assert_eq!(add_months(ymd(2024, 1, 31), 1), ymd(2024, 2, 29));
        assert_eq!(add_months(ymd(2023, 1, 31), 1), ymd(2023, 2, 28));
        assert_eq!(add_months(ymd(2023, 11, 15), 3), ymd(2024, 2, 15));
        assert_eq!(add_months(ymd(2024, 2, 10), -3), ymd(2023, 11, 10));
        assert_eq!(add_months(ymd(2024, 3, 31), -1), ymd(2024, 2, 29));
    }

    #[test]
    fn test_month_edges() {
        assert_eq!(first_of_month(ymd(2024, 2, 17)), ymd(2024, 2, 1));
        assert_eq!(last_of_month(ymd(2024, 2, 17)), ymd(2024, 2, 29));
        assert_eq!(last_of_month(ymd(2100, 2, 1)), ymd(2100, 2, 28));
        assert_eq!(last_of_month(ymd(2023, 12, 5)), ymd(2023, 12, 31));
    }

    #[test]
    fn test_periods() {
        assert_eq!(first_of_period(ymd(2024, 5, 20), 3), ymd(2024, 4, 1));
        assert_eq!(first_of_period(ymd(2024, 5, 20), 6), ymd(2024, 1, 1));
        assert_eq!(first_of_period(ymd(2024, 12, 31), 6), ymd(2024, 7, 1));
        assert_eq!(first_of_period(ymd(2024, 12, 31), 12), ymd(2024, 1, 1));
        assert_eq!(end_of_period(ymd(2024, 1, 1), 6), ymd(2024, 6, 30));
        assert_eq!(end_of_period(ymd(2024, 7, 1), 6), ymd(2024, 12, 31));
        assert_eq!(end_of_period(ymd(2023, 10, 1), 3), ymd(2023, 12, 31));
    }

    #[test]
    fn test_start_of_week() {
        // 2024-05-15 is a Wednesday
        let wed = ymd(2024, 5, 15);
        assert_eq!(start_of_week(wed, Weekday::Mon), ymd(2024, 5, 13));
        assert_eq!(start_of_week(wed, Weekday::Sun), ymd(2024, 5, 12));
        // Sunday belongs to the previous Monday-week
        let sun = ymd(2024, 5, 19);
        assert_eq!(start_of_week(sun, Weekday::Mon), ymd(2024, 5, 13));
        assert_eq!(start_of_week(sun, Weekday::Sun), sun);
        // across a year boundary
        assert_eq!(start_of_week(ymd(2025, 1, 1), Weekday::Mon), ymd(2024, 12, 30));
    }
}
