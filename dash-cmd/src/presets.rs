//! `presets` and `match` subcommands.

use crate::OutputFormat;
use chrono::NaiveDateTime;
use dash_core::dates::{format_date, parse_date};
use dash_core::{DateRange, PresetCatalog};
use log::info;
use std::io::{self, Write};

/// Print every preset's range at `now` with its length in days.
pub fn run_presets(catalog: &PresetCatalog, now: NaiveDateTime, format: OutputFormat) -> anyhow::Result<()> {
    info!(
        "Computing {} presets for {} (weeks start {})",
        catalog.presets().len(),
        now.date(),
        catalog.locale().week_start
    );
    write_presets(catalog, now, format, io::stdout().lock())
}

pub fn write_presets<W: Write>(
    catalog: &PresetCatalog,
    now: NaiveDateTime,
    format: OutputFormat,
    mut out: W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            for (preset, range) in catalog.ranges(now) {
                writeln!(
                    out,
                    "{:<14} {:<14} {} .. {} ({}d)",
                    preset.key,
                    preset.label,
                    format_date(&range.start_date()),
                    format_date(&range.end_date()),
                    range.days().count()
                )?;
            }
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            wtr.write_record(["key", "label", "start", "end", "days"])?;
            for (preset, range) in catalog.ranges(now) {
                let start = format_date(&range.start_date());
                let end = format_date(&range.end_date());
                let days = range.days().count().to_string();
                wtr.write_record([preset.key, preset.label, start.as_str(), end.as_str(), days.as_str()])?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

/// Print the key of the preset matching `start..end`, or "custom".
pub fn run_match(catalog: &PresetCatalog, now: NaiveDateTime, start: &str, end: &str) -> anyhow::Result<()> {
    let key = match_key(catalog, now, start, end)?;
    println!("{}", key);
    Ok(())
}

pub fn match_key(catalog: &PresetCatalog, now: NaiveDateTime, start: &str, end: &str) -> anyhow::Result<String> {
    let range = DateRange::from_dates(parse_date(start)?, parse_date(end)?);
    if !range.is_ordered() {
        info!("{} ends before it starts", range);
    }
    Ok(catalog.active(&range, now).key().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_core::Locale;
    use chrono::{NaiveDate, Weekday};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 14)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn catalog() -> PresetCatalog {
        PresetCatalog::standard(Locale::default().with_week_start(Weekday::Mon))
    }

    #[test]
    fn test_table_output() {
        let mut out = Vec::new();
        write_presets(&catalog(), now(), OutputFormat::Table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), PresetCatalog::STANDARD.len());
        assert!(lines[0].starts_with("today"));
        assert!(lines[0].ends_with("2024-02-14 .. 2024-02-14 (1d)"));
        assert!(text.contains("this_semester  This Semester  2024-01-01 .. 2024-06-30 (182d)"));
    }

    #[test]
    fn test_csv_output() {
        let mut out = Vec::new();
        write_presets(&catalog(), now(), OutputFormat::Csv, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("key,label,start,end,days"));
        assert_eq!(lines.next(), Some("today,Today,2024-02-14,2024-02-14,1"));
        assert!(text.contains("this_month,This Month,2024-02-01,2024-02-29,29"));
    }

    #[test]
    fn test_match_key() {
        let catalog = catalog();
        assert_eq!(match_key(&catalog, now(), "2024-02-12", "2024-02-18").unwrap(), "this_week");
        assert_eq!(match_key(&catalog, now(), "2024-02-01", "2024-02-29").unwrap(), "this_month");
        assert_eq!(match_key(&catalog, now(), "2024-02-02", "2024-02-29").unwrap(), "custom");
        assert_eq!(match_key(&catalog, now(), "2024-02-29", "2024-02-01").unwrap(), "custom");
        assert!(match_key(&catalog, now(), "yesterday", "2024-02-01").is_err());
    }
}
