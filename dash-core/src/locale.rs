//! Explicit locale configuration.
//!
//! Calendar and number conventions are passed in rather than read from
//! ambient state so the catalog and formatters stay pure.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// First day of the week for the week presets.
    #[serde(with = "weekday_name")]
    pub week_start: Weekday,
    pub currency_symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl Locale {
    /// Sunday-first weeks, `$1,234.56` amounts.
    pub fn en_us() -> Self {
        Self {
            week_start: Weekday::Sun,
            currency_symbol: "$".to_string(),
            thousands_separator: ',',
            decimal_separator: '.',
        }
    }

    /// Monday-first weeks, `€1.234,56` amounts.
    pub fn european() -> Self {
        Self {
            week_start: Weekday::Mon,
            currency_symbol: "€".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

/// Parse a weekday name as accepted on the command line ("mon", "sunday", ...).
pub fn parse_weekday(s: &str) -> anyhow::Result<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| anyhow::anyhow!("unrecognized weekday: {}", s))
}

mod weekday_name {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&day.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse::<Weekday>().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("mon").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday("Sunday").unwrap(), Weekday::Sun);
        assert!(parse_weekday("someday").is_err());
    }

    #[test]
    fn test_locale_round_trips_through_json() {
        let locale = Locale::european();
        let json = serde_json::to_string(&locale).unwrap();
        assert!(json.contains("\"week_start\":\"Mon\""));
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, locale);
    }
}
