//! Page configuration read from the URL query string.
//!
//! `?business=42&api=https://api.example.com&week_start=mon`

use dash_core::locale::parse_weekday;
use dash_core::Locale;
use log::warn;

pub const DEFAULT_BUSINESS_ID: &str = "1";

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// Backend origin; empty means same origin as the page.
    pub api_base: String,
    pub business_id: String,
    pub locale: Locale,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            business_id: DEFAULT_BUSINESS_ID.to_string(),
            locale: Locale::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse a `location.search` string. Values are percent-decoded; unknown
    /// keys are ignored and bad values keep their defaults.
    pub fn from_query(search: &str) -> Self {
        let mut config = Self::default();
        for pair in search.trim_start_matches('?').split('&') {
            let Some((key, raw)) = pair.split_once('=') else {
                continue;
            };
            let value = match urlencoding::decode(&raw.replace('+', " ")) {
                Ok(value) => value.into_owned(),
                Err(e) => {
                    warn!("ignoring {}: {}", key, e);
                    continue;
                }
            };
            if value.is_empty() {
                continue;
            }
            match key {
                "business" => config.business_id = value,
                "api" => config.api_base = value,
                "week_start" => match parse_weekday(&value) {
                    Ok(day) => config.locale.week_start = day,
                    Err(e) => warn!("{}", e),
                },
                _ => {}
            }
        }
        config
    }

    /// Read the current page's query string.
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}
