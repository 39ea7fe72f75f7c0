//! Dashboard statistics requests.
//!
//! Stats are fetched once per range change with no cancellation, so an
//! older response can land after a newer one. `RequestTracker` hands out
//! increasing tokens and only accepts the response carrying the latest.

use crate::date_range::DateRange;
use crate::dates::format_date;
use serde::{Deserialize, Serialize};

/// Aggregates for one business over one range. Fields missing from the
/// backend payload default to zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub outstanding_amount: f64,
    pub invoices_issued: u64,
    pub invoices_paid: u64,
    pub invoices_overdue: u64,
    pub low_stock_items: u64,
}

impl DashboardStats {
    pub fn net_income(&self) -> f64 {
        self.total_revenue - self.total_expenses
    }

    pub fn parse(body: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsQuery {
    pub business_id: String,
    pub range: DateRange,
}

impl StatsQuery {
    pub fn new(business_id: impl Into<String>, range: DateRange) -> Self {
        Self {
            business_id: business_id.into(),
            range,
        }
    }

    pub fn path(&self) -> String {
        format!(
            "/api/businesses/{}/stats?start={}&end={}",
            urlencoding::encode(&self.business_id),
            format_date(&self.range.start_date()),
            format_date(&self.range.end_date())
        )
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for a new request; supersedes every earlier one.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Whether a response for `token` is still wanted.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_query_url() {
        let range = DateRange::from_dates(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        );
        let query = StatsQuery::new("42", range);
        assert_eq!(
            query.path(),
            "/api/businesses/42/stats?start=2024-01-01&end=2024-03-31"
        );
        assert_eq!(
            query.url("http://localhost:8000/"),
            "http://localhost:8000/api/businesses/42/stats?start=2024-01-01&end=2024-03-31"
        );
    }

    #[test]
    fn test_business_id_is_encoded() {
        let day = DateRange::day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(
            StatsQuery::new("acme co/eu", day).path(),
            "/api/businesses/acme%20co%2Feu/stats?start=2024-01-01&end=2024-01-01"
        );
    }

    #[test]
    fn test_stats_missing_fields_default() {
        let stats = DashboardStats::parse(r#"{"total_revenue": 1500.5, "invoices_issued": 12}"#).unwrap();
        assert_eq!(stats.total_revenue, 1500.5);
        assert_eq!(stats.invoices_issued, 12);
        assert_eq!(stats.invoices_paid, 0);
        assert_eq!(stats.net_income(), 1500.5);
        assert!(DashboardStats::parse("not json").is_err());
    }

    #[test]
    fn test_only_latest_request_is_current() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue();
        assert!(tracker.is_current(first));
        let second = tracker.issue();
        assert!(second > first);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }
}
