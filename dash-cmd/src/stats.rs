//! `stats` subcommand: fetch dashboard aggregates from the backend.

use chrono::NaiveDateTime;
use dash_core::dates::parse_date;
use dash_core::format::{format_amount, format_count};
use dash_core::stats::{DashboardStats, StatsQuery};
use dash_core::{DateRange, Locale, PresetCatalog};
use log::info;

/// Range from either a preset key or explicit bounds; defaults to the
/// catalog default (this month).
pub fn resolve_range(
    catalog: &PresetCatalog,
    now: NaiveDateTime,
    preset: Option<&str>,
    bounds: Option<(&str, &str)>,
) -> anyhow::Result<DateRange> {
    match (preset, bounds) {
        (Some(key), None) => Ok(catalog.compute(key, now)?),
        (None, Some((start, end))) => {
            let range = DateRange::from_dates(parse_date(start)?, parse_date(end)?);
            if !range.is_ordered() {
                anyhow::bail!("range {} ends before it starts", range);
            }
            Ok(range)
        }
        (None, None) => Ok(catalog.default_range(now)),
        (Some(_), Some(_)) => anyhow::bail!("give either a preset or start/end, not both"),
    }
}

pub async fn run_stats(
    base_url: &str,
    business: &str,
    range: DateRange,
    locale: &Locale,
) -> anyhow::Result<()> {
    let query = StatsQuery::new(business, range);
    let url = query.url(base_url);
    info!("Fetching stats for business {} over {}", business, range);

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        anyhow::bail!("{} returned {}", url, response.status());
    }
    let body = response.text().await?;
    let stats = DashboardStats::parse(&body)
        .map_err(|e| anyhow::anyhow!("Failed to parse stats from {}: {}", url, e))?;

    print!("{}", render_stats(&stats, &range, locale));
    Ok(())
}

pub fn render_stats(stats: &DashboardStats, range: &DateRange, locale: &Locale) -> String {
    let rows = [
        ("Revenue", format_amount(stats.total_revenue, locale)),
        ("Expenses", format_amount(stats.total_expenses, locale)),
        ("Net income", format_amount(stats.net_income(), locale)),
        ("Outstanding", format_amount(stats.outstanding_amount, locale)),
        ("Invoices issued", format_count(stats.invoices_issued, locale)),
        ("Invoices paid", format_count(stats.invoices_paid, locale)),
        ("Invoices overdue", format_count(stats.invoices_overdue, locale)),
        ("Low stock items", format_count(stats.low_stock_items, locale)),
    ];
    let mut out = format!("{}\n", range);
    for (title, value) in rows {
        out.push_str(&format!("  {:<18}{:>16}\n", title, value));
    }
    out
}
