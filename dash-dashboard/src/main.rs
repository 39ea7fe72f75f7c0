//! Business dashboard page.
//!
//! Data flow:
//! 1. `DashboardConfig` is read from the page URL (business, API origin, week start).
//! 2. `AppState.date_range` opens on the catalog default (this month).
//! 3. The header `DateRangeSelector` is the only writer of that range.
//! 4. Every range change issues one stats request; responses that arrive
//!    after a newer request was issued are discarded.

mod config;

use config::DashboardConfig;
use dash_core::format::{format_amount, format_count, percent};
use dash_core::stats::{RequestTracker, StatsQuery};
use dash_core::DateRange;
use dash_ui::components::{DateRangeSelector, ErrorDisplay, LoadingSpinner, SectionHeader, StatCard};
use dash_ui::js_bridge;
use dash_ui::state::AppState;
use dioxus::prelude::*;
use log::{debug, warn};
use std::cell::RefCell;
use std::rc::Rc;

/// DOM id for the header calendar input.
const RANGE_INPUT_ID: &str = "dashboard-range";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(DashboardConfig::from_location);
    let mut state = use_context_provider({
        let config = config.clone();
        move || AppState::new(config.business_id, config.locale)
    });
    let tracker = use_hook(|| Rc::new(RefCell::new(RequestTracker::new())));

    // ─── Fetch stats whenever the range or business changes ───
    use_effect(move || {
        let range = (state.date_range)();
        let business_id = (state.business_id)();
        let query = StatsQuery::new(business_id, range);
        let token = tracker.borrow_mut().issue();
        let tracker = tracker.clone();
        let api_base = config.api_base.clone();
        state.loading.set(true);

        spawn(async move {
            let result = js_bridge::fetch_stats(&api_base, &query).await;
            if !tracker.borrow().is_current(token) {
                debug!("discarding stale stats for {}", query.range);
                return;
            }
            match result {
                Ok(stats) => {
                    state.stats.set(Some(stats));
                    state.error_msg.set(None);
                }
                Err(e) => {
                    warn!("stats request failed: {}", e);
                    state.error_msg.set(Some(format!("Could not load figures: {}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    let range = (state.date_range)();
    let catalog = state.catalog();

    rsx! {
        div {
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            header {
                style: "padding-bottom: 8px; border-bottom: 1px solid #e0e0e0;",
                h2 {
                    style: "margin: 0 0 8px 0;",
                    "Business {state.business_id}"
                }
                DateRangeSelector {
                    date_range: range,
                    on_change: move |new_range: DateRange| state.date_range.set(new_range),
                    catalog,
                    anchor_id: RANGE_INPUT_ID.to_string(),
                }
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay {
                    message: err.clone(),
                    on_dismiss: move |_| state.error_msg.set(None),
                }
            }

            SectionHeader {
                title: "Overview".to_string(),
                caption: range.to_string(),
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                StatGrid {}
            }
        }
    }
}

/// Stat cards for the latest accepted response.
#[component]
fn StatGrid() -> Element {
    let state = use_context::<AppState>();
    let locale = state.locale.read().clone();
    let Some(stats) = state.stats.read().clone() else {
        return rsx! {
            p { style: "color: #888;", "No figures for this range yet." }
        };
    };

    let net = stats.net_income();
    let paid_share = percent(stats.invoices_paid, stats.invoices_issued)
        .map(|p| format!("{} paid ({}%)", format_count(stats.invoices_paid, &locale), p))
        .unwrap_or_default();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px;",
            StatCard { title: "Revenue".to_string(), value: format_amount(stats.total_revenue, &locale) }
            StatCard { title: "Expenses".to_string(), value: format_amount(stats.total_expenses, &locale) }
            StatCard { title: "Net income".to_string(), value: format_amount(net, &locale), warn: net < 0.0 }
            StatCard { title: "Outstanding".to_string(), value: format_amount(stats.outstanding_amount, &locale) }
            StatCard {
                title: "Invoices issued".to_string(),
                value: format_count(stats.invoices_issued, &locale),
                detail: paid_share,
            }
            StatCard {
                title: "Overdue invoices".to_string(),
                value: format_count(stats.invoices_overdue, &locale),
                warn: stats.invoices_overdue > 0,
            }
            StatCard {
                title: "Low stock items".to_string(),
                value: format_count(stats.low_stock_items, &locale),
                warn: stats.low_stock_items > 0,
            }
        }
    }
}
