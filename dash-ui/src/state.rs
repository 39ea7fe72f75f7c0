//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dash_core::stats::DashboardStats;
use dash_core::{local_now, DateRange, Locale, PresetCatalog};
use dioxus::prelude::*;

/// Shared state for the dashboard page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Range every dashboard panel is filtered by. The header selector is
    /// the only writer.
    pub date_range: Signal<DateRange>,
    /// Business whose figures are shown
    pub business_id: Signal<String>,
    pub locale: Signal<Locale>,
    /// Whether a stats request is in flight
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Latest accepted stats response
    pub stats: Signal<Option<DashboardStats>>,
}

impl AppState {
    /// Create state opening on the catalog's default range.
    pub fn new(business_id: String, locale: Locale) -> Self {
        let initial = PresetCatalog::standard(locale.clone()).default_range(local_now());
        Self {
            date_range: Signal::new(initial),
            business_id: Signal::new(business_id),
            locale: Signal::new(locale),
            loading: Signal::new(false),
            error_msg: Signal::new(None),
            stats: Signal::new(None),
        }
    }

    pub fn catalog(&self) -> PresetCatalog {
        PresetCatalog::standard(self.locale.read().clone())
    }
}
