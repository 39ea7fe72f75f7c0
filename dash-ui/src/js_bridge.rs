//! Typed wrappers around JS interop.
//!
//! The calendar is flatpickr, loaded as a global `<script>` by the host page.
//! Instances live on `window.__dashPickers[anchor_id]` and report selections
//! through one exported Rust closure per instance. Evaluated snippets are
//! wrapped in try/catch so a broken widget never panics the app.

use chrono::NaiveDate;
use dash_core::dates::{format_date, parse_date};
use dash_core::picker::{CalendarWidget, PickerConfig, PickerError};
use dash_core::stats::{DashboardStats, StatsQuery};
use dash_core::DateRange;
use js_sys::{Array, Reflect};
use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('dashboard JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a Rust string as a JS string literal.
fn js_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

fn window() -> Result<web_sys::Window, PickerError> {
    web_sys::window().ok_or_else(|| PickerError::Script("no window".to_string()))
}

/// A flatpickr range calendar attached to a DOM input.
pub struct CalendarPicker {
    anchor_id: String,
    callback_key: String,
    callback: Option<Closure<dyn FnMut(Array)>>,
}

impl CalendarPicker {
    /// Create the widget on `config.anchor_id`. `on_change` receives every
    /// selection change as parsed dates, including partial ones.
    pub fn create<F>(config: &PickerConfig, mut on_change: F) -> Result<Self, PickerError>
    where
        F: FnMut(Vec<NaiveDate>) + 'static,
    {
        let window = window()?;
        let anchor_exists = window
            .document()
            .and_then(|doc| doc.get_element_by_id(&config.anchor_id))
            .is_some();
        if !anchor_exists {
            return Err(PickerError::AnchorMissing(config.anchor_id.clone()));
        }
        if !Reflect::has(&window, &JsValue::from_str("flatpickr")).unwrap_or(false) {
            return Err(PickerError::LibraryMissing);
        }

        let callback_key = format!("__dashPickerChange_{}", config.anchor_id);
        let callback = Closure::<dyn FnMut(Array)>::new(move |selected: Array| {
            let dates = selected
                .iter()
                .filter_map(|value| value.as_string())
                .filter_map(|text| parse_date(&text).ok())
                .collect();
            on_change(dates);
        });
        Reflect::set(&window, &JsValue::from_str(&callback_key), callback.as_ref())
            .map_err(|e| PickerError::Script(format!("{:?}", e)))?;

        let script = format!(
            r#"
            (function() {{
                var options = {options};
                options.onChange = function(selected, _text, instance) {{
                    var cb = window[{key}];
                    if (cb) cb(selected.map(function(d) {{ return instance.formatDate(d, 'Y-m-d'); }}));
                }};
                window.__dashPickers = window.__dashPickers || {{}};
                window.__dashPickers[{id}] = flatpickr(document.getElementById({id}), options);
                return true;
            }})();
            "#,
            options = config.widget_options(),
            key = js_str(&callback_key),
            id = js_str(&config.anchor_id),
        );
        if let Err(e) = js_sys::eval(&script) {
            let _ = Reflect::delete_property(&window, &JsValue::from_str(&callback_key));
            return Err(PickerError::Script(format!("{:?}", e)));
        }

        debug!("flatpickr attached to #{}", config.anchor_id);
        Ok(Self {
            anchor_id: config.anchor_id.clone(),
            callback_key,
            callback: Some(callback),
        })
    }
}

impl CalendarWidget for CalendarPicker {
    fn show_range(&mut self, range: &DateRange) {
        // setDate with triggerChange = false does not fire onChange
        call_js(&format!(
            "var p = window.__dashPickers && window.__dashPickers[{id}]; if (p) p.setDate([{start}, {end}], false);",
            id = js_str(&self.anchor_id),
            start = js_str(&format_date(&range.start_date())),
            end = js_str(&format_date(&range.end_date())),
        ));
    }

    fn destroy(&mut self) {
        call_js(&format!(
            "var p = window.__dashPickers && window.__dashPickers[{id}]; if (p) {{ p.destroy(); delete window.__dashPickers[{id}]; }}",
            id = js_str(&self.anchor_id),
        ));
        if let Some(window) = web_sys::window() {
            let _ = Reflect::delete_property(&window, &JsValue::from_str(&self.callback_key));
        }
        // Dropped last so flatpickr can no longer reach it.
        self.callback.take();
    }
}

/// Fetch dashboard stats from the backend.
pub async fn fetch_stats(api_base: &str, query: &StatsQuery) -> anyhow::Result<DashboardStats> {
    let url = query.url(api_base);
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|e| anyhow::anyhow!("request to {} failed: {:?}", url, e))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("unexpected fetch result for {}", url))?;
    if !response.ok() {
        anyhow::bail!("{} returned HTTP {}", url, response.status());
    }
    let text = response
        .text()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| anyhow::anyhow!("reading {} failed: {:?}", url, e))?;
    DashboardStats::parse(&body.as_string().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::js_str;

    #[test]
    fn test_js_str_escapes_quotes() {
        assert_eq!(js_str("range-input"), "\"range-input\"");
        assert_eq!(js_str("a'b\"c"), "\"a'b\\\"c\"");
    }
}
