//! Dioxus components and JS bridges for the business dashboard.
//!
//! This crate provides:
//! - `js_bridge`: the calendar widget wrapper (`CalendarPicker`) and stats fetch
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components, most importantly `DateRangeSelector`

pub mod js_bridge;
pub mod state;
pub mod components;
