//! Lifecycle and synchronization for an external calendar widget.
//!
//! The adapter owns at most one widget instance. It is created once
//! (`Uninitialized -> Mounted`), receives ranges pushed from the owning
//! state (inward sync), turns completed two-date selections into range
//! requests (outward sync) and releases the widget exactly once on
//! `destroy` or drop (`Mounted -> Destroyed`). A widget that fails to
//! initialize leaves the adapter `Degraded`, which is not an error for the
//! surrounding selector.

use crate::date_range::DateRange;
use crate::dates::format_date;
use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Single,
    Range,
}

/// Options handed to the widget on creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerConfig {
    /// DOM id of the input the widget attaches to.
    pub anchor_id: String,
    pub mode: SelectionMode,
    /// Widget-side date tokens, `Y-m-d` renders as 2024-01-31.
    pub date_format: String,
    pub initial: DateRange,
    /// Render the calendar inline next to the anchor instead of repositioning a popover.
    pub static_position: bool,
}

impl PickerConfig {
    pub fn new(anchor_id: impl Into<String>, initial: DateRange) -> Self {
        Self {
            anchor_id: anchor_id.into(),
            mode: SelectionMode::Range,
            date_format: "Y-m-d".to_string(),
            initial,
            static_position: true,
        }
    }

    /// Option object in the shape the calendar library expects.
    pub fn widget_options(&self) -> serde_json::Value {
        serde_json::json!({
            "mode": self.mode,
            "dateFormat": self.date_format,
            "defaultDate": [
                format_date(&self.initial.start_date()),
                format_date(&self.initial.end_date()),
            ],
            "static": self.static_position,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// No element with the configured id exists.
    AnchorMissing(String),
    /// The calendar script has not been loaded.
    LibraryMissing,
    /// The library threw while creating the instance.
    Script(String),
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerError::AnchorMissing(id) => write!(f, "calendar anchor #{} not found", id),
            PickerError::LibraryMissing => write!(f, "calendar library not loaded"),
            PickerError::Script(msg) => write!(f, "calendar failed to initialize: {}", msg),
        }
    }
}

impl std::error::Error for PickerError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerState {
    Uninitialized,
    Mounted,
    /// Creation failed; only the preset chips are usable.
    Degraded,
    Destroyed,
}

/// A live calendar widget instance.
pub trait CalendarWidget {
    /// Display `range` as the current selection without reporting it back
    /// as a user selection.
    fn show_range(&mut self, range: &DateRange);

    /// Release listeners, timers and DOM held by the widget.
    fn destroy(&mut self);
}

pub struct PickerAdapter<W: CalendarWidget> {
    config: PickerConfig,
    widget: Option<W>,
    state: PickerState,
    /// What the widget currently displays.
    shown: Option<DateRange>,
}

impl<W: CalendarWidget> PickerAdapter<W> {
    pub fn new(config: PickerConfig) -> Self {
        Self {
            config,
            widget: None,
            state: PickerState::Uninitialized,
            shown: None,
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.state == PickerState::Mounted
    }

    /// Create the widget. Only the first call from `Uninitialized` does
    /// anything; later calls are ignored.
    pub fn mount<F>(&mut self, create: F) -> Result<(), PickerError>
    where
        F: FnOnce(&PickerConfig) -> Result<W, PickerError>,
    {
        if self.state != PickerState::Uninitialized {
            debug!(
                "calendar #{} already past mount ({:?})",
                self.config.anchor_id, self.state
            );
            return Ok(());
        }
        match create(&self.config) {
            Ok(widget) => {
                self.widget = Some(widget);
                self.shown = Some(self.config.initial);
                self.state = PickerState::Mounted;
                debug!("calendar #{} mounted", self.config.anchor_id);
                Ok(())
            }
            Err(e) => {
                warn!("{}; falling back to preset chips only", e);
                self.state = PickerState::Degraded;
                Err(e)
            }
        }
    }

    /// Handle the widget's selection change. Every completed two-date
    /// selection is returned for the owner, put in chronological order and
    /// widened to whole days; partial selections return `None`.
    pub fn on_selection(&mut self, dates: &[NaiveDate]) -> Option<DateRange> {
        if self.state != PickerState::Mounted {
            return None;
        }
        let [first, second] = dates else {
            return None;
        };
        let range = DateRange::from_dates(*first.min(second), *first.max(second));
        self.shown = Some(range);
        Some(range)
    }

    /// Push the owner's range into the widget. Returns whether the widget
    /// was updated; a range it already shows is skipped, so a selection the
    /// owner adopted is not pushed back while a declined one is reverted.
    pub fn sync_inward(&mut self, range: &DateRange) -> bool {
        let Some(widget) = self.widget.as_mut() else {
            return false;
        };
        if self.shown.is_some_and(|shown| shown.same_days(range)) {
            return false;
        }
        widget.show_range(range);
        self.shown = Some(*range);
        true
    }

    /// Release the widget. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        if let Some(mut widget) = self.widget.take() {
            widget.destroy();
            debug!("calendar #{} destroyed", self.config.anchor_id);
        }
        self.shown = None;
        self.state = PickerState::Destroyed;
    }
}

impl<W: CalendarWidget> Drop for PickerAdapter<W> {
    fn drop(&mut self) {
        self.destroy();
    }
}
