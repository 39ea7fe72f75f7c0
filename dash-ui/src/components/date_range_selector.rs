//! Dashboard header date-range selector: preset chips plus a free-form
//! range calendar.
//!
//! The selector never writes the range itself when the parent owns it; it
//! reports every change through `on_change`. Chip clicks report the preset's
//! range directly and the calendar catches up on the next render through
//! the adapter's inward sync. Calendar selections go the other way; if the
//! owner declines one, the same inward sync puts the owner's range back.
//! The calendar instance is created once when its input mounts and released
//! when the selector is dropped.

use crate::components::PresetChips;
use crate::js_bridge::CalendarPicker;
use dash_core::picker::{PickerAdapter, PickerConfig};
use dash_core::{local_now, DateRange, PresetCatalog, RangeSelection};
use dioxus::prelude::*;
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;

type SharedPicker = Rc<RefCell<PickerAdapter<CalendarPicker>>>;

#[derive(Props, Clone, PartialEq)]
pub struct DateRangeSelectorProps {
    /// Range owned by the parent. Leave unset to let the selector keep its
    /// own range, starting from the catalog default.
    pub date_range: Option<DateRange>,
    pub on_change: EventHandler<DateRange>,
    #[props(default)]
    pub catalog: PresetCatalog,
    /// DOM id of the calendar input
    #[props(default = "date-range-input".to_string())]
    pub anchor_id: String,
}

#[component]
pub fn DateRangeSelector(props: DateRangeSelectorProps) -> Element {
    let now = local_now();
    let catalog = props.catalog.clone();
    let on_change = props.on_change;

    // Owned or self-managed is decided on the first render only.
    let mut selection = use_signal({
        let owned = props.date_range;
        let catalog = catalog.clone();
        move || RangeSelection::new(owned, &catalog, now)
    });
    let current = selection.read().current(props.date_range.as_ref());
    let revision = selection.read().revision();
    let active = catalog.active(&current, now);
    let active_key = active.key().to_string();
    let active_label = active.label();

    let mut calendar_available = use_signal(|| true);
    let picker: SharedPicker = use_hook(|| {
        Rc::new(RefCell::new(PickerAdapter::new(PickerConfig::new(
            props.anchor_id.clone(),
            current,
        ))))
    });

    use_drop({
        let picker = picker.clone();
        move || {
            if let Ok(mut picker) = picker.try_borrow_mut() {
                picker.destroy();
            }
        }
    });

    // Inward sync: push the owner's range into the calendar after it changes
    // and after every request, adopted or not.
    use_effect(use_reactive((&current, &revision), {
        let picker = picker.clone();
        move |(range, _)| {
            if let Ok(mut picker) = picker.try_borrow_mut() {
                picker.sync_inward(&range);
            }
        }
    }));

    let on_chip = {
        let catalog = catalog.clone();
        move |key: &'static str| {
            let chosen = selection.write().choose_preset(&catalog, key, local_now());
            match chosen {
                Ok(range) => on_change.call(range),
                Err(e) => warn!("{}", e),
            }
        }
    };

    let on_mounted = {
        let picker = picker.clone();
        move |_: MountedEvent| {
            let weak = Rc::downgrade(&picker);
            let mounted = picker.borrow_mut().mount(|config| {
                CalendarPicker::create(config, move |dates| {
                    let Some(picker) = weak.upgrade() else {
                        return;
                    };
                    // Events raised while the adapter is busy pushing a range
                    // into the widget are dropped.
                    let selected = match picker.try_borrow_mut() {
                        Ok(mut picker) => picker.on_selection(&dates),
                        Err(_) => None,
                    };
                    if let Some(range) = selected {
                        let emitted = selection.write().request(range);
                        on_change.call(emitted);
                    }
                })
            });
            if mounted.is_err() {
                calendar_available.set(false);
            }
        }
    };

    rsx! {
        div {
            class: "date-range-selector",
            style: "margin: 8px 0; display: flex; flex-direction: column; gap: 8px;",
            PresetChips {
                catalog: catalog.clone(),
                active_key: active_key,
                on_select: on_chip,
            }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                label {
                    r#for: "{props.anchor_id}",
                    style: "font-weight: bold;",
                    "Range: "
                }
                input {
                    id: "{props.anchor_id}",
                    r#type: "text",
                    readonly: true,
                    value: "{current}",
                    style: "width: 220px;",
                    onmounted: on_mounted,
                }
                span {
                    style: "font-size: 12px; color: #666;",
                    "{active_label}"
                }
            }
            if !calendar_available() {
                p {
                    style: "margin: 0; font-size: 12px; color: #888;",
                    "Calendar unavailable; use the presets above."
                }
            }
        }
    }
}
