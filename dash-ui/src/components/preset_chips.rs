//! Row of preset chips.

use dash_core::{Preset, PresetCatalog};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PresetChipsProps {
    pub catalog: PresetCatalog,
    /// Key of the highlighted chip, or "custom" for none
    pub active_key: String,
    /// Receives the clicked preset's key.
    pub on_select: EventHandler<&'static str>,
}

/// Presets in catalog order, each flagged when it is the highlighted one.
pub fn chip_states<'a>(catalog: &'a PresetCatalog, active_key: &str) -> Vec<(&'a Preset, bool)> {
    catalog
        .presets()
        .iter()
        .map(|preset| (preset, preset.key == active_key))
        .collect()
}

/// One chip per preset, in catalog order.
#[component]
pub fn PresetChips(props: PresetChipsProps) -> Element {
    rsx! {
        div {
            role: "group",
            style: "display: flex; flex-wrap: wrap; gap: 6px;",
            for (preset, active) in chip_states(&props.catalog, &props.active_key) {
                PresetChip {
                    key: "{preset.key}",
                    active: active,
                    preset: preset.clone(),
                    on_select: props.on_select,
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct PresetChipProps {
    pub preset: Preset,
    pub active: bool,
    pub on_select: EventHandler<&'static str>,
}

#[component]
pub fn PresetChip(props: PresetChipProps) -> Element {
    let style = if props.active {
        "padding: 4px 12px; border-radius: 14px; border: 1px solid #1565C0; background: #1565C0; color: #fff; cursor: pointer;"
    } else {
        "padding: 4px 12px; border-radius: 14px; border: 1px solid #BDBDBD; background: #fff; color: #333; cursor: pointer;"
    };
    let PresetChipProps {
        preset,
        active,
        on_select,
    } = props;
    let key = preset.key;

    rsx! {
        button {
            r#type: "button",
            class: if active { "preset-chip active" } else { "preset-chip" },
            "aria-pressed": "{active}",
            style: "{style}",
            onclick: move |_| on_select.call(key),
            "{preset.label}"
        }
    }
}
