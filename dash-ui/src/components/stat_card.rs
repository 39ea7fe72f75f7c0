//! Single metric tile.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    pub title: String,
    /// Already formatted value
    pub value: String,
    #[props(default = String::new())]
    pub detail: String,
    /// Render the value in the warning color
    #[props(default = false)]
    pub warn: bool,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    let value_color = if props.warn { "#C62828" } else { "#1B5E20" };

    rsx! {
        div {
            style: "flex: 1 1 180px; padding: 12px 16px; border: 1px solid #e0e0e0; border-radius: 6px; background: #fff;",
            div {
                style: "font-size: 12px; color: #666; text-transform: uppercase;",
                "{props.title}"
            }
            div {
                style: "font-size: 22px; font-weight: bold; color: {value_color}; margin-top: 4px;",
                "{props.value}"
            }
            if !props.detail.is_empty() {
                div {
                    style: "font-size: 12px; color: #888; margin-top: 2px;",
                    "{props.detail}"
                }
            }
        }
    }
}
