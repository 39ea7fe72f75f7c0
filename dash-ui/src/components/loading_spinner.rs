//! Placeholder shown while dashboard figures load.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading figures...".to_string())]
    pub label: String,
}

/// Inline loading indicator shown while stats are in flight.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 24px; color: #666;",
            "{props.label}"
        }
    }
}
