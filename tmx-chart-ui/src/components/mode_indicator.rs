//! Shows the active display mode.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ModeIndicator() -> Element {
    let state = use_context::<AppState>();
    let label = state
        .session
        .read()
        .as_ref()
        .map(|s| s.mode().label())
        .unwrap_or_default();

    rsx! {
        div {
            style: "font-size: 13px;",
            "Mode: "
            strong { id: "modeLabel", "{label}" }
            span {
                style: "opacity: 0.7; margin-left: 6px;",
                "(click the chart to toggle)"
            }
        }
    }
}
