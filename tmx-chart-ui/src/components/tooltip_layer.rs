//! Floating tooltip for the hovered cell.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn TooltipLayer() -> Element {
    let state = use_context::<AppState>();
    let Some(tip) = (state.tooltip)() else {
        return rsx! {
            div { id: "tooltip", style: "position: absolute; opacity: 0; pointer-events: none;" }
        };
    };
    let style = format!(
        "position: absolute; left: {}px; top: {}px; opacity: 1; pointer-events: none; \
         padding: 8px 10px; background: rgba(255,255,255,0.96); color: #222; \
         border: 1px solid #ccc; border-radius: 6px; font-size: 12px; \
         box-shadow: 0 2px 8px rgba(0,0,0,0.15);",
        tip.left, tip.top
    );
    let content = tip.content;

    rsx! {
        div {
            id: "tooltip",
            style: "{style}",
            div { style: "font-weight: 600; margin-bottom: 4px;", "{content.heading}" }
            for line in content.lines.iter() {
                div {
                    style: if line.emphasized { "font-weight: 700;" } else { "opacity: 0.75;" },
                    "{line.label} {line.value}"
                }
            }
            div {
                style: "margin-top: 4px; font-size: 11px; opacity: 0.7;",
                "{content.note}"
            }
        }
    }
}
