//! Loading indicator shown while the CSV is parsed.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; opacity: 0.6;",
            "Loading temperature data..."
        }
    }
}
