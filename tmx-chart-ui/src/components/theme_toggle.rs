//! Light/dark theme switch.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let dark = (state.dark_mode)();

    let on_click = move |evt: MouseEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        let enabled = !(state.dark_mode)();
        state.dark_mode.set(enabled);
        js_bridge::set_dark_mode(enabled);
        log::debug!("[TMX] dark mode now: {}", enabled);
    };

    rsx! {
        button {
            id: "themeToggle",
            onclick: on_click,
            if dark { "☀️ Light Mode" } else { "🌙 Dark Mode" }
        }
    }
}
