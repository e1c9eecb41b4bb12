//! Shared Dioxus components and browser bridge for the temperature matrix app.
//!
//! This crate provides:
//! - `js_bridge`: small JS snippets run via `js_sys::eval()` (theme class, PNG download)
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components, including the matrix itself drawn from a `tmx_chart::scene::Scene`

pub mod js_bridge;
pub mod state;
pub mod components;
