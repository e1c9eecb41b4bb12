//! Layout, coloring and export for the temperature matrix.
//!
//! This crate turns month cells into a [`scene::Scene`], a description of
//! everything drawn that has no UI-toolkit dependency. The Dioxus app draws
//! the scene as live SVG elements; [`svg`] writes it as a standalone document
//! and [`export`] rasterizes that document to PNG on native targets.
//!
//! [`session::MatrixSession`] owns the state that changes with user input:
//! the year range, the display mode and the current grid.

pub mod color;
pub mod config;
pub mod scale;
pub mod scene;
pub mod session;
pub mod svg;
pub mod tooltip;

#[cfg(feature = "png")]
pub mod export;
