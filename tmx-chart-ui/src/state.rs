//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use tmx_chart::session::MatrixSession;
use tmx_chart::tooltip::TooltipContent;

/// Offset of the tooltip from the pointer, in px.
pub const TOOLTIP_OFFSET: f64 = 12.0;

/// A visible tooltip and its page position.
#[derive(Clone, PartialEq, Debug)]
pub struct TooltipState {
    pub content: TooltipContent,
    pub left: f64,
    pub top: f64,
}

impl TooltipState {
    /// Place `content` below and right of the pointer at (`page_x`, `page_y`).
    pub fn at_pointer(content: TooltipContent, page_x: f64, page_y: f64) -> Self {
        TooltipState {
            content,
            left: page_x + TOOLTIP_OFFSET,
            top: page_y + TOOLTIP_OFFSET,
        }
    }
}

/// Shared application state for the matrix app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Matrix session (None until the data is loaded)
    pub session: Signal<Option<MatrixSession>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Dark page styling
    pub dark_mode: Signal<bool>,
    /// Tooltip for the hovered cell
    pub tooltip: Signal<Option<TooltipState>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            dark_mode: Signal::new(false),
            tooltip: Signal::new(None),
        }
    }

    /// Run `f` against the session, reporting an error in the error box.
    pub fn update_session<F>(&mut self, f: F)
    where
        F: FnOnce(&mut MatrixSession) -> anyhow::Result<()>,
    {
        let result = match self.session.write().as_mut() {
            Some(session) => f(session),
            None => return,
        };
        if let Err(e) = result {
            log::error!("[TMX] {:#}", e);
            self.error_msg.set(Some(format!("{:#}", e)));
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
