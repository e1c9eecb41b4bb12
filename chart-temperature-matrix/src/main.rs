//! Hong Kong Monthly Temperature Matrix
//!
//! One column per year and one row per month. Each cell is colored by the
//! month's highest daily max (or lowest daily min) and carries a sparkline of
//! the month's daily max and min. Clicking the chart toggles between the two
//! modes; the year selectors pick the columns shown.
//!
//! Data flow:
//! 1. `build.rs` copies `temperature_daily.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite database and a
//!    `MatrixSession` is started on it (last ten years, MAX mode).
//! 4. Range changes and mode toggles go through the session; the matrix
//!    component redraws from the session's scene.

use anyhow::Context as _;
use dioxus::prelude::*;
use tmx_chart::config::MatrixConfig;
use tmx_chart::session::MatrixSession;
use tmx_chart_ui::components::{
    ChartContainer, ChartHeader, DownloadButton, ErrorDisplay, LoadingSpinner, ModeIndicator,
    TemperatureMatrix, ThemeToggle, TooltipLayer, YearRangePicker,
};
use tmx_chart_ui::state::AppState;
use tmx_db::Database;

/// Daily max/min temperature series.
const TEMPERATURE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/temperature_daily.csv"));

/// DOM id of the chart container.
const CHART_ID: &str = "chart";

/// Page styling for the light and dark themes.
const PAGE_CSS: &str = "\
body { background: #ffffff; color: #222; }\
body.dark-mode { background: #15171a; color: #e6e6e6; }\
body.dark-mode #chart text { fill: #e6e6e6; }\
body.dark-mode #tooltip { background: rgba(30,32,36,0.96) !important; color: #eee !important; border-color: #444 !important; }\
body.dark-mode #load-error { background: rgba(239,83,80,0.16) !important; border-color: rgba(239,83,80,0.5) !important; }\
.controls button, .controls select { font-size: 13px; padding: 3px 8px; }";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("temperature-matrix-root"))
        .launch(App);
}

fn start_session() -> anyhow::Result<MatrixSession> {
    let db = Database::new().context("Database initialization failed")?;
    let report = db
        .load_observations(TEMPERATURE_CSV)
        .context("Failed to load temperature data")?;
    if report.skipped > 0 {
        web_sys::console::warn_1(
            &format!("[TMX] skipped {} rows with unreadable dates", report.skipped).into(),
        );
    }
    MatrixSession::new(db, MatrixConfig::default()).context("Failed to build the matrix")
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Initialize database and session on mount
    use_effect(move || {
        match start_session() {
            Ok(session) => {
                log::info!(
                    "[TMX] loaded {} cells for {}",
                    session.cells().len(),
                    session.scene().title
                );
                state.session.set(Some(session));
            }
            Err(e) => {
                log::error!("[TMX] {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
        state.loading.set(false);
    });

    let title = state
        .session
        .read()
        .as_ref()
        .map(|s| s.scene().title.clone())
        .unwrap_or_else(|| MatrixConfig::default().title_prefix);

    rsx! {
        style { {PAGE_CSS} }
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: title,
                hint: "Cell color: monthly max or min. Lines: daily max (dark) and daily min (light).".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    class: "controls",
                    style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center; margin-bottom: 8px;",
                    YearRangePicker {}
                    ModeIndicator {}
                    ThemeToggle {}
                    DownloadButton {}
                }

                ChartContainer {
                    id: CHART_ID.to_string(),
                    min_height: 640,
                    TemperatureMatrix {}
                }

                TooltipLayer {}
            }
        }
    }
}
