//! PNG download of the current matrix.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use tmx_chart::svg::render_svg;

/// Serializes the current scene and hands it to the browser for rasterizing.
/// Does nothing until a session exists.
#[component]
pub fn DownloadButton() -> Element {
    let state = use_context::<AppState>();

    let on_click = move |evt: MouseEvent| {
        evt.stop_propagation();
        let session = state.session.read();
        let Some(session) = session.as_ref() else {
            return;
        };
        let config = session.config();
        let scene = session.scene();
        let (width, height) = scene.canvas_size(config.export_pad_x, config.export_pad_y);
        js_bridge::download_png(&render_svg(scene), width, height, &config.export_file_name);
        log::info!("[TMX] download requested: {}", config.export_file_name);
    };

    rsx! {
        button {
            id: "downloadBtn",
            onclick: on_click,
            "Download PNG"
        }
    }
}
