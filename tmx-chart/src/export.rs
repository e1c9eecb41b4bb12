//! PNG export of the rendered matrix.
//!
//! The scene is serialized to SVG and rasterized with resvg onto a canvas
//! that is larger than the scene by the configured padding and pre-filled
//! white. The scene is drawn at the top-left corner.

use crate::config::MatrixConfig;
use crate::scene::Scene;
use crate::svg::render_svg;
use anyhow::Context;
use resvg::tiny_skia;
use resvg::usvg::{Options, Tree};
use std::path::Path;

/// Canvas size in whole pixels for `scene`.
pub fn canvas_size(scene: &Scene, config: &MatrixConfig) -> (u32, u32) {
    scene.canvas_size(config.export_pad_x, config.export_pad_y)
}

/// Rasterize `scene` and return the encoded PNG bytes.
pub fn render_png(scene: &Scene, config: &MatrixConfig) -> anyhow::Result<Vec<u8>> {
    let svg = render_svg(scene);

    let mut options = Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = Tree::from_str(&svg, &options).context("Failed to parse rendered SVG")?;

    let (width, height) = canvas_size(scene, config);
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).context("Failed to create pixmap")?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    log::info!("[TMX] export: rasterized {}x{} canvas", width, height);
    pixmap.encode_png().context("Failed to encode PNG")
}

/// Write the PNG for `scene` to `path`. Without a scene nothing is written
/// and `Ok(false)` is returned.
pub fn export_png<P: AsRef<Path>>(
    scene: Option<&Scene>,
    path: P,
    config: &MatrixConfig,
) -> anyhow::Result<bool> {
    let Some(scene) = scene else {
        log::warn!("[TMX] export: no chart rendered, nothing to export");
        return Ok(false);
    };
    let path = path.as_ref();
    let bytes = render_png(scene, config)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("[TMX] export: wrote {}", path.display());
    Ok(true)
}
