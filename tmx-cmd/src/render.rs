//! `render`: write the matrix as SVG or PNG.

use anyhow::{bail, Context};
use log::info;
use std::path::Path;
use tmx_chart::export::export_png;
use tmx_chart::session::MatrixSession;
use tmx_chart::svg::render_svg;
use tmx_core::display_mode::DisplayMode;

/// Output formats, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("svg") => Ok(OutputFormat::Svg),
            Some("png") => Ok(OutputFormat::Png),
            _ => bail!(
                "Unsupported output {}: use a .svg or .png file name",
                path.display()
            ),
        }
    }
}

/// Render `session` in `mode` to `output`.
pub fn run_render(session: &mut MatrixSession, mode: DisplayMode, output: &Path) -> anyhow::Result<()> {
    let format = OutputFormat::from_path(output)?;
    session.set_mode(mode);

    match format {
        OutputFormat::Svg => {
            std::fs::write(output, render_svg(session.scene()))
                .with_context(|| format!("Failed to write {}", output.display()))?;
        }
        OutputFormat::Png => {
            export_png(Some(session.scene()), output, session.config())?;
        }
    }

    let range = session.range();
    info!(
        "Rendered {}-{} ({} mode) to {}",
        range.start(),
        range.end(),
        mode,
        output.display()
    );
    Ok(())
}
