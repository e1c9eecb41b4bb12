//! Layout and styling constants for the matrix.
//!
//! Every field has a default, and `#[serde(default)]` lets a JSON file
//! override only the keys it names.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Margin {
            top: 30.0,
            right: 90.0,
            bottom: 30.0,
            left: 90.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    pub margin: Margin,
    /// Band step per year column, in px.
    pub cell_width: f64,
    /// Band step per month row, in px.
    pub cell_height: f64,
    /// Fraction of each band step left empty between cells.
    pub padding_inner: f64,
    /// Inset of the sparkline inside its cell.
    pub spark_pad: f64,
    /// Room reserved right of the matrix for the legend.
    pub extra_right: f64,
    pub corner_radius: f64,
    pub legend_width: f64,
    pub legend_height: f64,
    /// Legend distance left of the right margin.
    pub legend_offset: f64,
    pub legend_ticks: usize,
    /// Number of gradient intervals; the legend has one more stop than this.
    pub gradient_steps: usize,
    pub missing_fill: String,
    pub cell_stroke: String,
    pub max_line_color: String,
    pub min_line_color: String,
    pub font_family: String,
    pub title_prefix: String,
    pub export_file_name: String,
    /// Extra canvas width added around the scene when rasterizing.
    pub export_pad_x: f64,
    /// Extra canvas height added around the scene when rasterizing.
    pub export_pad_y: f64,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        MatrixConfig {
            margin: Margin::default(),
            cell_width: 70.0,
            cell_height: 48.0,
            padding_inner: 0.15,
            spark_pad: 6.0,
            extra_right: 120.0,
            corner_radius: 6.0,
            legend_width: 12.0,
            legend_height: 220.0,
            legend_offset: 80.0,
            legend_ticks: 6,
            gradient_steps: 10,
            missing_fill: "#f3f3f3".to_string(),
            cell_stroke: "rgba(0,0,0,0.12)".to_string(),
            max_line_color: "#2b2b2b".to_string(),
            min_line_color: "#ffffff".to_string(),
            font_family: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif"
                .to_string(),
            title_prefix: "Hong Kong Monthly Temperature".to_string(),
            export_file_name: "hong_kong_temperature_matrix.png".to_string(),
            export_pad_x: 200.0,
            export_pad_y: 100.0,
        }
    }
}

impl MatrixConfig {
    /// Parse a (possibly partial) JSON config.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Chart title for a year range, e.g. "Hong Kong Monthly Temperature (2015–2024)".
    pub fn title(&self, start_year: i32, end_year: i32) -> String {
        format!("{} ({}–{})", self.title_prefix, start_year, end_year)
    }
}
