//! Hover tooltip content for a month cell.

use serde::Serialize;
use std::fmt;
use tmx_core::display_mode::DisplayMode;
use tmx_core::month_cell::MonthCell;

pub const NO_DATA: &str = "No data";
pub const SPARKLINE_NOTE: &str = "(Sparkline shows daily max & min)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipLine {
    pub label: &'static str,
    /// Value with one decimal and unit, e.g. "31.0 °C".
    pub value: String,
    /// True for the line matching the active display mode.
    pub emphasized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipContent {
    /// "YYYY-MM"
    pub heading: String,
    /// Empty for missing cells.
    pub lines: Vec<TooltipLine>,
    /// `NO_DATA` for missing cells, the sparkline note otherwise.
    pub note: &'static str,
}

impl TooltipContent {
    pub fn is_missing(&self) -> bool {
        self.lines.is_empty()
    }
}

fn format_celsius(value: f64) -> String {
    format!("{:.1} °C", value)
}

/// Tooltip for `cell` with the `mode` line emphasized.
pub fn format_tooltip(cell: &MonthCell, mode: DisplayMode) -> TooltipContent {
    let heading = cell.label();
    let (Some(max), Some(min)) = (cell.month_max, cell.month_min) else {
        return TooltipContent {
            heading,
            lines: Vec::new(),
            note: NO_DATA,
        };
    };
    TooltipContent {
        heading,
        lines: vec![
            TooltipLine {
                label: "Monthly Max:",
                value: format_celsius(max),
                emphasized: mode == DisplayMode::Max,
            },
            TooltipLine {
                label: "Monthly Min:",
                value: format_celsius(min),
                emphasized: mode == DisplayMode::Min,
            },
        ],
        note: SPARKLINE_NOTE,
    }
}

/// Plain-text rendering; the emphasized line is marked with `*`.
impl fmt::Display for TooltipContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for line in &self.lines {
            let marker = if line.emphasized { "*" } else { " " };
            writeln!(f, "{} {} {}", marker, line.label, line.value)?;
        }
        write!(f, "{}", self.note)
    }
}
