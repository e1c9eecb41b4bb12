use crate::month_cell::MonthCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tmx_utils::error::ParseError;

/// Which monthly aggregate drives cell color and tooltip emphasis.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Max,
    Min,
}

impl DisplayMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Max => DisplayMode::Min,
            DisplayMode::Min => DisplayMode::Max,
        }
    }

    /// Text for the mode indicator ("MAX" / "MIN").
    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Max => "MAX",
            DisplayMode::Min => "MIN",
        }
    }

    pub fn legend_title(self) -> &'static str {
        match self {
            DisplayMode::Max => "Monthly Max (°C)",
            DisplayMode::Min => "Monthly Min (°C)",
        }
    }

    /// The aggregate this mode reads from a cell; `None` for missing cells.
    pub fn value_of(self, cell: &MonthCell) -> Option<f64> {
        match self {
            DisplayMode::Max => cell.month_max,
            DisplayMode::Min => cell.month_min,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Max => write!(f, "max"),
            DisplayMode::Min => write!(f, "min"),
        }
    }
}

impl FromStr for DisplayMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" => Ok(DisplayMode::Max),
            "min" => Ok(DisplayMode::Min),
            other => Err(ParseError(format!(
                "unknown display mode '{}', expected 'max' or 'min'",
                other
            ))),
        }
    }
}
