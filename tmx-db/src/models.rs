//! Query result model structs.
//!
//! All structs derive `Serialize` so the CLI can print them as JSON.

use serde::Serialize;

/// Outcome of loading one CSV body into the store.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Rows inserted into `observations`.
    pub loaded: usize,
    /// Rows dropped because their date could not be parsed.
    pub skipped: usize,
}

/// SQL-side monthly aggregate for one (year, month) that has rows.
///
/// `MAX`/`MIN` skip NULL temperatures, so a month whose values are all
/// non-numeric reports `None`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthSummary {
    pub year: i32,
    /// Zero-based month (0 = January).
    pub month: u32,
    /// Number of daily rows in the month.
    pub days: u32,
    pub month_max: Option<f64>,
    pub month_min: Option<f64>,
}
