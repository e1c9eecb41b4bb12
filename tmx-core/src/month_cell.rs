use crate::observation::DailyPoint;
use serde::{Deserialize, Serialize};
use tmx_utils::dates;

/// One (year, month) slot of the matrix.
///
/// Missing cells carry `None` aggregates and no daily points. Present cells
/// keep their daily points sorted by day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthCell {
    pub year: i32,
    /// Zero-based month (0 = January).
    pub month: u32,
    pub missing: bool,
    pub month_max: Option<f64>,
    pub month_min: Option<f64>,
    pub daily: Vec<DailyPoint>,
}

impl MonthCell {
    pub fn missing(year: i32, month: u32) -> Self {
        MonthCell {
            year,
            month,
            missing: true,
            month_max: None,
            month_min: None,
            daily: Vec::new(),
        }
    }

    /// Aggregate a month's daily points. An empty list yields a missing cell.
    ///
    /// NaN temperatures are skipped by the max/min folds; a month made only of
    /// NaN values ends up with NaN aggregates.
    pub fn from_points(year: i32, month: u32, mut daily: Vec<DailyPoint>) -> Self {
        if daily.is_empty() {
            return MonthCell::missing(year, month);
        }
        daily.sort_by_key(|p| p.day);
        let month_max = daily.iter().map(|p| p.max).fold(f64::NAN, f64::max);
        let month_min = daily.iter().map(|p| p.min).fold(f64::NAN, f64::min);
        MonthCell {
            year,
            month,
            missing: false,
            month_max: Some(month_max),
            month_min: Some(month_min),
            daily,
        }
    }

    /// Stable identity for keyed rendering: "{year}-{month0}".
    pub fn key(&self) -> String {
        format!("{}-{}", self.year, self.month)
    }

    /// "YYYY-MM" heading used by tooltips.
    pub fn label(&self) -> String {
        dates::year_month_label(self.year, self.month)
    }

    /// First and last day with data, for the sparkline x domain.
    pub fn day_extent(&self) -> Option<(u32, u32)> {
        let first = self.daily.first()?.day;
        let last = self.daily.last()?.day;
        Some((first, last))
    }
}
