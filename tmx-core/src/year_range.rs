use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Number of years shown before the user picks a range.
pub const DEFAULT_SPAN_YEARS: i32 = 10;

/// An inclusive range of calendar years. The start never exceeds the end.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Hash, Serialize, Deserialize)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Build a range from two selector values, swapping them if inverted.
    pub fn new(start: i32, end: i32) -> Self {
        if start > end {
            YearRange {
                start: end,
                end: start,
            }
        } else {
            YearRange { start, end }
        }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    /// Number of years in the range (always at least 1).
    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// A range always holds at least one year.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// Every year in the range, ascending.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }

    /// Clamp both ends into `extent`.
    pub fn clamp_to(&self, extent: YearRange) -> Self {
        YearRange::new(
            self.start.clamp(extent.start, extent.end),
            self.end.clamp(extent.start, extent.end),
        )
    }

    /// The trailing `span` years of `extent`, or all of it when shorter.
    pub fn trailing(extent: YearRange, span: i32) -> Self {
        let end = extent.end;
        let start = extent.start.max(end - (span.max(1) - 1));
        YearRange { start, end }
    }

    /// The default selection: the last ten years of the dataset.
    pub fn default_for(extent: YearRange) -> Self {
        Self::trailing(extent, DEFAULT_SPAN_YEARS)
    }
}

impl IntoIterator for YearRange {
    type Item = i32;
    type IntoIter = RangeInclusive<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.years()
    }
}
