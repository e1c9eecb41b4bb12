//! Year x month grid builder.
//!
//! Every (year, month) in the requested range gets exactly one cell, in
//! (year ascending, month ascending) order. Months without observations are
//! emitted as explicit missing cells so the renderer can lay cells out by
//! position alone.

use crate::month_cell::MonthCell;
use crate::observation::{DailyObservation, DailyPoint};
use crate::year_range::YearRange;
use std::collections::HashMap;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Build one cell per (year, month) of `years` from daily observations.
///
/// Observations outside `years` are ignored.
pub fn build_grid(observations: &[DailyObservation], years: YearRange) -> Vec<MonthCell> {
    let mut by_month: HashMap<(i32, u32), Vec<DailyPoint>> = HashMap::new();
    for obs in observations.iter().filter(|o| years.contains(o.year)) {
        by_month
            .entry((obs.year, obs.month))
            .or_default()
            .push(obs.point());
    }

    let mut cells = Vec::with_capacity(years.len() * MONTHS_PER_YEAR as usize);
    for year in years {
        for month in 0..MONTHS_PER_YEAR {
            let cell = match by_month.remove(&(year, month)) {
                Some(points) => MonthCell::from_points(year, month, points),
                None => MonthCell::missing(year, month),
            };
            cells.push(cell);
        }
    }
    log::debug!(
        "grid: built {} cells for {}-{} ({} missing)",
        cells.len(),
        years.start(),
        years.end(),
        cells.iter().filter(|c| c.missing).count()
    );
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(y: i32, m: u32, d: u32, max: f64, min: f64) -> DailyObservation {
        DailyObservation::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), max, min)
    }

    fn sample() -> Vec<DailyObservation> {
        vec![
            obs(2020, 1, 2, 31.0, 21.0),
            obs(2020, 1, 1, 30.0, 22.0),
            obs(2020, 3, 10, 25.0, 18.5),
            obs(2021, 12, 31, 19.0, 12.0),
            obs(2023, 6, 1, 33.0, 27.0),
        ]
    }

    #[test]
    fn grid_length_is_years_times_twelve() {
        let data = sample();
        for (start, end) in [(2020, 2020), (2020, 2021), (2015, 2024), (1990, 2024)] {
            let cells = build_grid(&data, YearRange::new(start, end));
            assert_eq!(cells.len(), ((end - start + 1) * 12) as usize);
        }
    }

    #[test]
    fn grid_is_ordered_by_year_then_month() {
        let cells = build_grid(&sample(), YearRange::new(2020, 2021));
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.year, 2020 + (i / 12) as i32);
            assert_eq!(cell.month, (i % 12) as u32);
        }
    }

    #[test]
    fn present_cells_aggregate_daily_extremes() {
        let cells = build_grid(&sample(), YearRange::new(2020, 2020));
        let jan = &cells[0];
        assert!(!jan.missing);
        assert_eq!(jan.month_max, Some(31.0));
        assert_eq!(jan.month_min, Some(21.0));
        let days: Vec<u32> = jan.daily.iter().map(|p| p.day).collect();
        assert_eq!(days, vec![1, 2]);

        for cell in cells.iter().filter(|c| !c.missing) {
            let max = cell.daily.iter().map(|p| p.max).fold(f64::NAN, f64::max);
            let min = cell.daily.iter().map(|p| p.min).fold(f64::NAN, f64::min);
            assert_eq!(cell.month_max, Some(max));
            assert_eq!(cell.month_min, Some(min));
        }
    }

    #[test]
    fn months_without_rows_are_missing() {
        let cells = build_grid(&sample(), YearRange::new(2020, 2020));
        let feb = &cells[1];
        assert!(feb.missing);
        assert_eq!(feb.month_max, None);
        assert_eq!(feb.month_min, None);
        assert!(feb.daily.is_empty());
        assert_eq!(cells.iter().filter(|c| !c.missing).count(), 2);
    }

    #[test]
    fn year_without_rows_gives_twelve_missing_cells() {
        let cells = build_grid(&sample(), YearRange::new(2022, 2022));
        assert_eq!(cells.len(), 12);
        assert!(cells.iter().all(|c| c.missing));
    }

    #[test]
    fn observations_outside_range_are_ignored() {
        let cells = build_grid(&sample(), YearRange::new(2021, 2021));
        assert_eq!(cells.iter().filter(|c| !c.missing).count(), 1);
        assert_eq!(cells[11].month_max, Some(19.0));
    }

    #[test]
    fn empty_input_gives_all_missing() {
        let cells = build_grid(&[], YearRange::new(2000, 2001));
        assert_eq!(cells.len(), 24);
        assert!(cells.iter().all(|c| c.missing));
    }

    #[test]
    fn rebuilding_is_deterministic() {
        let data = sample();
        let range = YearRange::new(2020, 2023);
        assert_eq!(build_grid(&data, range), build_grid(&data, range));
    }
}
