//! Typed query methods for retrieving temperature data from the database.
//!
//! Temperatures stored as NULL come back as `NaN` inside
//! [`DailyObservation`], so the grid builder sees exactly what the row parser
//! produced.

use crate::models::MonthSummary;
use crate::Database;
use rusqlite::params;
use tmx_core::domain::ValueDomain;
use tmx_core::observation::DailyObservation;
use tmx_core::year_range::YearRange;
use tmx_utils::dates;

impl Database {
    /// Total number of stored daily rows.
    pub fn query_observation_count(&self) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        let count = conn.query_row("SELECT COUNT(*) FROM observations", [], |row| row.get(0))?;
        Ok(count)
    }

    /// First and last calendar year with any row, or `None` when empty.
    pub fn query_year_extent(&self) -> anyhow::Result<Option<YearRange>> {
        let conn = self.conn.borrow();
        let (min, max): (Option<i32>, Option<i32>) = conn.query_row(
            "SELECT MIN(year), MAX(year) FROM observations",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        let extent = match (min, max) {
            (Some(min), Some(max)) => Some(YearRange::new(min, max)),
            _ => None,
        };
        log::info!("[TMX] query: query_year_extent = {:?}", extent);
        Ok(extent)
    }

    /// Global [min, max] over both temperature columns of the whole dataset.
    ///
    /// NULL (non-numeric) values are ignored. `None` when no numeric value
    /// exists.
    pub fn query_value_domain(&self) -> anyhow::Result<Option<ValueDomain>> {
        let conn = self.conn.borrow();
        let (min, max): (Option<f64>, Option<f64>) = conn.query_row(
            "SELECT MIN(v), MAX(v) FROM (
                 SELECT max_temperature AS v FROM observations
                 UNION ALL
                 SELECT min_temperature AS v FROM observations
             )",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        let domain = match (min, max) {
            (Some(min), Some(max)) => Some(ValueDomain::new(min, max)),
            _ => None,
        };
        log::info!("[TMX] query: query_value_domain = {:?}", domain);
        Ok(domain)
    }

    /// Every observation whose year falls in `range`, ordered by date and
    /// then load order.
    pub fn query_observations(&self, range: YearRange) -> anyhow::Result<Vec<DailyObservation>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT date, max_temperature, min_temperature FROM observations
             WHERE year >= ?1 AND year <= ?2
             ORDER BY date, rowid",
        )?;
        let raw_rows: Vec<(String, Option<f64>, Option<f64>)> = stmt
            .query_map(params![range.start(), range.end()], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut results = Vec::with_capacity(raw_rows.len());
        for (date_str, max, min) in raw_rows {
            let date = dates::parse_date(&date_str)?;
            results.push(DailyObservation::new(
                date,
                max.unwrap_or(f64::NAN),
                min.unwrap_or(f64::NAN),
            ));
        }
        log::info!(
            "[TMX] query: query_observations({}-{}) returned {} records",
            range.start(),
            range.end(),
            results.len()
        );
        Ok(results)
    }

    /// Monthly max/min computed in SQL for every (year, month) with rows.
    ///
    /// Months without rows are absent; the grid builder is what fills them in.
    pub fn query_monthly_summaries(&self, range: YearRange) -> anyhow::Result<Vec<MonthSummary>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year, month, COUNT(*), MAX(max_temperature), MIN(min_temperature)
             FROM observations
             WHERE year >= ?1 AND year <= ?2
             GROUP BY year, month
             ORDER BY year, month",
        )?;
        let rows = stmt
            .query_map(params![range.start(), range.end()], |row| {
                Ok(MonthSummary {
                    year: row.get(0)?,
                    month: row.get(1)?,
                    days: row.get(2)?,
                    month_max: row.get(3)?,
                    month_min: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[TMX] query: query_monthly_summaries returned {} records",
            rows.len()
        );
        Ok(rows)
    }
}
