//! CSV data loading for populating the in-memory SQLite database.
//!
//! # CSV Format
//!
//! Headers required: `date,max_temperature,min_temperature` (any extra
//! columns are ignored). Dates are ISO `YYYY-MM-DD`; temperatures are °C.

use crate::models::LoadReport;
use crate::Database;
use rusqlite::params;
use tmx_core::observation::DailyObservation;
use tmx_utils::dates;

/// SQLite has no NaN; non-numeric and infinite temperatures are stored as NULL.
fn to_sql_temperature(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

impl Database {
    /// Load daily observations from a CSV string.
    ///
    /// Rows whose date does not parse are skipped and reported in the
    /// returned [`LoadReport`]. Loading appends; calling it twice with the
    /// same data stores every row twice.
    ///
    /// # Example CSV
    /// ```text
    /// date,max_temperature,min_temperature
    /// 2022-07-01,33.1,27.9
    /// 2022-07-02,32.4,27.0
    /// ```
    pub fn load_observations(&self, csv_data: &str) -> anyhow::Result<LoadReport> {
        let parsed = DailyObservation::parse_csv(csv_data)?;
        let loaded = self.insert_observations(&parsed.observations)?;
        log::info!(
            "loader: Loaded {} observations, skipped {} with unreadable dates",
            loaded,
            parsed.skipped
        );
        Ok(LoadReport {
            loaded,
            skipped: parsed.skipped,
        })
    }

    /// Insert already-parsed observations in a single transaction.
    pub fn insert_observations(&self, observations: &[DailyObservation]) -> anyhow::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO observations (date, year, month, day, max_temperature, min_temperature)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for obs in observations {
                stmt.execute(params![
                    dates::format_date(&obs.date),
                    obs.year,
                    obs.month,
                    obs.day,
                    to_sql_temperature(obs.max),
                    to_sql_temperature(obs.min),
                ])?;
            }
        }
        tx.commit()?;
        Ok(observations.len())
    }
}
