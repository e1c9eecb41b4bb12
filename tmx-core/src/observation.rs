use chrono::{Datelike, NaiveDate};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use tmx_utils::dates;

/// A raw row from the daily temperature CSV.
///
/// Expected headers: `date,max_temperature,min_temperature`. Extra columns
/// are ignored. Temperatures stay as text until [`parse_temperature`] coerces
/// them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemperatureRecord {
    pub date: String,
    #[serde(default)]
    pub max_temperature: String,
    #[serde(default)]
    pub min_temperature: String,
}

/// One day of temperature data (°C).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub year: i32,
    /// Zero-based month (0 = January).
    pub month: u32,
    /// Day of month, 1..=31.
    pub day: u32,
    pub max: f64,
    pub min: f64,
}

/// The part of an observation a month cell keeps for its sparkline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub day: u32,
    pub max: f64,
    pub min: f64,
}

/// Observations parsed from a CSV body, plus the number of rows that were
/// dropped because their date could not be read.
#[derive(Debug, Clone, Default)]
pub struct ParsedObservations {
    pub observations: Vec<DailyObservation>,
    pub skipped: usize,
}

/// Coerce a temperature field to a number. Anything that is not a finite
/// number becomes `NaN` instead of an error, so `inf` never reaches the
/// value domain.
///
/// An empty field is `NaN`, not 0.
pub fn parse_temperature(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(f64::NAN)
}

impl DailyObservation {
    /// Build an observation from a date and the two temperatures.
    pub fn new(date: NaiveDate, max: f64, min: f64) -> Self {
        DailyObservation {
            date,
            year: date.year(),
            month: date.month0(),
            day: date.day(),
            max,
            min,
        }
    }

    /// Parse one CSV record. Only the date can fail.
    pub fn from_record(record: &TemperatureRecord) -> anyhow::Result<Self> {
        let date = dates::parse_date(&record.date)?;
        Ok(DailyObservation::new(
            date,
            parse_temperature(&record.max_temperature),
            parse_temperature(&record.min_temperature),
        ))
    }

    pub fn point(&self) -> DailyPoint {
        DailyPoint {
            day: self.day,
            max: self.max,
            min: self.min,
        }
    }

    /// Parse a daily temperature CSV body (with headers) into observations.
    ///
    /// Rows whose date does not parse are skipped and counted; a structurally
    /// broken CSV is an error.
    pub fn parse_csv(csv_data: &str) -> anyhow::Result<ParsedObservations> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let mut parsed = ParsedObservations::default();
        for result in rdr.deserialize::<TemperatureRecord>() {
            let record = result?;
            match DailyObservation::from_record(&record) {
                Ok(obs) => parsed.observations.push(obs),
                Err(e) => {
                    log::debug!("skipping row with date {:?}: {}", record.date, e);
                    parsed.skipped += 1;
                }
            }
        }
        if parsed.skipped > 0 {
            log::warn!(
                "observation: skipped {} rows with unreadable dates",
                parsed.skipped
            );
        }
        log::info!(
            "observation: parsed {} daily observations",
            parsed.observations.len()
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const STR_RESULT: &str = r#"date,max_temperature,min_temperature
2017-01-01,22.1,16.3
2017-01-02,20.5,15.0
2017-01-03,***,14.2
2017-02-01,18.0,
not-a-date,19.0,12.0
2017-02-02,17.5,11.1
"#;

    #[test]
    fn test_parse_csv_decomposes_dates() {
        let parsed = DailyObservation::parse_csv(STR_RESULT).unwrap();
        let first = parsed.observations[0];
        assert_eq!(first.year, 2017);
        assert_eq!(first.month, 0);
        assert_eq!(first.day, 1);
        assert!((first.max - 22.1).abs() < 1e-9);
        assert!((first.min - 16.3).abs() < 1e-9);

        let feb = parsed.observations[3];
        assert_eq!(feb.month, 1);
        assert_eq!(feb.day, 1);
    }

    #[test]
    fn test_non_numeric_temperature_becomes_nan() {
        let parsed = DailyObservation::parse_csv(STR_RESULT).unwrap();
        assert!(parsed.observations[2].max.is_nan());
        assert!((parsed.observations[2].min - 14.2).abs() < 1e-9);
        // empty field
        assert!(parsed.observations[3].min.is_nan());
    }

    #[test]
    fn test_unreadable_dates_are_skipped_and_counted() {
        let parsed = DailyObservation::parse_csv(STR_RESULT).unwrap();
        assert_eq!(parsed.observations.len(), 5);
        assert_eq!(parsed.skipped, 1);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let csv = "station,date,max_temperature,min_temperature,note\nHKO,2020-07-04,33.0,27.5,hot\n";
        let parsed = DailyObservation::parse_csv(csv).unwrap();
        assert_eq!(parsed.observations.len(), 1);
        assert_eq!(parsed.observations[0].month, 6);
        assert!((parsed.observations[0].max - 33.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_temperature() {
        assert!((parse_temperature(" 12.5 ") - 12.5).abs() < 1e-9);
        assert!((parse_temperature("-3") + 3.0).abs() < 1e-9);
        assert!(parse_temperature("abc").is_nan());
        assert!(parse_temperature("").is_nan());
        assert!(parse_temperature("   ").is_nan());
    }

    #[test]
    fn test_infinite_temperature_becomes_nan() {
        assert!(parse_temperature("inf").is_nan());
        assert!(parse_temperature("-infinity").is_nan());
        assert!(parse_temperature("+Infinity").is_nan());
        assert!(parse_temperature("NaN").is_nan());

        let csv = "date,max_temperature,min_temperature\n2020-08-01,inf,26.0\n";
        let parsed = DailyObservation::parse_csv(csv).unwrap();
        assert!(parsed.observations[0].max.is_nan());
        assert!((parsed.observations[0].min - 26.0).abs() < 1e-9);
    }
}
