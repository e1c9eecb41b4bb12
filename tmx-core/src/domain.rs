use crate::observation::DailyObservation;
use serde::{Deserialize, Serialize};

/// The [min, max] of every daily max and min in the whole dataset.
///
/// Computed once per session so colors mean the same thing whatever year
/// range is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    pub fn new(min: f64, max: f64) -> Self {
        ValueDomain { min, max }
    }

    /// Domain over both temperature columns. NaN and infinite values are ignored; `None`
    /// when nothing numeric is left.
    pub fn from_observations(observations: &[DailyObservation]) -> Option<Self> {
        extent(observations.iter().flat_map(|o| [o.max, o.min]))
            .map(|(min, max)| ValueDomain { min, max })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Linear interpolation across the domain, `t` in [0, 1].
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + t * self.span()
    }
}

/// Min and max of the finite values, or `None` if there are none.
pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_domain_spans_both_columns() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let data = vec![
            DailyObservation::new(date, 30.0, 22.0),
            DailyObservation::new(date, 12.0, 5.5),
            DailyObservation::new(date, 35.1, f64::NAN),
        ];
        let domain = ValueDomain::from_observations(&data).unwrap();
        assert_eq!(domain, ValueDomain::new(5.5, 35.1));
    }

    #[test]
    fn test_domain_of_nothing_is_none() {
        assert!(ValueDomain::from_observations(&[]).is_none());
        assert!(extent([f64::NAN, f64::NAN]).is_none());
    }

    #[test]
    fn test_extent_skips_infinities() {
        assert_eq!(
            extent([12.0, f64::INFINITY, f64::NAN, 30.5, f64::NEG_INFINITY]),
            Some((12.0, 30.5))
        );
        assert!(extent([f64::INFINITY]).is_none());
    }

    #[test]
    fn test_lerp() {
        let domain = ValueDomain::new(10.0, 30.0);
        assert!((domain.lerp(0.0) - 10.0).abs() < 1e-9);
        assert!((domain.lerp(0.5) - 20.0).abs() < 1e-9);
        assert!((domain.lerp(1.0) - 30.0).abs() < 1e-9);
    }
}
