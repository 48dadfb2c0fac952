//! Timestamped sensor readings.

use chrono::{DateTime, Utc};

use crate::{CoreError, CoreResult, Real};

/// Instant type used for every series.
pub type Timestamp = DateTime<Utc>;

/// A single reading of a time series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub timestamp: Timestamp,
    pub value: Real,
}

impl Sample {
    pub fn new(timestamp: Timestamp, value: Real) -> Self {
        Self { timestamp, value }
    }
}

/// Whole seconds from `from` to `to`, truncated toward zero.
#[inline]
pub fn whole_seconds_between(from: Timestamp, to: Timestamp) -> i64 {
    (to - from).num_seconds()
}

/// Whole minutes from `from` to `to`, truncated toward zero.
#[inline]
pub fn whole_minutes_between(from: Timestamp, to: Timestamp) -> i64 {
    (to - from).num_minutes()
}

/// Check that timestamps never go backwards.
///
/// Equal consecutive timestamps are accepted.
pub fn ensure_ordered(series: &[Sample], what: &'static str) -> CoreResult<()> {
    for (index, pair) in series.windows(2).enumerate() {
        if pair[1].timestamp < pair[0].timestamp {
            return Err(CoreError::UnorderedInput {
                what,
                index: index + 1,
            });
        }
    }
    Ok(())
}

/// Check that every value is finite.
pub fn ensure_finite_values(series: &[Sample], what: &'static str) -> CoreResult<()> {
    for sample in series {
        crate::ensure_finite(sample.value, what)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t(minutes: i64) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 15, 6, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    #[test]
    fn ordered_series_passes() {
        let series = vec![
            Sample::new(t(0), 18.0),
            Sample::new(t(5), 19.0),
            Sample::new(t(5), 19.5),
        ];
        assert!(ensure_ordered(&series, "measured").is_ok());
    }

    #[test]
    fn unordered_series_reports_index() {
        let series = vec![
            Sample::new(t(0), 18.0),
            Sample::new(t(10), 19.0),
            Sample::new(t(5), 19.5),
        ];
        let err = ensure_ordered(&series, "setpoint").unwrap_err();
        assert_eq!(
            err,
            CoreError::UnorderedInput {
                what: "setpoint",
                index: 2
            }
        );
    }

    #[test]
    fn empty_and_single_series_are_ordered() {
        assert!(ensure_ordered(&[], "setpoint").is_ok());
        assert!(ensure_ordered(&[Sample::new(t(0), 1.0)], "setpoint").is_ok());
    }

    #[test]
    fn non_finite_value_rejected() {
        let series = vec![Sample::new(t(0), 18.0), Sample::new(t(1), f64::NAN)];
        assert!(matches!(
            ensure_finite_values(&series, "measured"),
            Err(CoreError::NonFinite { .. })
        ));
    }

    #[test]
    fn durations_truncate() {
        let start = t(0);
        let later = start + Duration::seconds(119);
        assert_eq!(whole_minutes_between(start, later), 1);
        assert_eq!(whole_seconds_between(start, later), 119);
        assert_eq!(whole_minutes_between(later, start), -1);
    }
}
