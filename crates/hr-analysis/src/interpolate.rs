//! Crossing-time interpolation between two measured samples.

use chrono::TimeDelta;
use hr_core::{Real, Sample, Timestamp, round_half_up, whole_seconds_between};
use serde::Serialize;

/// A bracketing sample pair that cannot produce a crossing instant.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize)]
pub enum DegenerateSample {
    #[error("No whole second elapsed between {from} and {to}")]
    NoElapsedTime { from: Timestamp, to: Timestamp },

    #[error("Temperature did not change between samples ({from_value} -> {to_value})")]
    FlatRate { from_value: Real, to_value: Real },

    #[error("Crossing offset of {offset_s} s is outside the sample pair")]
    OffsetOutOfRange { offset_s: Real },
}

/// Linearly interpolate the instant `desired` was met between `prev` and `curr`.
///
/// The rate of change is taken per whole second. The offset from `prev` is
/// rounded to whole seconds.
pub fn interpolate_reached(
    prev: &Sample,
    curr: &Sample,
    desired: Real,
) -> Result<Timestamp, DegenerateSample> {
    let elapsed_s = whole_seconds_between(prev.timestamp, curr.timestamp);
    if elapsed_s <= 0 {
        return Err(DegenerateSample::NoElapsedTime {
            from: prev.timestamp,
            to: curr.timestamp,
        });
    }

    let rate = (curr.value - prev.value) / elapsed_s as Real;
    if rate == 0.0 || !rate.is_finite() {
        return Err(DegenerateSample::FlatRate {
            from_value: prev.value,
            to_value: curr.value,
        });
    }

    let offset_s = round_half_up((desired - prev.value) / rate);
    if !offset_s.is_finite() || offset_s < 0.0 {
        return Err(DegenerateSample::OffsetOutOfRange { offset_s });
    }

    TimeDelta::try_seconds(offset_s as i64)
        .and_then(|offset| prev.timestamp.checked_add_signed(offset))
        .ok_or(DegenerateSample::OffsetOutOfRange { offset_s })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn t(seconds: i64) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 15, 6, 0, 0).unwrap() + Duration::seconds(seconds)
    }

    #[test]
    fn exact_boundary_needs_no_extrapolation() {
        let prev = Sample::new(t(300), 19.0);
        let curr = Sample::new(t(600), 20.0);
        assert_eq!(interpolate_reached(&prev, &curr, 20.0), Ok(t(600)));
    }

    #[test]
    fn midpoint_crossing() {
        let prev = Sample::new(t(0), 19.0);
        let curr = Sample::new(t(600), 21.0);
        assert_eq!(interpolate_reached(&prev, &curr, 20.0), Ok(t(300)));
    }

    #[test]
    fn offset_rounds_to_whole_seconds() {
        // 1 degree over 7 s, a third of a degree needed -> 2.33 s
        let prev = Sample::new(t(0), 19.0);
        let curr = Sample::new(t(7), 20.0);
        assert_eq!(interpolate_reached(&prev, &curr, 19.0 + 1.0 / 3.0), Ok(t(2)));
    }

    #[test]
    fn flat_pair_is_degenerate() {
        let prev = Sample::new(t(0), 20.0);
        let curr = Sample::new(t(60), 20.0);
        assert_eq!(
            interpolate_reached(&prev, &curr, 20.0),
            Err(DegenerateSample::FlatRate {
                from_value: 20.0,
                to_value: 20.0
            })
        );
    }

    #[test]
    fn same_instant_is_degenerate() {
        let sample = Sample::new(t(0), 21.0);
        assert!(matches!(
            interpolate_reached(&sample, &sample, 20.0),
            Err(DegenerateSample::NoElapsedTime { .. })
        ));
    }

    #[test]
    fn sub_second_gap_is_degenerate() {
        let prev = Sample::new(t(0), 19.0);
        let curr = Sample::new(t(0) + Duration::milliseconds(400), 21.0);
        assert!(matches!(
            interpolate_reached(&prev, &curr, 20.0),
            Err(DegenerateSample::NoElapsedTime { .. })
        ));
    }

    #[test]
    fn target_below_both_samples_is_degenerate() {
        let prev = Sample::new(t(0), 21.0);
        let curr = Sample::new(t(60), 22.0);
        assert!(matches!(
            interpolate_reached(&prev, &curr, 20.0),
            Err(DegenerateSample::OffsetOutOfRange { .. })
        ));
    }
}
