//! Heating interval detection from a setpoint series.

use hr_core::{Real, Sample, Timestamp};
use serde::Serialize;

/// A period during which the setpoint was raised and held at `desired`
/// before being lowered again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatingInterval {
    /// Last rising setpoint sample before the plateau.
    pub start: Timestamp,
    /// Setpoint sample at which the plateau dropped.
    pub end: Timestamp,
    /// Setpoint held during the plateau.
    pub desired: Real,
    /// Measured temperature at the first sample strictly inside `(start, end)`.
    pub start_temp: Option<Real>,
    /// Interpolated instant the measured temperature met `desired`.
    pub reached: Option<Timestamp>,
    /// Cleared when matching found the interval unusable.
    pub valid: bool,
}

impl HeatingInterval {
    pub fn new(start: Timestamp, end: Timestamp, desired: Real) -> Self {
        Self {
            start,
            end,
            desired,
            start_temp: None,
            reached: None,
            valid: true,
        }
    }

    /// True when the instant lies strictly between `start` and `end`.
    pub fn contains(&self, at: Timestamp) -> bool {
        self.start < at && at < self.end
    }

    /// Start temperature and reached instant are both known, and the
    /// interval was not rejected.
    pub fn is_completed(&self) -> bool {
        self.valid && self.start_temp.is_some() && self.reached.is_some()
    }
}

/// Scan a setpoint series and emit one interval per plateau-then-drop.
///
/// When the setpoint ramps over several samples the last rising sample is the
/// start. A plateau still open at the end of the series is not emitted.
pub fn detect_intervals(setpoint: &[Sample]) -> Vec<HeatingInterval> {
    let Some(first) = setpoint.first() else {
        return Vec::new();
    };

    let mut intervals = Vec::new();
    let mut last_value = first.value;
    let mut pending_start = first.timestamp;

    for sample in setpoint {
        if sample.value > last_value {
            pending_start = sample.timestamp;
        } else if sample.value < last_value {
            intervals.push(HeatingInterval::new(
                pending_start,
                sample.timestamp,
                last_value,
            ));
        }
        last_value = sample.value;
    }

    tracing::debug!(
        samples = setpoint.len(),
        intervals = intervals.len(),
        "Detected heating intervals"
    );
    intervals
}
