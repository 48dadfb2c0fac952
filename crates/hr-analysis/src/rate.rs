//! Heating rates from completed intervals.

use hr_core::{Real, Timestamp, round2, whole_minutes_between};
use serde::Serialize;
use tracing::debug;

use crate::interval::HeatingInterval;

/// Minutes of heating per degree of temperature rise for one interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateSample {
    /// Measured temperature when the interval began.
    pub start_temp: Real,
    /// Setpoint minus start temperature, two decimals.
    pub needed_degrees: Real,
    /// Whole minutes to reach the setpoint divided by `needed_degrees`, two decimals.
    pub rate_per_degree: Real,
    pub started_at: Timestamp,
    pub duration_minutes: i64,
}

/// A completed interval that produced no rate sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RateSkip {
    /// The recorded start temperature was already above the setpoint.
    NegativeNeededDegrees { index: usize, needed_degrees: Real },
    /// Dividing by the needed degrees gave no finite rate.
    NonFiniteRate {
        index: usize,
        needed_degrees: Real,
        duration_minutes: i64,
    },
}

/// Rate samples sorted by needed degrees, plus what was left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RateTable {
    pub samples: Vec<RateSample>,
    pub skipped: Vec<RateSkip>,
}

impl RateTable {
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Convert completed intervals into rate samples.
///
/// Incomplete or rejected intervals are passed over silently. The result is
/// stably sorted ascending by `needed_degrees`.
pub fn calculate_rates(intervals: &[HeatingInterval]) -> RateTable {
    let mut table = RateTable::default();

    for (index, interval) in intervals.iter().enumerate() {
        if !interval.is_completed() {
            continue;
        }
        let (Some(start_temp), Some(reached)) = (interval.start_temp, interval.reached) else {
            continue;
        };

        let needed_degrees = round2(interval.desired - start_temp);
        if needed_degrees < 0.0 {
            debug!(index, needed_degrees, "Start temperature above setpoint, skipping");
            table.skipped.push(RateSkip::NegativeNeededDegrees {
                index,
                needed_degrees,
            });
            continue;
        }

        let duration_minutes = whole_minutes_between(interval.start, reached);
        let rate_per_degree = round2(duration_minutes as Real / needed_degrees);
        if !rate_per_degree.is_finite() {
            debug!(index, needed_degrees, duration_minutes, "No finite rate, skipping");
            table.skipped.push(RateSkip::NonFiniteRate {
                index,
                needed_degrees,
                duration_minutes,
            });
            continue;
        }

        table.samples.push(RateSample {
            start_temp,
            needed_degrees,
            rate_per_degree,
            started_at: interval.start,
            duration_minutes,
        });
    }

    table
        .samples
        .sort_by(|a, b| a.needed_degrees.total_cmp(&b.needed_degrees));
    table
}
