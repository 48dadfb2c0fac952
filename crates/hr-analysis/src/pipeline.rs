//! Per-zone pipeline: detect, match, rate.

use hr_core::{Sample, ensure_finite_values, ensure_ordered};
use serde::Serialize;
use tracing::info;

use crate::band::{RateBand, bucketize};
use crate::error::{AnalysisError, AnalysisResult};
use crate::interval::{HeatingInterval, detect_intervals};
use crate::matcher::{IntervalIssue, match_durations};
use crate::rate::{RateTable, calculate_rates};

/// Options for a single zone run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Reject series that are out of order or carry non-finite values.
    pub validate_input: bool,
}

/// Everything one zone run produced. Owned by the caller; nothing is shared
/// between runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneAnalysis {
    pub zone: String,
    pub intervals: Vec<HeatingInterval>,
    pub issues: Vec<IntervalIssue>,
    pub rates: RateTable,
}

impl ZoneAnalysis {
    pub fn completed_count(&self) -> usize {
        self.intervals.iter().filter(|i| i.is_completed()).count()
    }

    pub fn bands(&self, min_temp: i32, max_temp: i32) -> Vec<RateBand> {
        bucketize(&self.rates.samples, min_temp, max_temp)
    }
}

fn validate(zone: &str, series: &'static str, samples: &[Sample]) -> AnalysisResult<()> {
    ensure_ordered(samples, series)
        .and_then(|()| ensure_finite_values(samples, series))
        .map_err(|source| AnalysisError::InvalidSeries {
            zone: zone.to_string(),
            series,
            source,
        })
}

/// Run every stage for one zone.
///
/// Empty series are fine and give an empty analysis.
pub fn analyze_zone(
    zone: &str,
    setpoint: &[Sample],
    measured: &[Sample],
    options: PipelineOptions,
) -> AnalysisResult<ZoneAnalysis> {
    if options.validate_input {
        validate(zone, "setpoint", setpoint)?;
        validate(zone, "measured", measured)?;
    }

    let mut intervals = detect_intervals(setpoint);
    let issues = match_durations(measured, &mut intervals);
    let rates = calculate_rates(&intervals);

    let analysis = ZoneAnalysis {
        zone: zone.to_string(),
        intervals,
        issues,
        rates,
    };
    info!(
        zone,
        intervals = analysis.intervals.len(),
        completed = analysis.completed_count(),
        rejected = analysis.issues.len(),
        rates = analysis.rates.samples.len(),
        "Zone analysed"
    );
    Ok(analysis)
}
