//! Heating-rate analysis for building zones.
//!
//! A zone is described by two ordered series: the commanded setpoint and the
//! measured room temperature. The pipeline turns them into rate statistics:
//!
//! - [`interval`]: setpoint plateaus become [`HeatingInterval`]s
//! - [`matcher`]: measured samples are joined against the intervals in one pass
//! - [`interpolate`]: the exact instant the target was reached
//! - [`rate`]: completed intervals become [`RateSample`]s (minutes per degree)
//! - [`band`]: rate samples grouped by starting temperature
//!
//! [`pipeline::analyze_zone`] runs all stages for a single zone with fresh state.

pub mod band;
pub mod error;
pub mod interpolate;
pub mod interval;
pub mod matcher;
pub mod pipeline;
pub mod rate;

pub use band::{RateBand, bucketize};
pub use error::{AnalysisError, AnalysisResult};
pub use interpolate::{DegenerateSample, interpolate_reached};
pub use interval::{HeatingInterval, detect_intervals};
pub use matcher::{IntervalIssue, IssueKind, match_durations};
pub use pipeline::{PipelineOptions, ZoneAnalysis, analyze_zone};
pub use rate::{RateSample, RateSkip, RateTable, calculate_rates};
