use hr_core::CoreError;

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that abort the analysis of a whole zone.
///
/// Per-interval problems are not errors; they are reported as
/// [`crate::IntervalIssue`] or [`crate::RateSkip`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid {series} series for zone {zone}: {source}")]
    InvalidSeries {
        zone: String,
        series: &'static str,
        source: CoreError,
    },
}
