//! The retrieval seam between analysis and whatever stores the readings.

use hr_core::{Sample, Timestamp};

use crate::{Lookback, SourceResult};

/// One series of one zone, e.g. the setpoint of "Foyer" over the last 30 days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesQuery {
    pub zone: String,
    pub field: String,
    pub lookback: Lookback,
}

impl SeriesQuery {
    pub fn new(zone: impl Into<String>, field: impl Into<String>, lookback: Lookback) -> Self {
        Self {
            zone: zone.into(),
            field: field.into(),
            lookback,
        }
    }

    /// True when `at` lies in `[as_of - lookback, as_of]`.
    pub fn covers(&self, at: Timestamp, as_of: Timestamp) -> bool {
        self.lookback.window_start(as_of) <= at && at <= as_of
    }
}

/// Anything that can hand out a zone's samples.
///
/// Implementations return samples in stored order; an empty vector means the
/// zone has no data in range and is not an error.
pub trait SeriesSource {
    fn fetch(&self, query: &SeriesQuery, as_of: Timestamp) -> SourceResult<Vec<Sample>>;
}

impl<S: SeriesSource + ?Sized> SeriesSource for &S {
    fn fetch(&self, query: &SeriesQuery, as_of: Timestamp) -> SourceResult<Vec<Sample>> {
        (**self).fetch(query, as_of)
    }
}
