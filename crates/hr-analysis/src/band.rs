//! Grouping rate samples into one-degree starting-temperature bands.

use hr_core::Real;
use serde::Serialize;

use crate::rate::RateSample;

/// Rate samples whose start temperature lies in `(lower_bound, upper_bound]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateBand {
    pub lower_bound: i32,
    pub upper_bound: i32,
    pub samples: Vec<RateSample>,
}

impl RateBand {
    /// Lower bound exclusive, upper bound inclusive.
    pub fn contains(&self, start_temp: Real) -> bool {
        Real::from(self.lower_bound) < start_temp && start_temp <= Real::from(self.upper_bound)
    }
}

/// One band per integer `i` in `[min_temp, max_temp)`, covering `(i, i + 1]`.
///
/// Every band is emitted, empty or not, and samples keep their input order.
/// A start temperature equal to `min_temp` falls outside every band.
pub fn bucketize(samples: &[RateSample], min_temp: i32, max_temp: i32) -> Vec<RateBand> {
    (min_temp..max_temp)
        .map(|lower_bound| {
            let mut band = RateBand {
                lower_bound,
                upper_bound: lower_bound + 1,
                samples: Vec::new(),
            };
            let members: Vec<RateSample> = samples
                .iter()
                .filter(|s| band.contains(s.start_temp))
                .cloned()
                .collect();
            band.samples = members;
            band
        })
        .collect()
}
