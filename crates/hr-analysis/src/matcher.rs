//! Single-pass join of measured samples against heating intervals.
//!
//! Both inputs are consumed front to back with one shared cursor. An interval
//! is current only while its window is open; once its end has passed, its
//! target was reached, or it was rejected, the cursor moves on for good.

use hr_core::{Real, Sample, Timestamp};
use serde::Serialize;
use tracing::{debug, warn};

use crate::interpolate::{DegenerateSample, interpolate_reached};
use crate::interval::HeatingInterval;

/// Why an interval was rejected during matching.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum IssueKind {
    /// Temperature fell below the last tracked reading instead of climbing.
    Regressed {
        at: Timestamp,
        previous: Real,
        current: Real,
    },
    /// The bracketing pair could not be interpolated.
    Degenerate { error: DegenerateSample },
}

/// A rejected interval, by position in the interval list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalIssue {
    pub index: usize,
    pub kind: IssueKind,
}

/// Cursor state; reset whenever the current interval changes.
#[derive(Debug, Default)]
struct Cursor {
    index: usize,
    /// Last in-window reading still below target.
    tracked: Option<Sample>,
    /// In-window samples seen for the current interval.
    seen: usize,
}

impl Cursor {
    fn advance(&mut self) {
        self.index += 1;
        self.tracked = None;
        self.seen = 0;
    }
}

/// Annotate `intervals` in place with start temperature, reached instant and
/// validity. Returns the intervals rejected along the way.
///
/// Intervals left without a reached instant (end passed, or the measured
/// series ran out) are simply incomplete and not reported as issues.
pub fn match_durations(
    measured: &[Sample],
    intervals: &mut [HeatingInterval],
) -> Vec<IntervalIssue> {
    let mut issues = Vec::new();
    let mut cursor = Cursor::default();

    for sample in measured {
        let Some(interval) = intervals.get_mut(cursor.index) else {
            break;
        };

        if sample.timestamp >= interval.end {
            debug!(
                index = cursor.index,
                end = %interval.end,
                "Interval closed before target was reached"
            );
            cursor.advance();
            continue;
        }
        if !interval.contains(sample.timestamp) {
            continue;
        }

        if interval.start_temp.is_none() {
            interval.start_temp = Some(sample.value);
            cursor.tracked = Some(*sample);
        }
        let position = cursor.seen;
        cursor.seen += 1;
        let tracked = *cursor.tracked.get_or_insert(*sample);

        if sample.value >= interval.desired {
            match interpolate_reached(&tracked, sample, interval.desired) {
                Ok(reached) => {
                    debug!(index = cursor.index, reached = %reached, "Target reached");
                    interval.reached = Some(reached);
                }
                Err(error) => {
                    warn!(index = cursor.index, %error, "Skipping interval with degenerate samples");
                    interval.valid = false;
                    issues.push(IntervalIssue {
                        index: cursor.index,
                        kind: IssueKind::Degenerate { error },
                    });
                }
            }
            cursor.advance();
        } else if position > 1 && sample.value < tracked.value {
            warn!(
                index = cursor.index,
                previous = tracked.value,
                current = sample.value,
                "Temperature regressed, abandoning interval"
            );
            interval.valid = false;
            issues.push(IntervalIssue {
                index: cursor.index,
                kind: IssueKind::Regressed {
                    at: sample.timestamp,
                    previous: tracked.value,
                    current: sample.value,
                },
            });
            cursor.advance();
        } else {
            cursor.tracked = Some(*sample);
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn t(minutes: i64) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 15, 6, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn samples(points: &[(i64, Real)]) -> Vec<Sample> {
        points.iter().map(|&(m, v)| Sample::new(t(m), v)).collect()
    }

    #[test]
    fn reaches_target_by_interpolation() {
        let mut intervals = vec![HeatingInterval::new(t(0), t(120), 20.0)];
        let measured = samples(&[(-5, 17.5), (5, 18.0), (15, 19.0), (25, 21.0)]);

        let issues = match_durations(&measured, &mut intervals);

        assert!(issues.is_empty());
        let interval = &intervals[0];
        assert_eq!(interval.start_temp, Some(18.0));
        // 19.0 -> 21.0 over 10 min, halfway at 20 min
        assert_eq!(interval.reached, Some(t(20)));
        assert!(interval.is_completed());
    }

    #[test]
    fn exact_boundary_sample() {
        let mut intervals = vec![HeatingInterval::new(t(0), t(60), 20.0)];
        let measured = samples(&[(1, 18.0), (6, 19.0), (11, 20.0)]);

        match_durations(&measured, &mut intervals);

        assert_eq!(intervals[0].reached, Some(t(11)));
    }

    #[test]
    fn samples_before_start_are_ignored() {
        let mut intervals = vec![HeatingInterval::new(t(30), t(90), 20.0)];
        let measured = samples(&[(0, 16.0), (30, 16.5), (40, 18.0), (50, 20.0)]);

        match_durations(&measured, &mut intervals);

        assert_eq!(intervals[0].start_temp, Some(18.0));
        assert_eq!(intervals[0].reached, Some(t(50)));
    }

    #[test]
    fn interval_ending_before_target_stays_incomplete() {
        let mut intervals = vec![
            HeatingInterval::new(t(0), t(30), 22.0),
            HeatingInterval::new(t(60), t(120), 20.0),
        ];
        let measured = samples(&[
            (10, 18.0),
            (20, 19.0),
            (40, 18.5),
            (70, 18.0),
            (80, 20.0),
        ]);

        let issues = match_durations(&measured, &mut intervals);

        assert!(issues.is_empty());
        assert_eq!(intervals[0].start_temp, Some(18.0));
        assert_eq!(intervals[0].reached, None);
        assert!(intervals[0].valid);
        assert!(!intervals[0].is_completed());
        assert_eq!(intervals[1].start_temp, Some(18.0));
        assert_eq!(intervals[1].reached, Some(t(80)));
    }

    #[test]
    fn sample_at_end_closes_interval() {
        let mut intervals = vec![HeatingInterval::new(t(0), t(30), 22.0)];
        let measured = samples(&[(10, 18.0), (30, 23.0)]);

        match_durations(&measured, &mut intervals);

        assert_eq!(intervals[0].reached, None);
    }

    #[test]
    fn series_running_out_leaves_intervals_incomplete() {
        let mut intervals = vec![
            HeatingInterval::new(t(0), t(60), 21.0),
            HeatingInterval::new(t(100), t(160), 21.0),
        ];
        let measured = samples(&[(10, 18.0), (20, 19.0)]);

        let issues = match_durations(&measured, &mut intervals);

        assert!(issues.is_empty());
        assert_eq!(intervals[0].start_temp, Some(18.0));
        assert!(!intervals[0].is_completed());
        assert_eq!(intervals[1].start_temp, None);
    }

    #[test]
    fn regression_after_two_samples_rejects_interval() {
        let mut intervals = vec![
            HeatingInterval::new(t(0), t(100), 21.0),
            HeatingInterval::new(t(120), t(200), 21.0),
        ];
        let measured = samples(&[
            (10, 18.0),
            (20, 19.0),
            (30, 18.5),
            (40, 21.5),
            (130, 19.0),
            (140, 21.0),
        ]);

        let issues = match_durations(&measured, &mut intervals);

        assert_eq!(
            issues,
            vec![IntervalIssue {
                index: 0,
                kind: IssueKind::Regressed {
                    at: t(30),
                    previous: 19.0,
                    current: 18.5,
                },
            }]
        );
        assert!(!intervals[0].valid);
        assert_eq!(intervals[0].reached, None);
        assert!(intervals[1].is_completed());
        assert_eq!(intervals[1].reached, Some(t(140)));
    }

    #[test]
    fn regression_on_second_sample_is_tolerated() {
        let mut intervals = vec![HeatingInterval::new(t(0), t(100), 20.0)];
        let measured = samples(&[(10, 18.0), (20, 17.5), (30, 19.0), (40, 20.0)]);

        let issues = match_durations(&measured, &mut intervals);

        assert!(issues.is_empty());
        assert!(intervals[0].is_completed());
        assert_eq!(intervals[0].start_temp, Some(18.0));
        assert_eq!(intervals[0].reached, Some(t(40)));
    }

    #[test]
    fn first_sample_already_at_target_is_degenerate() {
        let mut intervals = vec![HeatingInterval::new(t(0), t(60), 20.0)];
        let measured = samples(&[(-10, 19.0), (10, 20.5), (20, 21.0)]);

        let issues = match_durations(&measured, &mut intervals);

        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues[0].kind,
            IssueKind::Degenerate {
                error: DegenerateSample::NoElapsedTime { .. }
            }
        ));
        assert!(!intervals[0].valid);
        assert_eq!(intervals[0].start_temp, Some(20.5));
        assert!(!intervals[0].is_completed());
    }

    #[test]
    fn zero_start_temperature_is_recorded() {
        let mut intervals = vec![HeatingInterval::new(t(0), t(60), 2.0)];
        let measured = samples(&[(10, 0.0), (20, 1.0), (30, 2.0)]);

        match_durations(&measured, &mut intervals);

        assert_eq!(intervals[0].start_temp, Some(0.0));
        assert_eq!(intervals[0].reached, Some(t(30)));
    }

    #[test]
    fn no_intervals_is_a_no_op() {
        let measured = samples(&[(0, 18.0), (10, 19.0)]);
        assert!(match_durations(&measured, &mut []).is_empty());
    }
}
