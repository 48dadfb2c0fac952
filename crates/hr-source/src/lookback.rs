//! Lookback windows written as `<count><unit>`, e.g. `30d` or `12h`.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use hr_core::Timestamp;

use crate::SourceError;

/// How far back from the query instant samples are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookback {
    count: u32,
    unit: Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl Unit {
    fn suffix(self) -> char {
        match self {
            Unit::Seconds => 's',
            Unit::Minutes => 'm',
            Unit::Hours => 'h',
            Unit::Days => 'd',
            Unit::Weeks => 'w',
        }
    }

    fn seconds(self) -> i64 {
        match self {
            Unit::Seconds => 1,
            Unit::Minutes => 60,
            Unit::Hours => 3_600,
            Unit::Days => 86_400,
            Unit::Weeks => 604_800,
        }
    }
}

impl Lookback {
    pub fn days(count: u32) -> Self {
        Self {
            count,
            unit: Unit::Days,
        }
    }

    pub fn duration(&self) -> TimeDelta {
        TimeDelta::seconds(i64::from(self.count) * self.unit.seconds())
    }

    /// Earliest instant covered when looking back from `as_of`.
    pub fn window_start(&self, as_of: Timestamp) -> Timestamp {
        as_of - self.duration()
    }
}

impl Default for Lookback {
    fn default() -> Self {
        Self::days(30)
    }
}

impl FromStr for Lookback {
    type Err = SourceError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| SourceError::InvalidLookback {
            input: input.to_string(),
            reason,
        };

        let trimmed = input.trim();
        let Some(suffix) = trimmed.chars().last() else {
            return Err(invalid("empty"));
        };
        let unit = match suffix {
            's' => Unit::Seconds,
            'm' => Unit::Minutes,
            'h' => Unit::Hours,
            'd' => Unit::Days,
            'w' => Unit::Weeks,
            _ => return Err(invalid("unit must be one of s, m, h, d, w")),
        };
        let count: u32 = trimmed[..trimmed.len() - suffix.len_utf8()]
            .parse()
            .map_err(|_| invalid("count must be a whole number"))?;
        if count == 0 {
            return Err(invalid("count must be positive"));
        }
        // keeps duration() far inside TimeDelta's range
        if i64::from(count) * unit.seconds() > 100 * 366 * 86_400 {
            return Err(invalid("window longer than a century"));
        }
        Ok(Self { count, unit })
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.unit.suffix())
    }
}
