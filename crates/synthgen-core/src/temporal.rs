//! Bounded timestamp generator.

use crate::engine::Engine;
use crate::error::{DataError, RangeProblem};
use crate::numeric;
use crate::range::IntRange;
use chrono::{DateTime, Utc};

/// Default lower bound: 1990-01-01T00:00:00Z in epoch milliseconds.
pub const DEFAULT_MIN_MILLIS: i64 = 631_152_000_000;

/// Default upper bound: 2100-01-01T00:00:00Z in epoch milliseconds.
pub const DEFAULT_MAX_MILLIS: i64 = 4_102_444_800_000;

/// Bounds for [`datetime`], in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeSpec {
    /// Upper bound only; the lower bound takes its default.
    Until(i64),
    /// Explicit bounds, each defaulted when omitted.
    Between {
        /// Lower bound
        min: Option<i64>,
        /// Upper bound
        max: Option<i64>,
    },
}

impl Default for DateTimeSpec {
    fn default() -> Self {
        Self::Between {
            min: None,
            max: None,
        }
    }
}

impl DateTimeSpec {
    /// Spec bounded on both sides.
    pub fn between(min: DateTime<Utc>, max: DateTime<Utc>) -> Self {
        Self::Between {
            min: Some(min.timestamp_millis()),
            max: Some(max.timestamp_millis()),
        }
    }

    /// Spec with only a lower bound.
    pub fn after(min: DateTime<Utc>) -> Self {
        Self::Between {
            min: Some(min.timestamp_millis()),
            max: None,
        }
    }

    /// Normalize into `(min, max)` milliseconds, both representable as
    /// calendar instants.
    pub fn resolve(&self) -> Result<(i64, i64), DataError> {
        let (min, max) = match *self {
            Self::Until(max) => (DEFAULT_MIN_MILLIS, max),
            Self::Between { min, max } => (
                min.unwrap_or(DEFAULT_MIN_MILLIS),
                max.unwrap_or(DEFAULT_MAX_MILLIS),
            ),
        };

        let representable = |millis: i64| DateTime::from_timestamp_millis(millis).is_some();
        if !representable(min) || !representable(max) {
            return Err(DataError::invalid_range(
                min,
                max,
                RangeProblem::Unrepresentable,
            ));
        }
        if max < min {
            return Err(DataError::inverted(min, max));
        }
        Ok((min, max))
    }
}

/// A bare instant is shorthand for the upper bound.
impl From<DateTime<Utc>> for DateTimeSpec {
    fn from(max: DateTime<Utc>) -> Self {
        Self::Until(max.timestamp_millis())
    }
}

/// A bare millisecond timestamp is shorthand for the upper bound.
impl From<i64> for DateTimeSpec {
    fn from(max: i64) -> Self {
        Self::Until(max)
    }
}

/// Generate a random instant within the given bounds (inclusive), at
/// millisecond resolution.
pub fn datetime(
    engine: &mut Engine,
    spec: impl Into<DateTimeSpec>,
) -> Result<DateTime<Utc>, DataError> {
    let (min, max) = spec.into().resolve()?;
    let millis = numeric::integer(engine, IntRange::new(min, max))?;
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DataError::invalid_range(min, max, RangeProblem::Unrepresentable))
}
