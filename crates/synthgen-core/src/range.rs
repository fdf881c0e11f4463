//! Range specifications for the bounded generators.
//!
//! Callers describe a range loosely (either bound may be missing, a bare
//! number may stand for one bound) and the generators normalize it into
//! concrete bounds before drawing. Specs are taken by value, so the core
//! never holds on to or mutates a caller's copy.

use crate::error::{DataError, RangeProblem};
use std::ops::RangeInclusive;

/// Width of the default integer range: `max` defaults to `min + 99_999`.
pub const DEFAULT_INT_SPAN: i64 = 99_999;

/// Width of the default float range: `max` defaults to `min + 1`.
pub const DEFAULT_FLOAT_SPAN: f64 = 1.0;

/// Default float grid spacing.
pub const DEFAULT_PRECISION: f64 = 0.01;

/// Inclusive integer range with optional bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntRange {
    /// Lower bound, 0 when omitted
    pub min: Option<i64>,
    /// Upper bound, `min + 99_999` when omitted
    pub max: Option<i64>,
}

impl IntRange {
    /// Range with both bounds given.
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Range `0..=max`.
    pub fn up_to(max: i64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Range starting at `min` with the default width.
    pub fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Fill in defaults and check the ordering.
    pub fn resolve(&self) -> Result<(i64, i64), DataError> {
        let min = self.min.unwrap_or(0);
        let max = self.max.unwrap_or_else(|| min.saturating_add(DEFAULT_INT_SPAN));
        if max < min {
            return Err(DataError::inverted(min, max));
        }
        Ok((min, max))
    }
}

/// A bare integer is shorthand for the upper bound.
impl From<i64> for IntRange {
    fn from(max: i64) -> Self {
        Self::up_to(max)
    }
}

impl From<RangeInclusive<i64>> for IntRange {
    fn from(range: RangeInclusive<i64>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

/// Inclusive float range with an optional grid spacing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatRange {
    /// Lower bound, 0 when omitted
    pub min: Option<f64>,
    /// Upper bound, `min + 1` when omitted
    pub max: Option<f64>,
    /// Grid spacing, 0.01 when omitted
    pub precision: Option<f64>,
}

/// Float range after defaults are applied and validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatBounds {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Grid spacing
    pub precision: f64,
}

impl FloatRange {
    /// Range with both bounds given and the default precision.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            precision: None,
        }
    }

    /// Default range with the given grid spacing.
    pub fn with_precision(precision: f64) -> Self {
        Self {
            precision: Some(precision),
            ..Self::default()
        }
    }

    /// Set the grid spacing.
    pub fn precision(mut self, precision: f64) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Fill in defaults and validate bounds and precision.
    pub fn resolve(&self) -> Result<FloatBounds, DataError> {
        let min = self.min.unwrap_or(0.0);
        let max = self.max.unwrap_or(min + DEFAULT_FLOAT_SPAN);
        if !min.is_finite() || !max.is_finite() {
            return Err(DataError::invalid_range(min, max, RangeProblem::NonFinite));
        }
        if max < min {
            return Err(DataError::inverted(min, max));
        }

        let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
        if !precision.is_finite() || precision <= 0.0 {
            return Err(DataError::InvalidPrecision {
                precision: precision.to_string(),
            });
        }

        Ok(FloatBounds {
            min,
            max,
            precision,
        })
    }
}

impl From<RangeInclusive<f64>> for FloatRange {
    fn from(range: RangeInclusive<f64>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_defaults() {
        assert_eq!(IntRange::default().resolve().unwrap(), (0, 99_999));
        assert_eq!(IntRange::at_least(-42).resolve().unwrap(), (-42, 99_957));
        assert_eq!(IntRange::from(6).resolve().unwrap(), (0, 6));
    }

    #[test]
    fn test_int_default_max_saturates() {
        let (min, max) = IntRange::at_least(i64::MAX - 5).resolve().unwrap();
        assert_eq!(min, i64::MAX - 5);
        assert_eq!(max, i64::MAX);
    }

    #[test]
    fn test_int_inverted() {
        let err = IntRange::new(10, 9).resolve().unwrap_err();
        assert!(matches!(err, DataError::InvalidRange { .. }));
    }

    #[test]
    fn test_int_negative_max_without_min_is_inverted() {
        assert!(IntRange::up_to(-1).resolve().is_err());
    }

    #[test]
    fn test_float_defaults() {
        let bounds = FloatRange::default().resolve().unwrap();
        assert_eq!(bounds.min, 0.0);
        assert_eq!(bounds.max, 1.0);
        assert_eq!(bounds.precision, 0.01);

        let bounds = FloatRange {
            min: Some(-42.0),
            ..FloatRange::default()
        }
        .resolve()
        .unwrap();
        assert_eq!(bounds.max, -41.0);
    }

    #[test]
    fn test_float_rejects_nan_and_infinity() {
        let err = FloatRange::new(f64::NAN, 1.0).resolve().unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidRange {
                problem: RangeProblem::NonFinite,
                ..
            }
        ));
        assert!(FloatRange::new(0.0, f64::INFINITY).resolve().is_err());
    }

    #[test]
    fn test_float_rejects_bad_precision() {
        for precision in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let err = FloatRange::with_precision(precision).resolve().unwrap_err();
            assert!(matches!(err, DataError::InvalidPrecision { .. }));
        }
    }

    #[test]
    fn test_resolve_leaves_spec_untouched() {
        let spec = FloatRange::new(1.0, 2.0);
        let _ = spec.resolve().unwrap();
        assert_eq!(spec, FloatRange::new(1.0, 2.0));
    }
}
