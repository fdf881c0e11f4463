//! Error taxonomy for the generation core.
//!
//! Only genuinely unsatisfiable requests are errors. Everything else
//! (negative lengths, oversized lengths, missing bounds, odd weights) is
//! normalized by the generators themselves.

use std::fmt;

/// Why a range was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeProblem {
    /// `max` is less than `min`.
    Inverted,
    /// A bound is NaN or infinite.
    NonFinite,
    /// A bound lies outside the domain the generator can represent.
    Unrepresentable,
}

impl fmt::Display for RangeProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted => write!(f, "max must not be less than min"),
            Self::NonFinite => write!(f, "bounds must be finite"),
            Self::Unrepresentable => write!(f, "bounds are outside the representable domain"),
        }
    }
}

/// Error type for generator operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    /// The requested range cannot produce any value.
    #[error("Invalid range (min {min}, max {max}): {problem}")]
    InvalidRange {
        /// Lower bound as supplied by the caller
        min: String,
        /// Upper bound as supplied by the caller
        max: String,
        /// What is wrong with the pair
        problem: RangeProblem,
    },

    /// The selection primitive was handed no candidates.
    #[error("Cannot select from an empty sequence")]
    EmptyInput,

    /// Precision must be a positive, finite step.
    #[error("Invalid precision {precision}: must be a positive finite number")]
    InvalidPrecision {
        /// Precision as supplied by the caller
        precision: String,
    },

    /// A big-integer literal could not be parsed.
    #[error("Cannot parse '{input}' as an integer")]
    InvalidBigInt {
        /// The rejected literal
        input: String,
    },
}

impl DataError {
    /// Build an [`DataError::InvalidRange`] from any displayable bounds.
    pub fn invalid_range(
        min: impl fmt::Display,
        max: impl fmt::Display,
        problem: RangeProblem,
    ) -> Self {
        Self::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
            problem,
        }
    }

    /// Shorthand for an inverted range.
    pub fn inverted(min: impl fmt::Display, max: impl fmt::Display) -> Self {
        Self::invalid_range(min, max, RangeProblem::Inverted)
    }
}
