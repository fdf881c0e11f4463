//! Arbitrary-precision integer generator.

use crate::engine::Engine;
use crate::error::DataError;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, Zero};

/// Width of the default range: `max` defaults to `min + 999_999_999_999_999`.
pub const DEFAULT_BIGINT_SPAN: i64 = 999_999_999_999_999;

/// Input accepted by [`big_int`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigIntSpec {
    /// Returned unchanged.
    Value(BigInt),
    /// Parsed and returned; decimal or `0x` / `0o` / `0b` prefixed.
    Literal(String),
    /// Drawn uniformly from the inclusive range.
    Range {
        /// Lower bound, 0 when omitted
        min: Option<BigInt>,
        /// Upper bound, `min + 999_999_999_999_999` when omitted
        max: Option<BigInt>,
    },
}

impl Default for BigIntSpec {
    fn default() -> Self {
        Self::Range {
            min: None,
            max: None,
        }
    }
}

impl BigIntSpec {
    /// Range spec with both bounds given.
    pub fn between(min: impl Into<BigInt>, max: impl Into<BigInt>) -> Self {
        Self::Range {
            min: Some(min.into()),
            max: Some(max.into()),
        }
    }
}

impl From<BigInt> for BigIntSpec {
    fn from(value: BigInt) -> Self {
        Self::Value(value)
    }
}

impl From<i64> for BigIntSpec {
    fn from(value: i64) -> Self {
        Self::Value(BigInt::from(value))
    }
}

impl From<&str> for BigIntSpec {
    fn from(literal: &str) -> Self {
        Self::Literal(literal.to_string())
    }
}

impl From<String> for BigIntSpec {
    fn from(literal: String) -> Self {
        Self::Literal(literal)
    }
}

/// Parse an integer literal.
///
/// Accepts an optional sign, then decimal digits or a `0x`, `0o` or `0b`
/// prefixed body. Surrounding whitespace is ignored.
pub fn parse_big_int(input: &str) -> Result<BigInt, DataError> {
    let invalid = || DataError::InvalidBigInt {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => (Sign::Plus, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let prefixes = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    let (radix, digits) = prefixes
        .iter()
        .find_map(|(prefix, radix)| unsigned.strip_prefix(prefix).map(|rest| (*radix, rest)))
        .unwrap_or((10, unsigned));

    if digits.is_empty() {
        return Err(invalid());
    }
    let magnitude = BigUint::from_str_radix(digits, radix).map_err(|_| invalid())?;
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Generate an arbitrary-precision integer.
pub fn big_int(engine: &mut Engine, spec: impl Into<BigIntSpec>) -> Result<BigInt, DataError> {
    match spec.into() {
        BigIntSpec::Value(value) => Ok(value),
        BigIntSpec::Literal(literal) => parse_big_int(&literal),
        BigIntSpec::Range { min, max } => {
            let min = min.unwrap_or_default();
            let max = max.unwrap_or_else(|| &min + BigInt::from(DEFAULT_BIGINT_SPAN));
            if max < min {
                return Err(DataError::inverted(&min, &max));
            }
            let span = (&max - &min).to_biguint().unwrap_or_default();
            let offset = uniform_biguint(engine, &span);
            Ok(min + BigInt::from(offset))
        }
    }
}

/// Draw uniformly from `0..=span`.
///
/// Draws as many words as `span` has bits, drops the excess high bits and
/// rejects candidates above `span`; each round succeeds with probability
/// at least one half.
fn uniform_biguint(engine: &mut Engine, span: &BigUint) -> BigUint {
    let bits = span.bits();
    if bits == 0 {
        // Degenerate range: keep the draw count aligned.
        engine.next_u64();
        return BigUint::zero();
    }

    let words = bits.div_ceil(64);
    let excess = words * 64 - bits;
    loop {
        let digits: Vec<u32> = (0..words)
            .flat_map(|_| {
                let word = engine.next_u64();
                [word as u32, (word >> 32) as u32]
            })
            .collect();
        let candidate = BigUint::new(digits) >> excess;
        if &candidate <= span {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_range() {
        let mut engine = Engine::new(42);
        let max = BigInt::from(DEFAULT_BIGINT_SPAN);
        for _ in 0..1000 {
            let value = big_int(&mut engine, BigIntSpec::default()).unwrap();
            assert!(value >= BigInt::zero() && value <= max);
        }
    }

    #[test]
    fn test_value_passthrough() {
        let mut engine = Engine::new(42);
        assert_eq!(big_int(&mut engine, 42).unwrap(), BigInt::from(42));
        assert_eq!(engine.words_drawn(), 0);
    }

    #[test]
    fn test_literal_parsing() {
        let mut engine = Engine::new(42);
        let huge = "123456789012345678901234567890123456789";
        assert_eq!(
            big_int(&mut engine, huge).unwrap(),
            BigInt::from_str(huge).unwrap()
        );
        assert_eq!(big_int(&mut engine, " -0x1f ").unwrap(), BigInt::from(-31));
        assert_eq!(big_int(&mut engine, "0b101").unwrap(), BigInt::from(5));
        assert_eq!(big_int(&mut engine, "+0o17").unwrap(), BigInt::from(15));
    }

    #[test]
    fn test_literal_rejected() {
        let mut engine = Engine::new(42);
        for input in ["", "0x", "12abc", "--1", "1.5"] {
            assert_eq!(
                big_int(&mut engine, input).unwrap_err(),
                DataError::InvalidBigInt {
                    input: input.to_string()
                }
            );
        }
    }

    #[test]
    fn test_huge_range() {
        let mut engine = Engine::new(42);
        let min = BigInt::from_str("-100000000000000000000000000000000000000000").unwrap();
        let max = BigInt::from_str("100000000000000000000000000000000000000000").unwrap();
        for _ in 0..1000 {
            let spec = BigIntSpec::between(min.clone(), max.clone());
            let value = big_int(&mut engine, spec).unwrap();
            assert!(value >= min && value <= max);
        }
    }

    #[test]
    fn test_small_range_reaches_both_ends() {
        let mut engine = Engine::new(42);
        let values: Vec<BigInt> = (0..200)
            .map(|_| big_int(&mut engine, BigIntSpec::between(-1, 1)).unwrap())
            .collect();
        for expected in [-1, 0, 1] {
            assert!(values.contains(&BigInt::from(expected)));
        }
    }

    #[test]
    fn test_degenerate_range() {
        let mut engine = Engine::new(42);
        assert_eq!(
            big_int(&mut engine, BigIntSpec::between(7, 7)).unwrap(),
            BigInt::from(7)
        );
        assert_eq!(engine.words_drawn(), 1);
    }

    #[test]
    fn test_inverted_range() {
        let mut engine = Engine::new(42);
        let err = big_int(&mut engine, BigIntSpec::between(10, 9)).unwrap_err();
        assert_eq!(err, DataError::inverted(10, 9));
    }

    #[test]
    fn test_deterministic_generation() {
        let mut engine1 = Engine::new(42);
        let mut engine2 = Engine::new(42);
        assert_eq!(
            big_int(&mut engine1, BigIntSpec::default()).unwrap(),
            big_int(&mut engine2, BigIntSpec::default()).unwrap()
        );
    }
}
