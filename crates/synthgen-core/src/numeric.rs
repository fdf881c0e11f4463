//! Bounded numeric generators.
//!
//! Floats are drawn on a grid: `min + k * precision` for a uniformly drawn
//! step count `k`. The arithmetic runs in base-10 ([`Decimal`]), and the
//! result is rounded to the number of decimal places in `precision` before
//! being handed back as the nearest `f64`. Printing the result with that
//! many places therefore reproduces it exactly.

use crate::engine::Engine;
use crate::error::DataError;
use crate::range::{FloatBounds, FloatRange, IntRange};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Largest scale a [`Decimal`] can carry.
const MAX_DECIMAL_PLACES: u32 = 28;

/// Step counts above this lose integer precision as `f64`.
const MAX_EXACT_F64_STEPS: f64 = 9_007_199_254_740_992.0;

/// Generate a random integer in the given range (inclusive).
pub fn integer(engine: &mut Engine, spec: impl Into<IntRange>) -> Result<i64, DataError> {
    let (min, max) = spec.into().resolve()?;
    Ok(engine.int_between(min, max))
}

/// Generate a random float on the precision grid of the given range.
pub fn float(engine: &mut Engine, spec: impl Into<FloatRange>) -> Result<f64, DataError> {
    let bounds = spec.into().resolve()?;
    match DecimalGrid::new(&bounds) {
        Some(grid) => Ok(grid.draw(engine)),
        None => Ok(draw_f64_grid(engine, &bounds)),
    }
}

/// Number of digits after the decimal point in the shortest rendering of
/// `precision`.
///
/// `0.01` has two places, `0.5` one, `5` none.
pub fn decimal_places(precision: f64) -> u32 {
    let rendered = precision.to_string();
    let places = match rendered.split_once('.') {
        Some((_, fraction)) => fraction.len(),
        None => 0,
    };
    u32::try_from(places)
        .unwrap_or(MAX_DECIMAL_PLACES)
        .min(MAX_DECIMAL_PLACES)
}

/// Exact base-10 view of a float range.
struct DecimalGrid {
    min: Decimal,
    max: Decimal,
    step: Decimal,
    steps: u128,
    places: u32,
    /// Float lower bound, used when a decimal cannot be rendered back
    min_f64: f64,
}

impl DecimalGrid {
    /// Returns `None` when a bound does not fit in a [`Decimal`].
    fn new(bounds: &FloatBounds) -> Option<Self> {
        let min = to_decimal(bounds.min)?;
        let max = to_decimal(bounds.max)?;
        let step = to_decimal(bounds.precision)?;
        if step <= Decimal::ZERO {
            return None;
        }

        let steps = max
            .checked_sub(min)?
            .checked_div(step)?
            .floor()
            .to_u128()?;

        Some(Self {
            min,
            max,
            step,
            steps,
            places: decimal_places(bounds.precision),
            min_f64: bounds.min,
        })
    }

    fn draw(&self, engine: &mut Engine) -> f64 {
        let k = engine.uniform_u128(self.steps);
        // k <= steps and steps * step <= max - min, so none of this overflows.
        let value = Decimal::from_u128(k)
            .and_then(|k| k.checked_mul(self.step))
            .and_then(|offset| self.min.checked_add(offset))
            .unwrap_or(self.max);

        to_f64(self.snap(value)).unwrap_or(self.min_f64)
    }

    /// Round onto the decimal grid of `precision`, staying inside the range.
    ///
    /// Only an off-grid `min` can make plain rounding leave the range; the
    /// value is then rounded toward the interior, and if no grid value lies
    /// inside the range at all, `min` itself is returned.
    fn snap(&self, value: Decimal) -> Decimal {
        let rounded =
            value.round_dp_with_strategy(self.places, RoundingStrategy::MidpointAwayFromZero);
        if rounded < self.min {
            let up =
                value.round_dp_with_strategy(self.places, RoundingStrategy::ToPositiveInfinity);
            return if up <= self.max { up } else { self.min };
        }
        if rounded > self.max {
            let down =
                value.round_dp_with_strategy(self.places, RoundingStrategy::ToNegativeInfinity);
            return if down >= self.min { down } else { self.min };
        }
        rounded
    }
}

/// Exact decimal for `value`, or `None` when a [`Decimal`] cannot hold it
/// without rounding (too large, or more than 28 fractional digits).
fn to_decimal(value: f64) -> Option<Decimal> {
    let decimal = Decimal::from_str(&value.to_string()).ok()?;
    (to_f64(decimal) == Some(value)).then_some(decimal)
}

/// Nearest `f64` to a decimal.
///
/// Goes through the decimal text so the conversion is correctly rounded.
fn to_f64(value: Decimal) -> Option<f64> {
    value
        .normalize()
        .to_string()
        .parse::<f64>()
        .ok()
        .or_else(|| value.to_f64())
}

/// Grid draw in plain `f64` for bounds too large for [`Decimal`].
fn draw_f64_grid(engine: &mut Engine, bounds: &FloatBounds) -> f64 {
    let FloatBounds {
        min,
        max,
        precision,
    } = *bounds;

    let steps = ((max - min) / precision).floor();
    let value = if steps.is_finite() && steps < MAX_EXACT_F64_STEPS {
        let k = engine.uniform_u64(steps as u64) as f64;
        min + k * precision
    } else {
        // Interpolate without forming max - min, which may overflow.
        let t = engine.next_unit_float();
        min * (1.0 - t) + max * t
    };
    value.clamp(min, max)
}
