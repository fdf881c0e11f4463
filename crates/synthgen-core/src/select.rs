//! Selection primitives over caller-owned sequences.
//!
//! Locale tables and other data sources reach the engine only through
//! these functions.

use crate::engine::Engine;
use crate::error::DataError;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::seq::{IndexedRandom, SliceRandom};

/// A candidate paired with its relative weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Weighted<T> {
    /// Relative weight; negative and non-finite weights count as zero
    pub weight: f64,
    /// The candidate
    pub value: T,
}

impl<T> Weighted<T> {
    /// Pair a value with a weight.
    pub fn new(weight: f64, value: T) -> Self {
        Self { weight, value }
    }
}

fn effective_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}

/// Pick one element uniformly.
pub fn pick<'a, T>(engine: &mut Engine, items: &'a [T]) -> Result<&'a T, DataError> {
    let last = items.len().checked_sub(1).ok_or(DataError::EmptyInput)?;
    let index = engine.uniform_u64(last as u64) as usize;
    items.get(index).ok_or(DataError::EmptyInput)
}

/// Pick one element with probability proportional to its weight.
///
/// Weights are divided by the largest one first, so the total stays finite
/// even when individual weights are near `f64::MAX`. When no candidate has
/// a usable weight the pick falls back to [`pick`].
pub fn pick_weighted<'a, T>(
    engine: &mut Engine,
    items: &'a [Weighted<T>],
) -> Result<&'a T, DataError> {
    if items.is_empty() {
        return Err(DataError::EmptyInput);
    }

    let largest = items
        .iter()
        .map(|item| effective_weight(item.weight))
        .fold(0.0, f64::max);
    if largest == 0.0 {
        return pick(engine, items).map(|item| &item.value);
    }

    let scaled = items
        .iter()
        .map(|item| effective_weight(item.weight) / largest);
    match WeightedIndex::new(scaled) {
        Ok(distribution) => items
            .get(distribution.sample(engine))
            .map(|item| &item.value)
            .ok_or(DataError::EmptyInput),
        Err(_) => pick(engine, items).map(|item| &item.value),
    }
}

/// Pick `count` elements at distinct positions.
///
/// `count` is clamped to the number of items.
pub fn pick_many<T: Clone>(engine: &mut Engine, items: &[T], count: usize) -> Vec<T> {
    items.choose_multiple(engine, count).cloned().collect()
}

/// Shuffle in place.
pub fn shuffle<T>(engine: &mut Engine, items: &mut [T]) {
    items.shuffle(engine);
}
