//! Array generator sampling from a fixed pool.

use synthgen_core::{numeric, pick_many, Engine, IntRange};
use synthgen_schema::GeneratedValue;

/// Generate an array of distinct pool entries.
///
/// The length is drawn from `min_length..=max_length` and clamped to the
/// pool size; an inverted length range collapses to `min_length`.
pub fn generate_sample_array(
    engine: &mut Engine,
    pool: &[String],
    min_length: usize,
    max_length: usize,
) -> GeneratedValue {
    if pool.is_empty() || max_length == 0 {
        return GeneratedValue::Array(vec![]);
    }

    let min = i64::try_from(min_length).unwrap_or(i64::MAX);
    let max = i64::try_from(max_length.max(min_length)).unwrap_or(i64::MAX);
    let length = numeric::integer(engine, IntRange::new(min, max))
        .map_or(min_length, |n| usize::try_from(n).unwrap_or(min_length));

    let items = pick_many(engine, pool, length)
        .into_iter()
        .map(GeneratedValue::String)
        .collect();
    GeneratedValue::Array(items)
}
