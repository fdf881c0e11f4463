//! Maps field generator configurations onto the core value generators.
//!
//! Every field draws from the engine in schema order, so two generators
//! fed the same schema and seed emit identical rows.

pub mod sample;
pub mod static_value;

use synthgen_core::bigint::parse_big_int;
use synthgen_core::{
    big_int, datetime, numeric, pick, pick_weighted, sequence, structured, BigIntSpec, DataError,
    DateTimeSpec, Engine, FloatRange, IntRange, RangeProblem, Weighted,
};
use synthgen_schema::{parse_timestamp, GeneratedValue, GeneratorConfig};

/// Generate a value based on the generator configuration.
pub fn generate_value(
    config: &GeneratorConfig,
    engine: &mut Engine,
    index: u64,
) -> Result<GeneratedValue, DataError> {
    let value = match config {
        GeneratorConfig::Sequential { start } => {
            GeneratedValue::Int64(start.wrapping_add(index as i64))
        }

        GeneratorConfig::Integer { min, max } => GeneratedValue::Int64(numeric::integer(
            engine,
            IntRange {
                min: *min,
                max: *max,
            },
        )?),

        GeneratorConfig::Float {
            min,
            max,
            precision,
        } => GeneratedValue::Float64(numeric::float(
            engine,
            FloatRange {
                min: *min,
                max: *max,
                precision: *precision,
            },
        )?),

        GeneratorConfig::Datetime { min, max } => {
            let spec = DateTimeSpec::Between {
                min: millis(min.as_deref())?,
                max: millis(max.as_deref())?,
            };
            GeneratedValue::DateTime(datetime(engine, spec)?)
        }

        GeneratorConfig::String { length } => {
            GeneratedValue::String(sequence::string(engine, *length))
        }

        GeneratorConfig::Hexadecimal { length } => {
            GeneratedValue::String(sequence::hexadecimal(engine, *length))
        }

        GeneratorConfig::Uuid => GeneratedValue::Uuid(sequence::uuid(engine)),

        GeneratorConfig::Boolean => GeneratedValue::Bool(sequence::boolean(engine)),

        GeneratorConfig::WeightedBool { true_weight } => {
            GeneratedValue::Bool(sequence::weighted_boolean(engine, *true_weight))
        }

        GeneratorConfig::Json => GeneratedValue::Json(structured::json_value(engine)),

        GeneratorConfig::Array { length } => GeneratedValue::Array(
            structured::array(engine, *length)
                .into_iter()
                .map(GeneratedValue::from)
                .collect(),
        ),

        GeneratorConfig::BigInt { min, max } => {
            let spec = BigIntSpec::Range {
                min: min.as_deref().map(parse_big_int).transpose()?,
                max: max.as_deref().map(parse_big_int).transpose()?,
            };
            GeneratedValue::BigInt(big_int(engine, spec)?)
        }

        GeneratorConfig::OneOf { values, weights } => {
            if values.is_empty() {
                GeneratedValue::Null
            } else {
                let chosen = match weights {
                    Some(weights) => {
                        let candidates: Vec<Weighted<&serde_yaml::Value>> = weights
                            .iter()
                            .zip(values)
                            .map(|(weight, value)| Weighted::new(*weight, value))
                            .collect();
                        *pick_weighted(engine, &candidates)?
                    }
                    None => pick(engine, values)?,
                };
                static_value::yaml_to_generated_value(chosen)
            }
        }

        GeneratorConfig::SampleArray {
            pool,
            min_length,
            max_length,
        } => sample::generate_sample_array(engine, pool, *min_length, *max_length),

        GeneratorConfig::Static { value } => static_value::yaml_to_generated_value(value),

        GeneratorConfig::Null => GeneratedValue::Null,
    };
    Ok(value)
}

/// Convert an optional timestamp bound to epoch milliseconds.
fn millis(bound: Option<&str>) -> Result<Option<i64>, DataError> {
    bound
        .map(|text| {
            parse_timestamp(text)
                .map(|dt| dt.timestamp_millis())
                .ok_or_else(|| DataError::invalid_range(text, text, RangeProblem::Unrepresentable))
        })
        .transpose()
}
