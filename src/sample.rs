//! `synthgen sample`: print generated values, one per line.

use anyhow::Context;
use clap::{Args, ValueEnum};
use serde_json::Value as JsonValue;
use std::io::Write;
use synthgen_core::bigint::parse_big_int;
use synthgen_core::{
    big_int, datetime, numeric, sequence, structured, BigIntSpec, DateTimeSpec, Engine,
    FloatRange, IntRange,
};
use synthgen_schema::{parse_timestamp, GeneratedValue};

/// Value kinds the `sample` command can produce.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleKind {
    Integer,
    Float,
    Datetime,
    String,
    Hexadecimal,
    Uuid,
    Boolean,
    Json,
    Array,
    BigInt,
}

/// Arguments for the `sample` command.
#[derive(Args, Clone, Debug)]
pub struct SampleArgs {
    /// Kind of value to generate
    #[arg(value_enum)]
    pub kind: SampleKind,

    /// Seed for the engine; a random seed is drawn and logged when omitted
    #[arg(long, env = "SYNTHGEN_SEED")]
    pub seed: Option<u64>,

    /// Number of values to print
    #[arg(long, short = 'n', default_value = "1")]
    pub count: usize,

    /// Lower bound (number, timestamp or integer literal, depending on kind)
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<String>,

    /// Upper bound (number, timestamp or integer literal, depending on kind)
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<String>,

    /// Float grid spacing
    #[arg(long)]
    pub precision: Option<f64>,

    /// Length for string, hexadecimal and array kinds
    #[arg(long, allow_hyphen_values = true)]
    pub length: Option<i64>,
}

/// Bounds parsed once, before any draw.
enum Plan {
    Integer(IntRange),
    Float(FloatRange),
    Datetime(DateTimeSpec),
    BigInt(BigIntSpec),
    Other,
}

impl SampleArgs {
    fn plan(&self) -> anyhow::Result<Plan> {
        let plan = match self.kind {
            SampleKind::Integer => Plan::Integer(IntRange {
                min: parse_bound(self.min.as_deref(), "min")?,
                max: parse_bound(self.max.as_deref(), "max")?,
            }),
            SampleKind::Float => Plan::Float(FloatRange {
                min: parse_bound(self.min.as_deref(), "min")?,
                max: parse_bound(self.max.as_deref(), "max")?,
                precision: self.precision,
            }),
            SampleKind::Datetime => Plan::Datetime(DateTimeSpec::Between {
                min: parse_instant(self.min.as_deref(), "min")?,
                max: parse_instant(self.max.as_deref(), "max")?,
            }),
            SampleKind::BigInt => Plan::BigInt(BigIntSpec::Range {
                min: self.min.as_deref().map(parse_big_int).transpose()?,
                max: self.max.as_deref().map(parse_big_int).transpose()?,
            }),
            _ => Plan::Other,
        };
        Ok(plan)
    }
}

fn parse_bound<T>(text: Option<&str>, name: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.map(|t| t.parse().with_context(|| format!("Invalid --{name} '{t}'")))
        .transpose()
}

fn parse_instant(text: Option<&str>, name: &str) -> anyhow::Result<Option<i64>> {
    text.map(|t| {
        parse_timestamp(t)
            .map(|dt| dt.timestamp_millis())
            .with_context(|| format!("Invalid --{name} '{t}': expected RFC 3339 or YYYY-MM-DD"))
    })
    .transpose()
}

/// Generate `args.count` values from `engine`.
pub fn sample_values(
    engine: &mut Engine,
    args: &SampleArgs,
) -> anyhow::Result<Vec<GeneratedValue>> {
    let plan = args.plan()?;
    let mut values = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let value = match (&plan, args.kind) {
            (Plan::Integer(range), _) => GeneratedValue::Int64(numeric::integer(engine, *range)?),
            (Plan::Float(range), _) => GeneratedValue::Float64(numeric::float(engine, *range)?),
            (Plan::Datetime(spec), _) => GeneratedValue::DateTime(datetime(engine, *spec)?),
            (Plan::BigInt(spec), _) => GeneratedValue::BigInt(big_int(engine, spec.clone())?),
            (Plan::Other, SampleKind::String) => {
                GeneratedValue::String(sequence::string(engine, args.length))
            }
            (Plan::Other, SampleKind::Hexadecimal) => {
                GeneratedValue::String(sequence::hexadecimal(engine, args.length))
            }
            (Plan::Other, SampleKind::Uuid) => GeneratedValue::Uuid(sequence::uuid(engine)),
            (Plan::Other, SampleKind::Boolean) => GeneratedValue::Bool(sequence::boolean(engine)),
            (Plan::Other, SampleKind::Json) => GeneratedValue::Json(structured::json_value(engine)),
            (Plan::Other, _) => GeneratedValue::Array(
                structured::array(engine, args.length)
                    .into_iter()
                    .map(GeneratedValue::from)
                    .collect(),
            ),
        };
        values.push(value);
    }
    Ok(values)
}

/// Render a value as one output line; strings print without quotes.
pub fn render(value: &GeneratedValue) -> String {
    match value.to_json() {
        JsonValue::String(s) => s,
        other => other.to_string(),
    }
}

/// Run the `sample` command, writing values to `out`.
///
/// Returns the seed used, so callers can report it.
pub fn run_sample<W: Write>(args: &SampleArgs, out: &mut W) -> anyhow::Result<u64> {
    let mut engine = match args.seed {
        Some(seed) => Engine::new(seed),
        None => {
            let engine = Engine::from_entropy();
            tracing::info!(seed = engine.seed(), "No seed supplied, using a random one");
            engine
        }
    };

    let values = sample_values(&mut engine, args)
        .with_context(|| format!("Failed to sample {:?} values", args.kind))?;
    for value in &values {
        writeln!(out, "{}", render(value))?;
    }
    Ok(engine.seed())
}
