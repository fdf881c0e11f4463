//! JSON and array generators built from primitive draws.

use crate::engine::Engine;
use crate::range::DEFAULT_INT_SPAN;
use crate::sequence::{self, clamp_length};
use serde::Serialize;
use serde_json::{Map, Value};

/// Keys of the object produced by [`json`].
pub const JSON_KEYS: [&str; 7] = ["foo", "bar", "bike", "a", "b", "name", "prop"];

/// Length used by [`array`] when none is given.
pub const DEFAULT_ARRAY_LENGTH: usize = 10;

/// A single scalar inside a generated array or JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Primitive {
    /// Alphanumeric string of the default length
    Text(String),
    /// Integer in the default integer range
    Integer(i64),
    /// Boolean
    Boolean(bool),
}

impl From<Primitive> for Value {
    fn from(primitive: Primitive) -> Self {
        match primitive {
            Primitive::Text(s) => Value::String(s),
            Primitive::Integer(i) => Value::from(i),
            Primitive::Boolean(b) => Value::Bool(b),
        }
    }
}

/// Draw one primitive: a `[0, 2]` draw picks the kind, then the value is
/// drawn with that kind's defaults.
pub fn primitive(engine: &mut Engine) -> Primitive {
    match engine.uniform_u64(2) {
        0 => Primitive::Text(sequence::string(engine, None)),
        1 => Primitive::Integer(engine.int_between(0, DEFAULT_INT_SPAN)),
        _ => Primitive::Boolean(sequence::boolean(engine)),
    }
}

/// Generate a small JSON object with one primitive per key in
/// [`JSON_KEYS`] order.
pub fn json_value(engine: &mut Engine) -> Value {
    let mut object = Map::new();
    for key in JSON_KEYS {
        object.insert(key.to_string(), primitive(engine).into());
    }
    Value::Object(object)
}

/// Generate a small JSON object rendered as JSON text.
pub fn json(engine: &mut Engine) -> String {
    json_value(engine).to_string()
}

/// Generate an array of primitives.
///
/// Length follows the same clamping policy as [`sequence::string`].
pub fn array(engine: &mut Engine, length: impl Into<Option<i64>>) -> Vec<Primitive> {
    let length = clamp_length(length.into(), DEFAULT_ARRAY_LENGTH);
    (0..length).map(|_| primitive(engine)).collect()
}
