//! Value representations produced by schema-driven generation.
//!
//! A [`GeneratedValue`] is the type-agnostic output of one field generator;
//! a [`GeneratedRow`] collects the values of one table row in schema order.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Number, Value as JsonValue};
use synthgen_core::{BigInt, Primitive};
use uuid::Uuid;

/// Raw generated value.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    /// Null value
    Null,

    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int64(i64),

    /// 64-bit floating point
    Float64(f64),

    /// String value
    String(String),

    /// UUID value
    Uuid(Uuid),

    /// Date/time in UTC
    DateTime(DateTime<Utc>),

    /// Arbitrary-precision integer
    BigInt(BigInt),

    /// Structured JSON document
    Json(JsonValue),

    /// Array of values
    Array(Vec<GeneratedValue>),
}

impl GeneratedValue {
    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a DateTime.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&[GeneratedValue]> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Render as JSON.
    ///
    /// Timestamps become RFC 3339 strings with millisecond precision, big
    /// integers become decimal strings (JSON numbers cannot hold them), and
    /// non-finite floats become `null`.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Int64(i) => JsonValue::from(*i),
            Self::Float64(f) => Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
            Self::String(s) => JsonValue::String(s.clone()),
            Self::Uuid(u) => JsonValue::String(u.to_string()),
            Self::DateTime(dt) => {
                JsonValue::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Self::BigInt(i) => JsonValue::String(i.to_string()),
            Self::Json(v) => v.clone(),
            Self::Array(values) => JsonValue::Array(values.iter().map(Self::to_json).collect()),
        }
    }
}

impl Serialize for GeneratedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl From<Primitive> for GeneratedValue {
    fn from(primitive: Primitive) -> Self {
        match primitive {
            Primitive::Text(s) => Self::String(s),
            Primitive::Integer(i) => Self::Int64(i),
            Primitive::Boolean(b) => Self::Bool(b),
        }
    }
}

/// One generated table row.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRow {
    /// Table name
    pub table: String,

    /// Row index (for incremental support and reproducibility)
    pub index: u64,

    /// Field values in schema order
    pub fields: Vec<(String, GeneratedValue)>,
}

impl GeneratedRow {
    /// Create a new row.
    pub fn new(
        table: impl Into<String>,
        index: u64,
        fields: Vec<(String, GeneratedValue)>,
    ) -> Self {
        Self {
            table: table.into(),
            index,
            fields,
        }
    }

    /// Get a field value by name.
    pub fn get_field(&self, name: &str) -> Option<&GeneratedValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Get the number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Render as a JSON object keyed by field name.
    pub fn to_json(&self) -> JsonValue {
        let object: Map<String, JsonValue> = self
            .fields
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        JsonValue::Object(object)
    }
}

/// Serializes as an object whose keys keep schema order.
impl Serialize for GeneratedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_to_json_scalars() {
        assert_eq!(GeneratedValue::Null.to_json(), JsonValue::Null);
        assert_eq!(GeneratedValue::Bool(true).to_json(), JsonValue::Bool(true));
        assert_eq!(GeneratedValue::Int64(-7).to_json(), JsonValue::from(-7));
        assert_eq!(GeneratedValue::Float64(1.5).to_json(), JsonValue::from(1.5));
        assert_eq!(GeneratedValue::Float64(f64::NAN).to_json(), JsonValue::Null);
    }

    #[test]
    fn test_to_json_datetime_millis() {
        let dt = DateTime::parse_from_rfc3339("2001-04-03T23:21:10.773Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            GeneratedValue::DateTime(dt).to_json(),
            JsonValue::String("2001-04-03T23:21:10.773Z".to_string())
        );
    }

    #[test]
    fn test_to_json_big_int_is_string() {
        let big = BigInt::from_str("123456789012345678901234567890").unwrap();
        assert_eq!(
            GeneratedValue::BigInt(big).to_json(),
            JsonValue::String("123456789012345678901234567890".to_string())
        );
    }

    #[test]
    fn test_from_primitive() {
        assert_eq!(
            GeneratedValue::from(Primitive::Integer(3)),
            GeneratedValue::Int64(3)
        );
        assert_eq!(
            GeneratedValue::from(Primitive::Text("x".to_string())).as_str(),
            Some("x")
        );
    }

    #[test]
    fn test_row_accessors() {
        let row = GeneratedRow::new(
            "users",
            3,
            vec![
                ("age".to_string(), GeneratedValue::Int64(30)),
                ("active".to_string(), GeneratedValue::Bool(false)),
            ],
        );
        assert_eq!(row.field_count(), 2);
        assert_eq!(row.get_field("age").and_then(GeneratedValue::as_i64), Some(30));
        assert!(row.get_field("missing").is_none());

        let json = row.to_json();
        assert_eq!(json["age"], JsonValue::from(30));
        assert_eq!(json["active"], JsonValue::Bool(false));
    }

    #[test]
    fn test_row_serializes_in_field_order() {
        let row = GeneratedRow::new(
            "t",
            0,
            vec![
                ("zeta".to_string(), GeneratedValue::Int64(1)),
                ("alpha".to_string(), GeneratedValue::Null),
            ],
        );
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"zeta":1,"alpha":null}"#
        );
    }
}
