//! Static value generator and YAML to GeneratedValue conversion.

use serde_yaml::Value as YamlValue;
use synthgen_schema::GeneratedValue;

/// Convert a YAML value to a GeneratedValue.
///
/// Mappings become JSON documents; mappings that JSON cannot represent
/// (non-string keys) become null.
pub fn yaml_to_generated_value(yaml: &YamlValue) -> GeneratedValue {
    match yaml {
        YamlValue::Null => GeneratedValue::Null,
        YamlValue::Bool(b) => GeneratedValue::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                GeneratedValue::Int64(i)
            } else if let Some(f) = n.as_f64() {
                GeneratedValue::Float64(f)
            } else {
                GeneratedValue::String(n.to_string())
            }
        }
        YamlValue::String(s) => GeneratedValue::String(s.clone()),
        YamlValue::Sequence(arr) => {
            GeneratedValue::Array(arr.iter().map(yaml_to_generated_value).collect())
        }
        YamlValue::Mapping(_) => serde_json::to_value(yaml)
            .map_or(GeneratedValue::Null, GeneratedValue::Json),
        YamlValue::Tagged(tagged) => yaml_to_generated_value(&tagged.value),
    }
}
