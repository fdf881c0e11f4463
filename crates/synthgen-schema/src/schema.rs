//! Schema definitions for schema-driven generation.
//!
//! A schema lists tables, and for every table the ordered fields with the
//! generator that produces each one. It is loaded from YAML and validated
//! up front, so literal bounds that cannot be parsed surface as
//! [`SchemaError`]s before any row is generated.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use synthgen_core::bigint::parse_big_int;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Table not found in schema
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Two tables share a name
    #[error("Duplicate table: {0}")]
    DuplicateTable(String),

    /// A timestamp bound could not be parsed
    #[error("Invalid timestamp '{value}' for field '{field}' in table '{table}'")]
    InvalidTimestamp {
        table: String,
        field: String,
        value: String,
    },

    /// A big-integer bound could not be parsed
    #[error("Invalid integer literal '{value}' for field '{field}' in table '{table}'")]
    InvalidBigInt {
        table: String,
        field: String,
        value: String,
    },

    /// `weights` must line up with `values`
    #[error("Field '{field}' in table '{table}' has {values} values but {weights} weights")]
    WeightsMismatch {
        table: String,
        field: String,
        values: usize,
        weights: usize,
    },
}

// ============================================================================
// Generator Types
// ============================================================================

/// Generator configuration for a field.
///
/// Every bound is optional; omitted bounds take the generator's default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Row index plus a starting offset
    Sequential {
        /// Starting value
        #[serde(default)]
        start: i64,
    },

    /// Random integers in a range
    Integer {
        /// Minimum value (inclusive)
        min: Option<i64>,
        /// Maximum value (inclusive)
        max: Option<i64>,
    },

    /// Random floats on a precision grid
    Float {
        /// Minimum value (inclusive)
        min: Option<f64>,
        /// Maximum value (inclusive)
        max: Option<f64>,
        /// Grid spacing
        precision: Option<f64>,
    },

    /// Random timestamps in a range
    Datetime {
        /// Lower bound (RFC 3339 or YYYY-MM-DD)
        min: Option<String>,
        /// Upper bound (RFC 3339 or YYYY-MM-DD)
        max: Option<String>,
    },

    /// Alphanumeric strings
    String {
        /// Number of characters
        length: Option<i64>,
    },

    /// `0x`-prefixed hexadecimal strings
    Hexadecimal {
        /// Number of hex digits
        length: Option<i64>,
    },

    /// Version 4 UUIDs
    Uuid,

    /// Fair booleans
    Boolean,

    /// Booleans with a configurable true probability
    WeightedBool {
        /// Probability of `true` (0.0 to 1.0)
        true_weight: f64,
    },

    /// Small JSON objects
    Json,

    /// Arrays of mixed primitives
    Array {
        /// Number of elements
        length: Option<i64>,
    },

    /// Arbitrary-precision integers
    BigInt {
        /// Minimum value (decimal or 0x/0o/0b literal)
        min: Option<String>,
        /// Maximum value (decimal or 0x/0o/0b literal)
        max: Option<String>,
    },

    /// Selection from a pool of values
    OneOf {
        /// Pool of values to select from
        values: Vec<serde_yaml::Value>,
        /// Optional relative weights, one per value
        #[serde(default)]
        weights: Option<Vec<f64>>,
    },

    /// Arrays sampled without repetition from a pool
    SampleArray {
        /// Pool of values to sample from
        pool: Vec<String>,
        /// Minimum array length
        #[serde(default)]
        min_length: usize,
        /// Maximum array length
        max_length: usize,
    },

    /// A static value
    Static {
        /// The static value to use
        value: serde_yaml::Value,
    },

    /// Null values
    Null,
}

/// Field with its generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,

    /// Generator configuration for this field
    pub generator: GeneratorConfig,
}

/// Table with its ordered fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Table name
    pub name: String,

    /// Field definitions in output order
    pub fields: Vec<FieldDefinition>,
}

impl TableDefinition {
    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get all field names.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

fn default_version() -> u32 {
    1
}

/// Full generation schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Default seed, used when the caller supplies none
    #[serde(default)]
    pub seed: Option<u64>,

    /// Table definitions
    pub tables: Vec<TableDefinition>,

    /// Cached table lookup (not serialized)
    #[serde(skip)]
    table_map: HashMap<String, usize>,
}

impl GeneratorSchema {
    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: GeneratorSchema = serde_yaml::from_str(yaml)?;
        schema.validate()?;
        schema.build_table_map();
        Ok(schema)
    }

    /// Build the internal table lookup map.
    fn build_table_map(&mut self) {
        self.table_map = self
            .tables
            .iter()
            .enumerate()
            .map(|(idx, table)| (table.name.clone(), idx))
            .collect();
    }

    /// Check literals and table names that serde cannot check.
    fn validate(&self) -> Result<(), SchemaError> {
        let mut names = std::collections::HashSet::new();
        for table in &self.tables {
            if !names.insert(table.name.as_str()) {
                return Err(SchemaError::DuplicateTable(table.name.clone()));
            }
            for field in &table.fields {
                validate_field(&table.name, field)?;
            }
        }
        Ok(())
    }

    /// Get a table by name.
    pub fn get_table(&self, name: &str) -> Option<&TableDefinition> {
        self.table_map
            .get(name)
            .and_then(|&idx| self.tables.get(idx))
    }

    /// Get a table by name, failing if it is missing.
    pub fn require_table(&self, name: &str) -> Result<&TableDefinition, SchemaError> {
        self.get_table(name)
            .ok_or_else(|| SchemaError::TableNotFound(name.to_string()))
    }

    /// Get all table names in the schema.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }
}

fn validate_field(table: &str, field: &FieldDefinition) -> Result<(), SchemaError> {
    match &field.generator {
        GeneratorConfig::Datetime { min, max } => {
            for value in [min, max].into_iter().flatten() {
                if parse_timestamp(value).is_none() {
                    return Err(SchemaError::InvalidTimestamp {
                        table: table.to_string(),
                        field: field.name.clone(),
                        value: value.clone(),
                    });
                }
            }
        }
        GeneratorConfig::BigInt { min, max } => {
            for value in [min, max].into_iter().flatten() {
                if parse_big_int(value).is_err() {
                    return Err(SchemaError::InvalidBigInt {
                        table: table.to_string(),
                        field: field.name.clone(),
                        value: value.clone(),
                    });
                }
            }
        }
        GeneratorConfig::OneOf {
            values,
            weights: Some(weights),
        } if weights.len() != values.len() => {
            return Err(SchemaError::WeightsMismatch {
                table: table.to_string(),
                field: field.name.clone(),
                values: values.len(),
                weights: weights.len(),
            });
        }
        _ => {}
    }
    Ok(())
}

/// Parse a timestamp in RFC 3339 or `YYYY-MM-DD` form.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    // Try RFC 3339 / ISO 8601
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Try common date-only format
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

/// Alias used throughout the workspace.
pub type Schema = GeneratorSchema;

// ============================================================================
// Tests
// ============================================================================
