//! Schema definitions and value types for schema-driven generation.
//!
//! This crate provides:
//! - [`GeneratorSchema`]: YAML-loaded tables, fields and their generators
//! - [`GeneratedValue`] and [`GeneratedRow`]: the values a generator emits
//!
//! # Example Schema
//!
//! ```yaml
//! version: 1
//! seed: 42
//! tables:
//!   - name: users
//!     fields:
//!       - name: id
//!         generator:
//!           type: uuid
//!       - name: age
//!         generator:
//!           type: integer
//!           min: 18
//!           max: 80
//! ```

pub mod schema;
pub mod values;

pub use schema::{
    parse_timestamp, FieldDefinition, GeneratorConfig, GeneratorSchema, Schema, SchemaError,
    TableDefinition,
};
pub use values::{GeneratedRow, GeneratedValue};
