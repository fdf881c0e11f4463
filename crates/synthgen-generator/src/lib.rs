//! Schema-driven row generator for synthgen.
//!
//! This crate provides the `DataGenerator` which produces deterministic rows
//! from a YAML schema. Each row reseeds the engine from the base seed and
//! the row index, so any row can be regenerated on its own.
//!
//! # Architecture
//!
//! ```text
//! GeneratorSchema (YAML)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  DataGenerator   │
//! │                  │
//! │  - seed          │
//! │  - engine        │
//! │  - index         │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    GeneratedRow { table, index, fields }
//! ```
//!
//! # Example
//!
//! ```rust
//! use synthgen_generator::DataGenerator;
//! use synthgen_schema::Schema;
//!
//! let schema = Schema::from_yaml(r#"
//! version: 1
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
//! "#).unwrap();
//!
//! let mut generator = DataGenerator::new(schema, 42);
//! let row = generator.next_row("users").unwrap();
//! assert_eq!(row.index, 0);
//! ```
//!
//! # Generators
//!
//! - `sequential` - Row index plus a start offset
//! - `integer` / `float` - Bounded numbers, floats on a precision grid
//! - `datetime` - Timestamps between two dates
//! - `string` / `hexadecimal` - Alphanumeric and hex strings
//! - `uuid` / `boolean` / `weighted_bool`
//! - `json` / `array` - Small structured values
//! - `big_int` - Arbitrary-precision integers
//! - `one_of` - Uniform or weighted selection from a list
//! - `sample_array` - Distinct samples from a pool
//! - `static` / `null`

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{DataGenerator, GeneratorError, RowIterator};
