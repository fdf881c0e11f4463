//! JSONL (JSON Lines) populator.
//!
//! Writes deterministic rows from a generation schema, one JSON object per
//! line, one file per table.
//!
//! # Example
//!
//! ```ignore
//! use synthgen_populate_jsonl::JsonlPopulator;
//! use synthgen_schema::Schema;
//!
//! let schema = Schema::from_file("schema.yaml")?;
//! let mut populator = JsonlPopulator::new(schema, 42);
//!
//! let metrics = populator.populate("users", "users.jsonl", 1000)?;
//! println!("Generated {} rows in {:?}", metrics.rows_written, metrics.total_duration);
//! ```

pub mod args;
pub mod error;
pub mod populator;

pub use args::{CommonPopulateArgs, JsonlPopulateArgs};
pub use error::JsonlPopulatorError;
pub use populator::{JsonlPopulator, PopulateMetrics};
