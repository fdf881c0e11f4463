//! synthgen library
//!
//! Command implementations behind the `synthgen` binary. The generators
//! themselves live in the workspace crates:
//!
//! - `synthgen_core` - seeded engine and value generators
//! - `synthgen_schema` - YAML generation schema and value model
//! - `synthgen_generator` - deterministic row generation
//! - `synthgen_populate_jsonl` - JSONL file output
//!
//! # CLI Usage
//!
//! ```bash
//! # Five integers between 1 and 6, reproducible with the same seed
//! synthgen sample integer --min 1 --max 6 --count 5 --seed 42
//!
//! # One JSONL file per table
//! synthgen populate --schema schema.yaml --output-dir out --row-count 1000
//! ```

pub mod populate;
pub mod sample;

pub use populate::{resolve_seed, run_populate, PopulateSummary};
pub use sample::{run_sample, sample_values, SampleArgs, SampleKind};
