//! `populate` command-line arguments.

use clap::Args;
use std::path::PathBuf;

/// Schema, row count, seed and table selection.
#[derive(Args, Clone, Debug)]
pub struct CommonPopulateArgs {
    /// Generation schema (YAML)
    #[arg(long, short = 's')]
    pub schema: PathBuf,

    /// Rows written to each table's file
    #[arg(long, default_value = "1000")]
    pub row_count: u64,

    /// Base seed; overrides the schema's `seed`. A random seed is logged when neither is set.
    #[arg(long, env = "SYNTHGEN_SEED")]
    pub seed: Option<u64>,

    /// Tables to write, comma-separated; every schema table when omitted
    #[arg(long, value_delimiter = ',')]
    pub tables: Vec<String>,
}

/// Where `populate` writes its `<table>.jsonl` files.
#[derive(Args, Clone, Debug)]
pub struct JsonlPopulateArgs {
    /// Directory for the `<table>.jsonl` files, created when missing
    #[arg(long, short = 'o')]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}
