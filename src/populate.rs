//! `synthgen populate`: write one JSONL file per schema table.

use anyhow::Context;
use std::path::PathBuf;
use std::time::Duration;
use synthgen_core::Engine;
use synthgen_populate_jsonl::{JsonlPopulateArgs, JsonlPopulator};
use synthgen_schema::Schema;

/// Totals across every table of one populate run.
#[derive(Debug, Clone, Default)]
pub struct PopulateSummary {
    /// Seed every table was generated with
    pub seed: u64,
    /// Files written, in table order
    pub files: Vec<PathBuf>,
    /// Rows written across all tables
    pub total_rows: u64,
    /// Bytes written across all tables
    pub total_bytes: u64,
    /// Time spent across all tables
    pub total_duration: Duration,
    /// Part of `total_duration` spent generating rows
    pub generation_duration: Duration,
    /// Part of `total_duration` spent serializing and writing rows
    pub write_duration: Duration,
}

/// Pick the seed: command line, then schema, then a fresh random one.
pub fn resolve_seed(explicit: Option<u64>, schema: &Schema) -> u64 {
    if let Some(seed) = explicit.or(schema.seed) {
        return seed;
    }
    let seed = Engine::from_entropy().seed();
    tracing::info!(seed, "No seed supplied, using a random one");
    seed
}

/// Run the `populate` command.
pub fn run_populate(args: &JsonlPopulateArgs) -> anyhow::Result<PopulateSummary> {
    let schema = Schema::from_file(&args.common.schema)
        .with_context(|| format!("Failed to load schema from {:?}", args.common.schema))?;

    let tables: Vec<String> = if args.common.tables.is_empty() {
        schema.table_names().into_iter().map(String::from).collect()
    } else {
        args.common.tables.clone()
    };
    for table in &tables {
        schema
            .require_table(table)
            .with_context(|| format!("Cannot populate '{table}'"))?;
    }

    let seed = resolve_seed(args.common.seed, &schema);
    tracing::info!(
        "Generating JSONL files with {} rows per table (seed={})",
        args.common.row_count,
        seed
    );

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", args.output_dir))?;

    let mut summary = PopulateSummary {
        seed,
        ..PopulateSummary::default()
    };

    for table_name in &tables {
        // Fresh populator per table so each file starts at row 0.
        let mut populator = JsonlPopulator::new(schema.clone(), seed);
        let output_path = args.output_dir.join(format!("{table_name}.jsonl"));

        let metrics = populator
            .populate(table_name, &output_path, args.common.row_count)
            .with_context(|| format!("Failed to generate JSONL for '{table_name}'"))?;

        tracing::info!(
            "Generated {:?}: {} rows in {:?} (generate {:?}, write {:?}, {:.0} bytes/sec)",
            output_path,
            metrics.rows_written,
            metrics.total_duration,
            metrics.generation_duration,
            metrics.write_duration,
            metrics.bytes_per_second()
        );

        summary.total_rows += metrics.rows_written;
        summary.total_bytes += metrics.file_size_bytes;
        summary.total_duration += metrics.total_duration;
        summary.generation_duration += metrics.generation_duration;
        summary.write_duration += metrics.write_duration;
        summary.files.push(output_path);
    }

    Ok(summary)
}
