//! Command-line interface for synthgen
//!
//! # Usage Examples
//!
//! ## Sampling
//! ```bash
//! # Prices on a cent grid
//! synthgen sample float --min 0 --max 100 --precision 0.01 --count 10 --seed 42
//!
//! # Timestamps in the nineties
//! synthgen sample datetime --min 1990-01-01 --max 1999-12-31
//! ```
//!
//! ## Populating
//! ```bash
//! synthgen populate \
//!   --schema schema.yaml \
//!   --output-dir out \
//!   --row-count 1000 \
//!   --tables users,orders
//! ```
//!
//! Set `RUST_LOG=info` to see progress and the seed picked for unseeded runs.

use clap::{Parser, Subcommand};
use synthgen::{run_populate, run_sample, SampleArgs};
use synthgen_populate_jsonl::JsonlPopulateArgs;

#[derive(Parser)]
#[command(name = "synthgen")]
#[command(about = "Deterministic, seedable synthetic data generator")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print generated values, one per line
    Sample(SampleArgs),

    /// Generate JSONL files (one per table) from a schema
    Populate(JsonlPopulateArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sample(args) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let seed = run_sample(&args, &mut out)?;
            tracing::debug!(seed, "Sampling complete");
        }
        Commands::Populate(args) => {
            let summary = run_populate(&args)?;
            tracing::info!(
                "Populate complete: {} files, {} rows, {} bytes in {:?} \
                 (generate {:?}, write {:?}, seed={})",
                summary.files.len(),
                summary.total_rows,
                summary.total_bytes,
                summary.total_duration,
                summary.generation_duration,
                summary.write_duration,
                summary.seed
            );
        }
    }

    Ok(())
}
