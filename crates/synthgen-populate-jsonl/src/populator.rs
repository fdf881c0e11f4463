//! JSONL populator.

use crate::error::JsonlPopulatorError;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use synthgen_generator::DataGenerator;
use synthgen_schema::Schema;
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Rows between progress log lines.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// JSONL populator that writes generated rows to files.
pub struct JsonlPopulator {
    schema: Schema,
    generator: DataGenerator,
}

impl JsonlPopulator {
    /// Create a new JSONL populator.
    ///
    /// # Arguments
    ///
    /// * `schema` - Generation schema defining tables and field generators
    /// * `seed` - Seed for deterministic generation
    pub fn new(schema: Schema, seed: u64) -> Self {
        let generator = DataGenerator::new(schema.clone(), seed);
        Self { schema, generator }
    }

    /// Set the starting index for generation (for incremental population).
    pub fn with_start_index(mut self, index: u64) -> Self {
        let seed = self.generator.seed();
        self.generator = DataGenerator::new(self.schema.clone(), seed).with_start_index(index);
        self
    }

    /// Get the current generation index.
    pub fn current_index(&self) -> u64 {
        self.generator.current_index()
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Generate a JSONL file with the specified number of rows, replacing
    /// any existing file.
    ///
    /// # Arguments
    ///
    /// * `table_name` - Name of the table schema to use for data generation
    /// * `output_path` - Path to the output JSONL file
    /// * `count` - Number of rows to generate
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        table_name: &str,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        self.ensure_table(table_name)?;

        let output_path = output_path.as_ref();
        info!(
            "Generating JSONL file '{}' with {} rows for table '{}'",
            output_path.display(),
            count,
            table_name
        );

        let file = File::create(output_path)?;
        let metrics = self.write_rows(table_name, file, output_path, count)?;

        info!(
            "JSONL generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Append rows to an existing JSONL file.
    ///
    /// Continues from the current generator index, so a populate followed
    /// by an append yields the same file as one larger populate.
    pub fn populate_append<P: AsRef<Path>>(
        &mut self,
        table_name: &str,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        self.ensure_table(table_name)?;

        let output_path = output_path.as_ref();
        info!(
            "Appending {} rows to JSONL file '{}' starting at index {}",
            count,
            output_path.display(),
            self.generator.current_index()
        );

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(output_path)?;
        let metrics = self.write_rows(table_name, file, output_path, count)?;

        info!(
            "JSONL append complete: {} rows, total {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    fn ensure_table(&self, table_name: &str) -> Result<(), JsonlPopulatorError> {
        match self.schema.get_table(table_name) {
            Some(_) => Ok(()),
            None => Err(JsonlPopulatorError::TableNotFound(table_name.to_string())),
        }
    }

    fn write_rows(
        &mut self,
        table_name: &str,
        file: File,
        output_path: &Path,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        for _ in 0..count {
            let gen_start = Instant::now();
            let row = self.generator.next_row(table_name)?;
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            serde_json::to_writer(&mut writer, &row)?;
            writeln!(writer)?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;

            if metrics.rows_written % PROGRESS_INTERVAL == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_schema() -> Schema {
        let yaml = r#"
version: 1
seed: 42
tables:
  - name: users
    fields:
      - name: id
        generator:
          type: uuid
      - name: handle
        generator:
          type: string
          length: 8
      - name: age
        generator:
          type: integer
          min: 18
          max: 80
"#;
        Schema::from_yaml(yaml).unwrap()
    }

    #[test]
    fn test_metrics() {
        let metrics = PopulateMetrics {
            rows_written: 1000,
            total_duration: Duration::from_secs(10),
            generation_duration: Duration::from_secs(2),
            write_duration: Duration::from_secs(8),
            file_size_bytes: 100000,
        };

        assert_eq!(metrics.rows_per_second(), 100.0);
        assert_eq!(metrics.bytes_per_second(), 10000.0);
        assert_eq!(PopulateMetrics::default().rows_per_second(), 0.0);
    }

    #[test]
    fn test_populate_jsonl() {
        let mut populator = JsonlPopulator::new(test_schema(), 42);

        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("test.jsonl");

        let metrics = populator.populate("users", &output_path, 10).unwrap();

        assert_eq!(metrics.rows_written, 10);
        assert!(metrics.file_size_bytes > 0);

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 10);

        for line in lines {
            assert!(line.starts_with(r#"{"id":"#));
            let json: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(json["handle"].as_str().map(str::len), Some(8));
            let age = json["age"].as_i64().unwrap();
            assert!((18..=80).contains(&age));
        }
    }

    #[test]
    fn test_populate_append_continues_sequence() {
        let temp_dir = TempDir::new().unwrap();

        let mut split = JsonlPopulator::new(test_schema(), 42);
        let split_path = temp_dir.path().join("split.jsonl");
        split.populate("users", &split_path, 5).unwrap();
        let appended = split.populate_append("users", &split_path, 5).unwrap();
        assert_eq!(appended.rows_written, 5);
        assert_eq!(split.current_index(), 10);

        let mut whole = JsonlPopulator::new(test_schema(), 42);
        let whole_path = temp_dir.path().join("whole.jsonl");
        whole.populate("users", &whole_path, 10).unwrap();

        assert_eq!(
            std::fs::read_to_string(&split_path).unwrap(),
            std::fs::read_to_string(&whole_path).unwrap()
        );
    }

    #[test]
    fn test_with_start_index() {
        let temp_dir = TempDir::new().unwrap();

        let mut whole = JsonlPopulator::new(test_schema(), 42);
        let whole_path = temp_dir.path().join("whole.jsonl");
        whole.populate("users", &whole_path, 4).unwrap();

        let mut tail = JsonlPopulator::new(test_schema(), 42).with_start_index(2);
        let tail_path = temp_dir.path().join("tail.jsonl");
        tail.populate("users", &tail_path, 2).unwrap();

        let whole = std::fs::read_to_string(&whole_path).unwrap();
        let tail = std::fs::read_to_string(&tail_path).unwrap();
        let expected: Vec<&str> = whole.lines().skip(2).collect();
        assert_eq!(tail.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_deterministic_generation() {
        let temp_dir = TempDir::new().unwrap();

        let mut pop1 = JsonlPopulator::new(test_schema(), 42);
        let path1 = temp_dir.path().join("test1.jsonl");
        pop1.populate("users", &path1, 5).unwrap();

        let mut pop2 = JsonlPopulator::new(test_schema(), 42);
        let path2 = temp_dir.path().join("test2.jsonl");
        pop2.populate("users", &path2, 5).unwrap();

        let content1 = std::fs::read_to_string(&path1).unwrap();
        let content2 = std::fs::read_to_string(&path2).unwrap();
        assert_eq!(content1, content2);
    }

    #[test]
    fn test_unknown_table() {
        let mut populator = JsonlPopulator::new(test_schema(), 42);

        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("test.jsonl");

        let result = populator.populate("nonexistent", &output_path, 10);
        assert!(matches!(
            result,
            Err(JsonlPopulatorError::TableNotFound(_))
        ));
        assert!(!output_path.exists());
    }
}
