//! Main data generator for producing table rows.

use crate::generators::generate_value;
use synthgen_core::{DataError, Engine};
use synthgen_schema::{GeneratedRow, Schema};
use tracing::debug;

/// Golden-ratio increment used to spread row seeds.
const ROW_SEED_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Table not found in schema
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// A field generator rejected its configuration
    #[error("Generation failed: {0}")]
    Data(#[from] DataError),
}

/// Data generator that produces deterministic rows.
///
/// The engine is reseeded from `(seed, index)` before every row, so row `i`
/// is the same whether it is reached sequentially or by jumping straight to
/// it with [`DataGenerator::with_start_index`].
pub struct DataGenerator {
    /// Schema defining the tables and field generators
    schema: Schema,
    /// Base seed for every row
    seed: u64,
    /// Engine reseeded per row
    engine: Engine,
    /// Current row index (for incremental generation)
    index: u64,
}

impl DataGenerator {
    /// Create a new data generator with the given schema and seed.
    pub fn new(schema: Schema, seed: u64) -> Self {
        debug!(seed, "Creating data generator");
        Self {
            schema,
            seed,
            engine: Engine::new(seed),
            index: 0,
        }
    }

    /// Set the starting index for row generation.
    ///
    /// This is useful for incremental generation where you want to
    /// resume from a specific point.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Compute the engine seed for a specific row index.
    fn row_seed(&self, index: u64) -> u64 {
        self.seed.wrapping_add(index.wrapping_mul(ROW_SEED_STEP))
    }

    /// Get the base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current row index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next row for the given table.
    ///
    /// On error the index does not advance.
    pub fn next_row(&mut self, table: &str) -> Result<GeneratedRow, GeneratorError> {
        let table_schema = self
            .schema
            .get_table(table)
            .ok_or_else(|| GeneratorError::TableNotFound(table.to_string()))?;

        let index = self.index;
        let row_seed = self.row_seed(index);
        self.engine.reseed(Some(row_seed));

        let fields = table_schema
            .fields
            .iter()
            .map(|field| {
                generate_value(&field.generator, &mut self.engine, index)
                    .map(|value| (field.name.clone(), value))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.index += 1;

        Ok(GeneratedRow::new(table_schema.name.clone(), index, fields))
    }

    /// Generate multiple rows for the given table.
    ///
    /// Returns an iterator that lazily generates rows.
    pub fn rows(&mut self, table: &str, count: u64) -> Result<RowIterator<'_>, GeneratorError> {
        if self.schema.get_table(table).is_none() {
            return Err(GeneratorError::TableNotFound(table.to_string()));
        }

        Ok(RowIterator {
            generator: self,
            table: table.to_string(),
            remaining: count,
        })
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

/// Iterator that lazily generates rows.
///
/// Yields `Result`s so a field whose bounds are invalid surfaces its error
/// instead of ending the stream silently.
pub struct RowIterator<'a> {
    generator: &'a mut DataGenerator,
    table: String,
    remaining: u64,
}

impl Iterator for RowIterator<'_> {
    type Item = Result<GeneratedRow, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        let row = self.generator.next_row(&self.table);
        if row.is_err() {
            self.remaining = 0;
        }
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (0, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synthgen_schema::GeneratedValue;

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

      - name: serial
        generator:
          type: sequential
          start: 1000

      - name: age
        generator:
          type: integer
          min: 18
          max: 80

      - name: is_active
        generator:
          type: weighted_bool
          true_weight: 0.8
"#;
        Schema::from_yaml(yaml).unwrap()
    }

    #[test]
    fn test_generate_single_row() {
        let mut generator = DataGenerator::new(test_schema(), 42);

        let row = generator.next_row("users").unwrap();

        assert_eq!(row.table, "users");
        assert_eq!(row.index, 0);
        assert_eq!(row.field_count(), 4);
        assert!(matches!(row.get_field("id"), Some(GeneratedValue::Uuid(_))));
        assert_eq!(row.get_field("serial"), Some(&GeneratedValue::Int64(1000)));

        let age = row.get_field("age").and_then(GeneratedValue::as_i64).unwrap();
        assert!((18..=80).contains(&age));
    }

    #[test]
    fn test_field_order_follows_schema() {
        let mut generator = DataGenerator::new(test_schema(), 42);
        let row = generator.next_row("users").unwrap();
        let names: Vec<&str> = row.fields.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["id", "serial", "age", "is_active"]);
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = DataGenerator::new(test_schema(), 42);
        let mut gen2 = DataGenerator::new(test_schema(), 42);

        for _ in 0..5 {
            assert_eq!(gen1.next_row("users").unwrap(), gen2.next_row("users").unwrap());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut gen1 = DataGenerator::new(test_schema(), 1);
        let mut gen2 = DataGenerator::new(test_schema(), 2);

        let id1 = gen1.next_row("users").unwrap().get_field("id").cloned();
        let id2 = gen2.next_row("users").unwrap().get_field("id").cloned();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_generate_multiple_rows() {
        let mut generator = DataGenerator::new(test_schema(), 42);

        let rows: Vec<_> = generator
            .rows("users", 10)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(rows.len(), 10);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.index, i as u64);
            assert_eq!(
                row.get_field("serial"),
                Some(&GeneratedValue::Int64(1000 + i as i64))
            );
        }
        assert_eq!(generator.current_index(), 10);
    }

    #[test]
    fn test_table_not_found() {
        let mut generator = DataGenerator::new(test_schema(), 42);

        assert!(matches!(
            generator.next_row("nonexistent"),
            Err(GeneratorError::TableNotFound(_))
        ));
        assert!(matches!(
            generator.rows("nonexistent", 3),
            Err(GeneratorError::TableNotFound(_))
        ));
        assert_eq!(generator.current_index(), 0);
    }

    #[test]
    fn test_with_start_index_matches_sequential() {
        let mut sequential = DataGenerator::new(test_schema(), 42);
        let rows: Vec<_> = sequential
            .rows("users", 6)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        let mut resumed = DataGenerator::new(test_schema(), 42).with_start_index(5);
        let row = resumed.next_row("users").unwrap();
        assert_eq!(row.index, 5);
        assert_eq!(row, rows[5]);
    }

    #[test]
    fn test_invalid_field_surfaces_error() {
        let yaml = r#"
tables:
  - name: broken
    fields:
      - name: n
        generator:
          type: integer
          min: 10
          max: 9
"#;
        let mut generator = DataGenerator::new(Schema::from_yaml(yaml).unwrap(), 42);
        let results: Vec<_> = generator.rows("broken", 3).unwrap().collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(GeneratorError::Data(_))));
        assert_eq!(generator.current_index(), 0);
    }

    #[test]
    fn test_current_index() {
        let mut generator = DataGenerator::new(test_schema(), 42);

        assert_eq!(generator.current_index(), 0);
        generator.next_row("users").unwrap();
        assert_eq!(generator.current_index(), 1);
        generator.next_row("users").unwrap();
        assert_eq!(generator.current_index(), 2);
    }
}
