//! CSV time-table reader.
//!
//! ## Purpose
//!
//! This module reads station-export style CSV files: a fixed number of
//! leading comment rows, a header row of column names, a units row, then
//! data rows. It produces a [`TimeTable`] whose schema is parsed once and
//! never mutated afterward.
//!
//! ## Key concepts
//!
//! * **Unit-based coercion**: A column with a declared unit is numeric;
//!   cells that fail to parse (or parse non-finite) become absent values.
//!   A column with an empty unit stays textual.
//! * **Timestamp column**: Parsed with a configurable `chrono` format; a
//!   row with an empty timestamp cell carries no observation and is
//!   skipped entirely.
//!
//! ## Invariants
//!
//! * Every stored column has exactly one entry per kept row.
//! * Schema, comments, and data are immutable once the table is built.
//!
//! ## Non-goals
//!
//! * This module does not verify timestamp ordering (the consumer's
//!   validator does) and does not convert units.

use std::fs::File;
use std::io::Read;
use std::path::Path;

// External dependencies
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::errors::{IngestError, Result};
use crate::schema::TableSchema;
use rollgrid::api::SeriesSample;

// ============================================================================
// Reader Configuration
// ============================================================================

/// Configuration of the table layout and timestamp handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Leading rows kept verbatim as comments.
    pub comment_rows: usize,

    /// Name of the timestamp column.
    pub timestamp_column: String,

    /// `chrono` format string for timestamp cells (interpreted as UTC).
    pub timestamp_format: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            comment_rows: 6,
            timestamp_column: String::from("Date_Time"),
            timestamp_format: String::from("%Y-%m-%dT%H:%M:%SZ"),
        }
    }
}

// ============================================================================
// Time Table Reader
// ============================================================================

/// Reader for comment/header/units-preambled CSV time tables.
#[derive(Debug, Clone, Default)]
pub struct TimeTableReader {
    config: ReaderConfig,
}

impl TimeTableReader {
    /// Create a reader with the default station-export layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with an explicit layout configuration.
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a table from a file path.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<TimeTable> {
        self.read_from(File::open(path)?)
    }

    /// Read a table from any reader.
    pub fn read_from<R: Read>(&self, reader: R) -> Result<TimeTable> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut comments: Vec<String> = Vec::new();
        let mut names: Option<Vec<String>> = None;
        let mut schema: Option<TableSchema> = None;
        let mut ts_idx = 0usize;
        let mut timestamps: Vec<DateTime<Utc>> = Vec::new();
        let mut columns: Vec<Column> = Vec::new();

        for (row_idx, record) in csv_reader.records().enumerate() {
            let record = record?;

            // Leading comment rows are kept verbatim for consumers (titles,
            // station metadata).
            if row_idx < self.config.comment_rows {
                comments.push(record.iter().collect::<Vec<_>>().join(","));
                continue;
            }

            // Header row
            if row_idx == self.config.comment_rows {
                names = Some(record.iter().map(str::to_owned).collect());
                continue;
            }

            // Units row completes the schema
            if row_idx == self.config.comment_rows + 1 {
                let Some(names) = names.take() else {
                    return Err(IngestError::MissingPreamble);
                };
                let units: Vec<String> = record.iter().map(str::to_owned).collect();
                if units.len() != names.len() {
                    return Err(IngestError::RaggedRow {
                        row: row_idx + 1,
                        expected: names.len(),
                        got: units.len(),
                    });
                }

                let parsed = TableSchema::new(names, units);
                ts_idx = parsed
                    .column_index(&self.config.timestamp_column)
                    .ok_or_else(|| {
                        IngestError::MissingColumn(self.config.timestamp_column.clone())
                    })?;
                columns = (0..parsed.len())
                    .map(|i| {
                        if i != ts_idx && parsed.is_numeric(i) {
                            Column::Numeric(Vec::new())
                        } else {
                            Column::Text(Vec::new())
                        }
                    })
                    .collect();
                schema = Some(parsed);
                continue;
            }

            // Data rows
            let Some(parsed) = schema.as_ref() else {
                return Err(IngestError::MissingPreamble);
            };
            if record.len() != parsed.len() {
                return Err(IngestError::RaggedRow {
                    row: row_idx + 1,
                    expected: parsed.len(),
                    got: record.len(),
                });
            }

            // A row without a timestamp carries no observation
            let ts_cell = record.get(ts_idx).unwrap_or("");
            if ts_cell.is_empty() {
                continue;
            }
            let ts = NaiveDateTime::parse_from_str(ts_cell, &self.config.timestamp_format)
                .map(|naive| naive.and_utc())
                .map_err(|_| IngestError::BadTimestamp {
                    row: row_idx + 1,
                    value: ts_cell.to_owned(),
                })?;
            timestamps.push(ts);

            for (i, cell) in record.iter().enumerate() {
                match &mut columns[i] {
                    Column::Numeric(vals) => {
                        // Unparseable and non-finite cells are absent, not errors
                        vals.push(cell.trim().parse::<f64>().ok().filter(|v| v.is_finite()));
                    }
                    Column::Text(vals) => vals.push(cell.to_owned()),
                }
            }
        }

        let Some(schema) = schema else {
            return Err(IngestError::MissingPreamble);
        };
        if timestamps.is_empty() {
            return Err(IngestError::EmptyTable);
        }

        Ok(TimeTable {
            schema,
            comments,
            timestamps,
            columns,
        })
    }
}

// ============================================================================
// Time Table
// ============================================================================

/// One parsed column: numeric with absent slots, or raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<Option<f64>>),
    Text(Vec<String>),
}

/// A parsed CSV time table: immutable schema, comments, timestamps, and
/// per-column data aligned row-for-row.
#[derive(Debug, Clone)]
pub struct TimeTable {
    schema: TableSchema,
    comments: Vec<String>,
    timestamps: Vec<DateTime<Utc>>,
    columns: Vec<Column>,
}

impl TimeTable {
    /// The parsed column schema.
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Leading comment rows, joined back into comma-separated lines.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Number of kept data rows.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether the table kept no data rows.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Parsed timestamps in file order.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Numeric column values by name.
    pub fn numeric(&self, name: &str) -> Result<&[Option<f64>]> {
        let idx = self
            .schema
            .column_index(name)
            .ok_or_else(|| IngestError::MissingColumn(name.to_owned()))?;
        match &self.columns[idx] {
            Column::Numeric(vals) => Ok(vals),
            Column::Text(_) => Err(IngestError::NotNumeric(name.to_owned())),
        }
    }

    /// Text column values by name.
    pub fn text(&self, name: &str) -> Result<&[String]> {
        let idx = self
            .schema
            .column_index(name)
            .ok_or_else(|| IngestError::MissingColumn(name.to_owned()))?;
        match &self.columns[idx] {
            Column::Text(vals) => Ok(vals),
            Column::Numeric(_) => Err(IngestError::NotText(name.to_owned())),
        }
    }

    /// A numeric column as timestamped samples, ready for rolling averages.
    pub fn samples(&self, name: &str) -> Result<Vec<SeriesSample<DateTime<Utc>, f64>>> {
        let values = self.numeric(name)?;
        Ok(self
            .timestamps
            .iter()
            .zip(values.iter())
            .map(|(&at, &value)| SeriesSample::new(at, value))
            .collect())
    }
}
