//! Error types for CSV time-series ingestion.

use thiserror::Error;

/// Error type for table ingestion.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("table ended before the header and units rows")]
    MissingPreamble,

    #[error("table has no data rows")]
    EmptyTable,

    #[error("missing column: '{0}'")]
    MissingColumn(String),

    #[error("column '{0}' is not numeric (no unit declared)")]
    NotNumeric(String),

    #[error("column '{0}' is not textual (unit declared)")]
    NotText(String),

    #[error("row {row}: cannot parse timestamp '{value}'")]
    BadTimestamp { row: usize, value: String },

    #[error("row {row}: expected {expected} fields, got {got}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
