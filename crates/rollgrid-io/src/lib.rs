//! # rollgrid-io — CSV time-series ingestion for rollgrid
//!
//! Reads station-export style CSV files (leading comment rows, a header
//! row, a units row, then data) into an immutable [`TimeTable`]: parsed
//! `chrono` timestamps, unit-coerced numeric columns with explicit absent
//! cells, and raw text columns.
//!
//! The table hands a column straight to the core rolling average:
//!
//! ```no_run
//! use chrono::TimeDelta;
//! use rollgrid::prelude::*;
//! use rollgrid_io::TimeTableReader;
//!
//! let table = TimeTableReader::new().read_path("ozone_sept_2017.csv")?;
//! let samples = table.samples("ozone_concentration_set_1")?;
//!
//! let result = Rolling::new()
//!     .window_radius(48)
//!     .margin(TimeDelta::hours(4))
//!     .build()?
//!     .compute_samples(&samples)?;
//!
//! assert_eq!(result.len(), table.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Schema metadata (column names, units) is parsed once per file into an
//! immutable value object; nothing in the table mutates after reading.

// Error types.
mod errors;

// Parsed column schema.
mod schema;

// CSV reading.
mod reader;

pub use errors::{IngestError, Result};
pub use reader::{Column, ReaderConfig, TimeTable, TimeTableReader};
pub use schema::TableSchema;
