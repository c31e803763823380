//! Parsed table schema.
//!
//! A [`TableSchema`] is an immutable value object built once per file from
//! the header and units rows. It owns the column order, the name-to-index
//! lookup, and the per-column unit strings; a column with an empty unit is
//! textual, everything else is numeric.

use std::collections::HashMap;

// ============================================================================
// Table Schema
// ============================================================================

/// Immutable column schema of a parsed table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    names: Vec<String>,
    units: Vec<String>,
    index: HashMap<String, usize>,
}

impl TableSchema {
    /// Build a schema from the header and units rows.
    ///
    /// The two rows must have equal lengths; the reader enforces this
    /// before construction. Duplicate names keep their first position.
    pub(crate) fn new(names: Vec<String>, units: Vec<String>) -> Self {
        debug_assert_eq!(names.len(), units.len());
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            index.entry(name.clone()).or_insert(i);
        }
        Self {
            names,
            units,
            index,
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column names in file order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Unit string of the column at `idx`.
    pub fn unit(&self, idx: usize) -> Option<&str> {
        self.units.get(idx).map(String::as_str)
    }

    /// Whether the column at `idx` carries numeric data.
    ///
    /// A declared unit marks a numeric column; an empty unit marks text.
    pub fn is_numeric(&self, idx: usize) -> bool {
        self.units.get(idx).map(|u| !u.is_empty()).unwrap_or(false)
    }
}
