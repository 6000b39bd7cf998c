//! Error types for tablerlib

use thiserror::Error;

/// Errors raised when building or querying schemas, rows and tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A column name appears more than once
    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    /// Number of values does not match the schema length
    #[error("expected {expected} values, got {actual}")]
    RowArityMismatch { expected: usize, actual: usize },

    /// Row schema differs from the table schema
    #[error("row schema {actual} does not match table schema {expected}")]
    SchemaMismatch { expected: String, actual: String },

    /// Name-based access to a column the schema does not have
    #[error("no column named '{0}' exists")]
    UnknownColumn(String),

    /// Positional access outside the row
    #[error("index {index} out of bounds, row has {len} cells")]
    IndexOutOfBounds { index: usize, len: usize },
}
