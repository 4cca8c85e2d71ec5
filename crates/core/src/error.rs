//! Error types for Skerry

use thiserror::Error;

/// Reasons a grid could not be constructed.
///
/// Raised before any `Grid` exists; no partially built grid is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("expected {expected} rows, got {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell buffer has {found} values, expected {rows}x{cols}")]
    BufferLength { rows: usize, cols: usize, found: usize },

    #[error("grid of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("invalid cell value {value} at ({row}, {col}): expected 0 (water) or 1 (land)")]
    InvalidValue { row: usize, col: usize, value: i64 },
}

/// Main error type for Skerry operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid grid shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("Position out of bounds: ({row}, {col}) in grid of size ({rows}, {cols})")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Too many components: island ids are limited to {limit}")]
    TooManyComponents { limit: u32 },
}

/// Result type alias for Skerry operations
pub type Result<T> = std::result::Result<T, Error>;
