//! Error types for engine operations.

use thiserror::Error;

/// Errors returned by engine construction and coordinate-taking operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Construction with a non-positive row or column count.
    #[error("invalid grid dimensions {rows}x{columns}: both must be positive")]
    InvalidDimension { rows: i32, columns: i32 },

    /// A coordinate outside `[0, rows) x [0, columns)`.
    #[error("cell ({row}, {col}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: i32,
        columns: i32,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
