//! Structured error types for gridsheet.
//!
//! Most of the core reports failure through return values (`bool` /
//! `Option`) because UI callers are expected to be defensive about
//! input timing; the `Result` surface below is reserved for sheet
//! mutations where the caller asked for a reason.

/// All errors that can occur when mutating a sheet.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The coordinate lies outside the sheet bounds.
    #[error("cell ({row}, {col}) is outside the sheet bounds")]
    OutOfBounds { row: i32, col: i32 },

    /// The target cell refused the mutation.
    #[error("cell ({row}, {col}) is read-only")]
    ReadOnly { row: i32, col: i32 },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
