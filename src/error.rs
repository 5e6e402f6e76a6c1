//! Error types for codec operations.

use thiserror::Error;

/// Errors produced by the codec units.
///
/// Every failure in this crate is a property of the caller's input,
/// detected synchronously before any computation; there are no partial
/// results and no internal state to corrupt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input was malformed or degenerate: non-binary characters, empty
    /// input, or a length the operation cannot accept.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;
