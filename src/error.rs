//! Error types for yaml-fold.
//!
//! Folding and unfolding never fail; errors come only from parsing scalar
//! headers and configuration strings, and from the block scalar writer.

use thiserror::Error;

/// Result type alias for yaml-fold operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for yaml-fold operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Fold mode name not recognised (expected `plain`, `quoted` or `block`).
    #[error("unknown fold mode: {0:?}")]
    UnknownFoldMode(String),
    /// Chomping name not recognised (expected `clip`, `strip` or `keep`).
    #[error("unknown chomping mode: {0:?}")]
    UnknownChomping(String),
    /// Malformed block scalar header line (e.g. `>2-`).
    #[error("invalid block scalar header: {0:?}")]
    InvalidBlockHeader(String),
    /// Indentation indicator would fall outside `1..=9`.
    #[error("block scalar indentation indicator must be in 1..=9, got {0}")]
    IndentIndicatorOutOfRange(usize),
    /// A non-blank body line is indented less than the scalar's base indentation.
    #[error("line {line} of block scalar is indented less than its content")]
    LessIndentedLine { line: usize },
}
