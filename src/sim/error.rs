//! Error types for board construction and stroke input
//!
//! Degenerate geometry (tangent or nested circles, zero-length strokes) is a
//! valid "nothing happens" outcome, never an error. Only contract violations
//! in the input data end up here.

use thiserror::Error;

/// Errors surfaced to the caller when input data breaks the board's contract
#[derive(Error, Debug)]
pub enum BoardError {
    /// A circle's radius is zero, negative or NaN
    #[error("circle {index} has non-positive radius {radius}")]
    NonPositiveRadius { index: usize, radius: f64 },

    /// A circle's center or radius is not a finite number
    #[error("circle {index} has non-finite geometry")]
    NonFiniteCircle { index: usize },

    /// A stroke endpoint is NaN or infinite
    #[error("stroke has non-finite endpoints")]
    NonFiniteSegment,

    /// A board document failed to parse
    #[error("invalid board document: {0}")]
    Parse(#[from] serde_json::Error),
}
