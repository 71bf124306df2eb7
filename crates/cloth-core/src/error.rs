//! Error types for the cloth core.
//!
//! Fallible operations return `ClothResult<T>`. Caller bugs that leave no
//! meaningful state to recover (edit-window re-entrancy, writes outside an
//! edit window, a non-positive timestep) panic instead.

use thiserror::Error;

/// Unified error type for the cloth core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClothError {
    /// The grid needs at least two rows and two columns to carry any
    /// structural constraint.
    #[error("cloth grid must be at least 2x2, got {rows}x{cols}")]
    InvalidGridDimensions { rows: usize, cols: usize },

    /// Width and height must be positive and finite.
    #[error("cloth extent must be positive and finite, got {width}x{height}")]
    InvalidExtent { width: f32, height: f32 },

    /// A world collection was indexed past its end.
    #[error("{kind} index {index} out of range (count: {count})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        count: usize,
    },

    /// A plane could not be built because its normal has zero length
    /// (collinear points or a zero coefficient vector).
    #[error("degenerate plane: normal has zero length")]
    DegeneratePlane,
}

/// Convenience alias for `Result<T, ClothError>`.
pub type ClothResult<T> = Result<T, ClothError>;
