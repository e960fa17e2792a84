//! Error types for constructing boards and shape grids.
//!
//! Gameplay itself never fails: rejected moves and rotations are reported as
//! `false`. These errors only come out of constructors fed with bad dimensions
//! or malformed grids.

use thiserror::Error;

/// Result type alias for grid construction
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised when building a [`crate::Board`] or a [`crate::ShapeGrid`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Board dimensions must be in `1..=127` so every cell is addressable with `i8`
    #[error("invalid board size {width}x{height}: each side must be between 1 and {max}")]
    InvalidBoardSize { width: u8, height: u8, max: u8 },

    /// Shape grids are at most 4x4 and at least 1x1
    #[error("invalid shape size {rows}x{cols}: shapes must fit in 4x4")]
    InvalidShapeSize { rows: usize, cols: usize },

    /// Every row of a shape grid must have the same length
    #[error("ragged shape: row {row} has {len} cells, expected {expected}")]
    RaggedShape {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Shape cells may only be 0 or 1
    #[error("shape cell ({x}, {y}) holds {value}; only 0 and 1 are allowed")]
    NonBinaryCell { x: usize, y: usize, value: u8 },
}
