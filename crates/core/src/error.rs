//! Error types for board construction and session setup.

use crate::types::{ParseDirectionError, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Errors surfaced by the engine.
///
/// Moving never fails: every [`Direction`](crate::types::Direction) is valid on
/// every well-formed board. Errors only arise when a caller supplies
/// configuration or board data from outside.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(
        "grid size {size} is outside the supported range {min}..={max}",
        min = MIN_GRID_SIZE,
        max = MAX_GRID_SIZE
    )]
    InvalidGridSize { size: usize },

    #[error(transparent)]
    InvalidDirection(#[from] ParseDirectionError),

    #[error("tile {value} at ({row}, {col}) is not a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u32 },

    #[error("board is {actual}x{actual} but the session expects {expected}x{expected}")]
    GridSizeMismatch { expected: u8, actual: u8 },

    #[error("board rows are not square: {rows} rows, row of length {cols}")]
    NotSquare { rows: usize, cols: usize },
}
