//! Serializable view of a session for UI collaborators.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::EngineError;
use crate::types::GameStatus;

/// Observable session state, detached from the session's random source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub grid_size: u8,
    pub board: Vec<Vec<u32>>,
    pub score: u64,
    pub status: GameStatus,
    pub win_tile: u32,
    pub max_tile: u32,
    pub moves: u32,
    pub episode_id: u32,
}

impl SessionSnapshot {
    /// Rebuild the board, validating shape and tile values
    pub fn to_board(&self) -> Result<Board, EngineError> {
        let board = Board::from_rows(&self.board)?;
        if board.size() != self.grid_size {
            return Err(EngineError::GridSizeMismatch {
                expected: self.grid_size,
                actual: board.size(),
            });
        }
        Ok(board)
    }
}
