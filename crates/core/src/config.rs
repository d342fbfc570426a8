//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::{is_valid_grid_size, win_tile, DEFAULT_GRID_SIZE};

/// Parameters fixed for a session's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Grid dimension N (4..=8)
    pub grid_size: u8,
    /// Seed for the session's [`SimpleRng`](crate::rng::SimpleRng)
    pub seed: u32,
}

impl SessionConfig {
    pub fn new(grid_size: u8, seed: u32) -> Self {
        Self { grid_size, seed }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !is_valid_grid_size(self.grid_size) {
            return Err(EngineError::InvalidGridSize {
                size: self.grid_size as usize,
            });
        }
        Ok(())
    }

    /// Win threshold implied by the grid size
    pub fn win_tile(&self) -> u32 {
        win_tile(self.grid_size)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            seed: 1,
        }
    }
}
