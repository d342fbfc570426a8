//! Spawner - places one new tile on a random empty cell
//!
//! The cell is drawn first (uniform over empty cells in row-major order),
//! then the value: `2` with probability 0.9, `4` otherwise.

use crate::board::Board;
use crate::rng::RandomSource;
use crate::types::{SpawnedTile, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE, SPAWN_TWO_PROBABILITY};

/// Board after a spawn attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnResult {
    pub board: Board,
    /// The placed tile, or None if the board was full
    pub tile: Option<SpawnedTile>,
}

/// Pick the spawn value from one unit draw
#[inline]
pub fn spawn_value(roll: f64) -> u32 {
    if roll < SPAWN_TWO_PROBABILITY {
        SPAWN_LOW_VALUE
    } else {
        SPAWN_HIGH_VALUE
    }
}

/// Spawn one tile onto a copy of `board`.
///
/// A full board is returned unchanged with `tile == None`, and no random
/// values are consumed.
pub fn spawn_tile<R: RandomSource + ?Sized>(board: &Board, rng: &mut R) -> SpawnResult {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return SpawnResult {
            board: board.clone(),
            tile: None,
        };
    }

    let (row, col) = empty[rng.next_index(empty.len())];
    let value = spawn_value(rng.next_unit());

    let mut out = board.clone();
    out.set(row as usize, col as usize, value);
    tracing::trace!(row, col, value, "spawned tile");

    SpawnResult {
        board: out,
        tile: Some(SpawnedTile { row, col, value }),
    }
}
