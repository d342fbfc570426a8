//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the rules engine, the replay
//! driver and any UI collaborator. Everything here is plain data with no game
//! logic, so it can be used from any context (engine, tooling, front ends).
//!
//! # Grid Dimensions
//!
//! Boards are square. The grid size `N` is chosen per session:
//!
//! - **Minimum**: 4 (the classic 4x4 game)
//! - **Maximum**: 8
//! - **Default**: 4
//!
//! # Win Tile by Grid Size
//!
//! The win threshold doubles for every step of `N` above 4:
//!
//! | Grid | Win tile |
//! |------|----------|
//! | 4x4 | 2048 |
//! | 5x5 | 4096 |
//! | 6x6 | 8192 |
//! | 7x7 | 16384 |
//! | 8x8 | 32768 |
//!
//! # Spawning
//!
//! New tiles are `2` with probability 0.9 and `4` with probability 0.1.
//! A fresh board starts with [`INITIAL_TILES`] spawned tiles.
//!
//! # Examples
//!
//! ```
//! use twenty48_types::{win_tile, Direction, GameStatus, DEFAULT_GRID_SIZE};
//!
//! // Parse directions from names or WASD keys (case-insensitive)
//! let dir: Direction = "Left".parse().unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(Direction::from_key('w'), Some(Direction::Up));
//!
//! // Win tile depends on the grid size
//! assert_eq!(win_tile(DEFAULT_GRID_SIZE), 2048);
//! assert_eq!(win_tile(6), 8192);
//!
//! assert!(!GameStatus::Playing.is_terminal());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Smallest supported grid size
pub const MIN_GRID_SIZE: u8 = 4;

/// Largest supported grid size
pub const MAX_GRID_SIZE: u8 = 8;

/// Grid size used when none is configured
pub const DEFAULT_GRID_SIZE: u8 = 4;

/// Maximum number of cells on any supported board (8x8)
pub const MAX_CELLS: usize = (MAX_GRID_SIZE as usize) * (MAX_GRID_SIZE as usize);

/// Win tile on the smallest (4x4) grid
pub const BASE_WIN_TILE: u32 = 2048;

/// Number of tiles spawned onto an empty board at game start/restart
pub const INITIAL_TILES: usize = 2;

/// Probability that a spawned tile is a 2 (otherwise it is a 4)
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Value of the common spawned tile
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value of the rare spawned tile
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// Largest tile a cell can hold. Two of these never merge, since their sum
/// does not fit in a `u32` cell.
pub const MAX_TILE: u32 = 1 << 31;

/// Returns true if `size` is a supported grid size
pub fn is_valid_grid_size(size: u8) -> bool {
    (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size)
}

/// Win threshold for a grid of the given size.
///
/// Sizes below the supported range fall back to [`BASE_WIN_TILE`]; sizes above
/// it saturate at the 8x8 value. Callers validate the size before creating a
/// session, so these fallbacks only matter for ad-hoc queries.
///
/// # Examples
///
/// ```
/// use twenty48_types::win_tile;
///
/// assert_eq!(win_tile(4), 2048);
/// assert_eq!(win_tile(5), 4096);
/// assert_eq!(win_tile(8), 32768);
/// ```
pub fn win_tile(grid_size: u8) -> u32 {
    let steps = grid_size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE) - MIN_GRID_SIZE;
    BASE_WIN_TILE << steps
}

/// The four move directions
///
/// A move slides every tile as far as possible toward the named edge,
/// merging equal neighbours once per move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a WASD key to a direction (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_types::Direction;
    ///
    /// assert_eq!(Direction::from_key('a'), Some(Direction::Left));
    /// assert_eq!(Direction::from_key('D'), Some(Direction::Right));
    /// assert_eq!(Direction::from_key('x'), None);
    /// ```
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            'a' => Some(Direction::Left),
            's' => Some(Direction::Down),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Map a single-letter spelling to a direction.
    ///
    /// Accepts the WASD keys plus `u`, `l` and `r`. There is no single letter
    /// for down other than `s`, because `d` already means right.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'u' => Some(Direction::Up),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            other => Self::from_key(other),
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True for `Up` and `Down`
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// The direction pointing the other way
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a direction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction {input:?} (expected up, down, left or right)")]
pub struct ParseDirectionError {
    pub input: String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parse a direction (case-insensitive).
    ///
    /// Accepts full names, arrow-key names and single letters:
    /// "up" | "arrowup" | "u" | "w", "down" | "arrowdown" | "s",
    /// "left" | "arrowleft" | "l" | "a", "right" | "arrowright" | "r" | "d"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let parsed = match lowered.as_str() {
            "up" | "arrowup" => Some(Direction::Up),
            "down" | "arrowdown" => Some(Direction::Down),
            "left" | "arrowleft" => Some(Direction::Left),
            "right" | "arrowright" => Some(Direction::Right),
            _ => {
                let mut chars = lowered.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => Direction::from_letter(letter),
                    _ => None,
                }
            }
        };
        parsed.ok_or_else(|| ParseDirectionError {
            input: s.to_string(),
        })
    }
}

/// Session status
///
/// - **Playing**: moves are accepted
/// - **Won**: a tile reached the win threshold (terminal)
/// - **Lost**: the board is full with no adjacent equal tiles (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// True for `Won` and `Lost`
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tile placed by the spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnedTile {
    pub row: u8,
    pub col: u8,
    pub value: u32,
}
