//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the sliding-tile merge puzzle and the
//! session state machine. It has **no dependencies** on UI, storage or I/O:
//!
//! - **Deterministic**: the spawner draws from an injected [`RandomSource`];
//!   the same seed replays the same game
//! - **Pure moves**: every move takes a [`Board`] by reference and returns a new one
//! - **Allocation-free hot path**: boards and lines live in fixed-size arrays
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid value type (4 <= N <= 8) with transpose/mirror
//! - [`line`]: single-line compaction and merge (the only merge algorithm)
//! - [`transform`]: maps the four directions onto the line reducer
//! - [`rng`]: injectable random sources (seeded LCG, `rand` generators, scripts)
//! - [`spawn`]: places a 2 (90%) or 4 (10%) on a uniformly chosen empty cell
//! - [`terminal`]: win and loss predicates
//! - [`session`]: turn loop, score and status (`playing` / `won` / `lost`)
//! - [`snapshot`]: serializable view of a session
//!
//! # Game Rules
//!
//! - A move slides every tile toward one edge; equal neighbours merge once
//! - A move that changes nothing is ignored (no spawn, no score)
//! - After an accepted move one tile spawns, then win is checked before loss
//! - The win tile is 2048 on 4x4 and doubles per extra row/column
//!
//! # Example
//!
//! ```
//! use twenty48_core::{GameSession, ScriptedRng};
//! use twenty48_core::types::{Direction, GameStatus};
//!
//! // Deterministic session from a seed
//! let mut game = GameSession::new(4, 12345).unwrap();
//! assert_eq!(game.board().tile_count(), 2);
//!
//! let outcome = game.submit_move(Direction::Left);
//! if outcome.moved {
//!     assert_eq!(game.moves(), 1);
//! }
//! assert_eq!(game.status(), GameStatus::Playing);
//!
//! // Fully scripted spawns for tests
//! let game = GameSession::with_rng(4, ScriptedRng::new(vec![0.0])).unwrap();
//! assert_eq!(game.board().get(0, 0), Some(2));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod line;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod terminal;
pub mod transform;

pub use twenty48_types as types;

// Re-export commonly used types for convenience
pub use board::{is_valid_tile, Board, Line, MAX_LINE};
pub use config::SessionConfig;
pub use error::EngineError;
pub use line::{can_merge, reduce_line, LineReduction};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use session::{new_session, restart, submit_move, GameSession, MoveOutcome};
pub use snapshot::SessionSnapshot;
pub use spawn::{spawn_tile, spawn_value, SpawnResult};
pub use terminal::{classify, has_moves, has_win_tile, is_stuck};
pub use transform::{apply_move, can_move, MoveResult};
