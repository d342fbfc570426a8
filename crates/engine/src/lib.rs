//! Engine module - drivers built on top of the core rules
//!
//! - [`replay`]: parse a move script and run it against a session
//! - [`scores`]: best score per grid size over a pluggable store
//!
//! Nothing here persists data; a UI collaborator supplies its own
//! [`ScoreStore`] when best scores must survive restarts.

pub mod replay;
pub mod scores;

pub use twenty48_core as core;
pub use twenty48_types as types;

pub use replay::{parse_moves, replay, ReplaySummary};
pub use scores::{BestScoreTracker, MemoryScoreStore, ScoreStore};
