//! Best score per grid size.
//!
//! The session only knows its current score. Best scores are kept here,
//! keyed by grid size, behind the [`ScoreStore`] trait so the UI collaborator
//! decides where they live.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key-value store of best scores, keyed by grid size
pub trait ScoreStore {
    /// Best recorded score for `grid_size` (0 if none)
    fn best(&self, grid_size: u8) -> u64;

    /// Overwrite the best score for `grid_size`
    fn set_best(&mut self, grid_size: u8, score: u64);
}

/// In-memory store; serializable so callers can persist it however they like
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryScoreStore {
    best: BTreeMap<u8, u64>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid sizes with a recorded score, ascending
    pub fn grid_sizes(&self) -> impl Iterator<Item = u8> + '_ {
        self.best.keys().copied()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn best(&self, grid_size: u8) -> u64 {
        self.best.get(&grid_size).copied().unwrap_or(0)
    }

    fn set_best(&mut self, grid_size: u8, score: u64) {
        self.best.insert(grid_size, score);
    }
}

/// Records new best scores as a session's score grows
#[derive(Debug, Clone, Default)]
pub struct BestScoreTracker<S = MemoryScoreStore> {
    store: S,
}

impl<S: ScoreStore> BestScoreTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record `score` for `grid_size` if it beats the stored best.
    /// Returns true when a new best was written.
    pub fn observe(&mut self, grid_size: u8, score: u64) -> bool {
        let best = self.store.best(grid_size);
        if score <= best {
            return false;
        }
        self.store.set_best(grid_size, score);
        tracing::debug!(grid_size, score, previous = best, "new best score");
        true
    }

    pub fn best(&self, grid_size: u8) -> u64 {
        self.store.best(grid_size)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
