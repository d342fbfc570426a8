//! RNG module - injectable random sources for the spawner
//!
//! The spawner is the only nondeterministic part of the engine. It never calls
//! an ambient random function; it draws uniform values in `[0, 1)` from a
//! [`RandomSource`] handed to it by the caller.
//!
//! Provided sources:
//!
//! - [`SimpleRng`]: seeded LCG, the default for sessions (same seed, same game)
//! - any [`rand::RngCore`] generator, e.g. `rand::thread_rng()`
//! - [`ScriptedRng`]: replays a fixed list of values, for tests

use rand::Rng;

/// A source of uniform random values in `[0, 1)`
pub trait RandomSource {
    /// Next value, uniformly distributed in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `[0, len)`; `len` must be non-zero
    fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let idx = (self.next_unit() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }
}

impl<R: rand::RngCore + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (can be fed back to [`SimpleRng::new`] to resume)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }
}

/// Replays a fixed sequence of unit values, cycling when exhausted.
///
/// Values are clamped into `[0, 1)`. An empty script always yields `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedRng {
    values: Vec<f64>,
    pos: usize,
}

impl ScriptedRng {
    /// Draw that selects a `2` when used as the spawn value roll
    pub const TWO: f64 = 0.0;

    /// Draw that selects a `4` when used as the spawn value roll
    pub const FOUR: f64 = 0.95;

    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }

    /// The unit value that picks `slot` out of `len` equally likely choices
    pub fn unit_for_slot(slot: usize, len: usize) -> f64 {
        debug_assert!(slot < len);
        (slot as f64 + 0.5) / len as f64
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
