//! 2048 rules engine (workspace facade crate).
//!
//! This package re-exports the workspace crates under short names
//! (`twenty48::{core, engine, types}`) and hosts the headless command-line
//! driver in [`cli`].

pub mod cli;

pub use twenty48_core as core;
pub use twenty48_engine as engine;
pub use twenty48_types as types;
