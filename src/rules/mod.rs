//! Puzzle rules.
//!
//! `PuzzleEngine` owns a `PuzzleState` and is the only way to change it:
//! - which moves are legal
//! - how a legal move changes the state
//! - when the puzzle counts as completed

pub mod engine;

pub use engine::{PuzzleEngine, PuzzleStatus};
