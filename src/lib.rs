//! # babylon-tower
//!
//! A generalized Tower of Hanoi engine: N disks, M rods.
//!
//! ## Rules
//!
//! - Disks are sized 1..=N and start stacked on rod 0, largest at the bottom.
//! - A move takes the top disk of one rod and places it on another rod that
//!   is empty or whose top disk is larger.
//! - The puzzle is completed when the last rod holds every disk.
//!
//! ## Design Principles
//!
//! 1. **Passive engine**: `PuzzleEngine` holds state and answers questions.
//!    It does no I/O, never blocks, and does not lock itself once solved.
//!
//! 2. **Illegal moves are ordinary**: they return `false`, never an error.
//!
//! 3. **Total queries**: out-of-range rods have no top disk and take part in
//!    no legal move. Nothing panics on a bad index.
//!
//! ## Modules
//!
//! - `core`: disks, rods, moves, configuration, state, RNG
//! - `rules`: `PuzzleEngine`, the only mutation path for puzzle state
//! - `session`: input selection, reset/configuration, move log, palettes
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use babylon_tower::{Move, PuzzleEngine};
//!
//! let mut engine = PuzzleEngine::new(3, 3);
//! for (from, to) in [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)] {
//!     assert!(engine.try_move(Move::between(from, to)).is_some());
//! }
//! assert!(engine.is_completed());
//! assert_eq!(engine.moves_count(), 7);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Disk, RodId, Rod,
    Move, MoveRecord,
    PuzzleConfig, PuzzleState, PuzzleRng,
};

pub use crate::error::{ConfigError, InvariantViolation};

pub use crate::rules::{PuzzleEngine, PuzzleStatus};

pub use crate::session::{
    rod_at, Press, PressOutcome, SelectionController, Session,
    DiskColor, DiskPalette,
};
