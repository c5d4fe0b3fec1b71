//! Core puzzle types: disks, rods, moves, configuration, state, RNG.
//!
//! These are value types with no rules attached. The move legality rule and
//! the completion check live in `rules`.

pub mod disk;
pub mod rod;
pub mod config;
pub mod action;
pub mod state;
pub mod rng;

pub use disk::{Disk, RodId};
pub use rod::Rod;
pub use config::{PuzzleConfig, DEFAULT_DISKS, DEFAULT_RODS, MAX_DISKS};
pub use action::{Move, MoveRecord};
pub use state::PuzzleState;
pub use rng::PuzzleRng;
