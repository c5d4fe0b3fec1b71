//! Collaborators that drive a puzzle from a front end.
//!
//! ## Key Types
//!
//! - `SelectionController`: turns two rod presses into one move
//! - `Session`: owns the engine, resets it, logs moves, notifies observers
//! - `DiskPalette`: per-disk display colors
//!
//! None of these touch puzzle state directly; everything goes through
//! `PuzzleEngine`.

pub mod controller;
pub mod palette;
#[allow(clippy::module_inception)]
pub mod session;

pub use controller::{rod_at, Press, SelectionController};
pub use palette::{DiskColor, DiskPalette};
pub use session::{MoveObserver, PressOutcome, Session};
