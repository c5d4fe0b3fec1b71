//! The puzzle engine: sole mutation path for a `PuzzleState`.
//!
//! ## Rules
//!
//! A move from rod `a` to rod `b` is legal iff:
//! 1. both rods exist,
//! 2. rod `a` holds at least one disk,
//! 3. rod `b` is empty, or its top disk is strictly larger than the top
//!    disk of `a`.
//!
//! A move onto the same rod never qualifies: an empty rod fails rule 2 and a
//! non-empty one fails rule 3 (a disk is not smaller than itself).
//!
//! The puzzle is completed when the last rod holds every disk. The engine
//! does not lock itself once completed; moves off the goal rod stay legal.
//!
//! ## Out-of-range rods
//!
//! All queries are total. An out-of-range rod has no top disk and takes part
//! in no legal move. Nothing panics on a bad index.

use tracing::{debug, trace};

use crate::core::{Disk, Move, PuzzleConfig, PuzzleState, Rod, RodId};

/// Progress of a puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PuzzleStatus {
    /// The goal rod does not yet hold every disk.
    InProgress,
    /// Every disk sits on the goal rod.
    Completed,
}

impl PuzzleStatus {
    /// Check if the puzzle is completed.
    #[must_use]
    pub fn is_completed(self) -> bool {
        self == PuzzleStatus::Completed
    }
}

/// Generalized Tower of Hanoi engine.
///
/// ## Usage
///
/// ```
/// use babylon_tower::core::RodId;
/// use babylon_tower::rules::PuzzleEngine;
///
/// let mut engine = PuzzleEngine::new(3, 3);
///
/// assert!(engine.apply_move(RodId::new(0), RodId::new(2)));
/// assert!(!engine.apply_move(RodId::new(0), RodId::new(2))); // 2 onto 1
/// assert_eq!(engine.moves_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleEngine {
    state: PuzzleState,
}

impl PuzzleEngine {
    /// Create a puzzle with `disk_count` disks stacked on rod 0 and
    /// `rod_count` rods in total.
    ///
    /// Sizes are not validated. Use `PuzzleConfig::validate` first when they
    /// come from user input.
    #[must_use]
    pub fn new(disk_count: u32, rod_count: u16) -> Self {
        Self {
            state: PuzzleState::new(disk_count, rod_count),
        }
    }

    /// Create a puzzle from a configuration (unvalidated).
    #[must_use]
    pub fn from_config(config: &PuzzleConfig) -> Self {
        Self::new(config.disks, config.rods)
    }

    // === Queries ===

    /// Independent copy of every rod, in index order.
    ///
    /// Mutating the result never affects the engine.
    #[must_use]
    pub fn state(&self) -> Vec<Rod> {
        self.state.rods().to_vec()
    }

    /// Borrow the underlying state.
    #[must_use]
    pub fn puzzle_state(&self) -> &PuzzleState {
        &self.state
    }

    /// Top disk of a rod, or `None` if the rod is empty or out of range.
    #[must_use]
    pub fn top_disk(&self, rod: RodId) -> Option<Disk> {
        self.state.top_disk(rod)
    }

    /// Number of disks, fixed for the engine's lifetime.
    #[must_use]
    pub fn disk_count(&self) -> u32 {
        self.state.disk_count()
    }

    /// Number of rods, fixed for the engine's lifetime.
    #[must_use]
    pub fn rod_count(&self) -> u16 {
        self.state.rod_count()
    }

    /// Number of successful moves so far.
    #[must_use]
    pub fn moves_count(&self) -> u64 {
        self.state.moves_count()
    }

    // === Rules ===

    /// Check whether moving the top disk of `from` onto `to` is legal.
    ///
    /// Pure: never changes state.
    #[must_use]
    pub fn is_valid_move(&self, from: RodId, to: RodId) -> bool {
        if !self.state.contains_rod(from) || !self.state.contains_rod(to) {
            return false;
        }

        let Some(moving) = self.state.top_disk(from) else {
            return false;
        };

        match self.state.top_disk(to) {
            None => true,
            Some(target) => moving < target,
        }
    }

    /// Move the top disk of `from` onto `to` if legal.
    ///
    /// Returns `false` and leaves the state untouched when the move is not
    /// legal. Illegal moves are an ordinary outcome, not an error.
    pub fn apply_move(&mut self, from: RodId, to: RodId) -> bool {
        self.try_move(Move::new(from, to)).is_some()
    }

    /// Apply a move if legal, returning the disk that was moved.
    pub fn try_move(&mut self, mv: Move) -> Option<Disk> {
        if !self.is_valid_move(mv.from, mv.to) {
            trace!(from = mv.from.0, to = mv.to.0, "rejected illegal move");
            return None;
        }

        let disk = self.state.transfer(mv.from, mv.to)?;
        debug_assert!(self.state.check_invariants().is_ok());

        debug!(
            from = mv.from.0,
            to = mv.to.0,
            disk = disk.0,
            moves = self.state.moves_count(),
            "moved disk"
        );
        Some(disk)
    }

    /// Check if every disk sits on the last rod.
    ///
    /// Counting is enough: by conservation and ordering, a goal rod holding
    /// `disk_count` disks holds all of them in order. A puzzle with no rods
    /// is never completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state
            .goal_rod()
            .is_some_and(|rod| rod.len() == self.state.disk_count() as usize)
    }

    /// Current progress.
    #[must_use]
    pub fn status(&self) -> PuzzleStatus {
        if self.is_completed() {
            PuzzleStatus::Completed
        } else {
            PuzzleStatus::InProgress
        }
    }

    /// All legal moves, ordered by source rod then destination rod.
    ///
    /// Recomputed on every call.
    #[must_use]
    pub fn possible_moves(&self) -> Vec<Move> {
        let rod_count = self.rod_count();
        let mut moves = Vec::new();

        for from in RodId::all(rod_count) {
            for to in RodId::all(rod_count) {
                if from != to && self.is_valid_move(from, to) {
                    moves.push(Move::new(from, to));
                }
            }
        }

        moves
    }
}

impl Default for PuzzleEngine {
    fn default() -> Self {
        Self::from_config(&PuzzleConfig::default())
    }
}

impl std::fmt::Display for PuzzleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.state, f)
    }
}
