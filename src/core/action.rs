//! Move representation.
//!
//! A move relocates the top disk of one rod onto another. Moves are plain
//! values: building one says nothing about whether it is legal. Legality is
//! decided by `PuzzleEngine::is_valid_move`.

use serde::{Deserialize, Serialize};

use super::disk::{Disk, RodId};

/// A request to move the top disk of `from` onto `to`.
///
/// ## Example
///
/// ```
/// use babylon_tower::core::{Move, RodId};
///
/// let mv = Move::new(RodId::new(0), RodId::new(2));
/// assert_eq!(mv.from, RodId::new(0));
/// assert_eq!(mv.to, RodId::new(2));
/// assert_eq!(Move::between(0, 2), mv);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Source rod.
    pub from: RodId,

    /// Destination rod.
    pub to: RodId,
}

impl Move {
    /// Create a move between two rods.
    #[must_use]
    pub const fn new(from: RodId, to: RodId) -> Self {
        Self { from, to }
    }

    /// Create a move from raw rod indices.
    #[must_use]
    pub const fn between(from: u16, to: u16) -> Self {
        Self::new(RodId(from), RodId(to))
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.to, self.from)
    }

    /// Raw `(from, to)` indices.
    #[must_use]
    pub const fn as_pair(self) -> (u16, u16) {
        (self.from.0, self.to.0)
    }
}

impl From<(u16, u16)> for Move {
    fn from((from, to): (u16, u16)) -> Self {
        Self::between(from, to)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from.0, self.to.0)
    }
}

/// A move that was applied, with the disk it carried.
///
/// Used for the session move log (replay/debugging).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The applied move.
    pub mv: Move,

    /// The disk that was moved.
    pub disk: Disk,

    /// Move count after this move was applied (1 for the first move).
    pub sequence: u64,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(mv: Move, disk: Disk, sequence: u64) -> Self {
        Self { mv, disk, sequence }
    }
}
