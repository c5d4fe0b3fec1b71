//! Two-tap selection input.
//!
//! Pointer, touch and keyboard front ends all reduce to "the player pressed
//! rod N". The first press picks a source rod, the second press picks the
//! destination and attempts the move. After the second press the selection
//! is always cleared, whether the move went through or not.

use tracing::debug;

use crate::core::{Disk, Move, RodId};
use crate::rules::PuzzleEngine;

/// What a press did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Press {
    /// Nothing selected and the pressed rod cannot be a source
    /// (empty or out of range).
    Ignored,
    /// The pressed rod is now the source.
    Selected(RodId),
    /// A move was applied.
    Moved { mv: Move, disk: Disk },
    /// A move was attempted but is not legal.
    Rejected(Move),
    /// The selection was dropped without attempting a move
    /// (same rod pressed twice, or a press outside every rod).
    Cleared,
}

impl Press {
    /// The applied move, if any.
    #[must_use]
    pub fn applied(&self) -> Option<Move> {
        match self {
            Press::Moved { mv, .. } => Some(*mv),
            _ => None,
        }
    }
}

/// Holds the currently selected source rod, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionController {
    selected: Option<RodId>,
}

impl SelectionController {
    /// Create a controller with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected source rod.
    #[must_use]
    pub fn selected(&self) -> Option<RodId> {
        self.selected
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Handle a press on `rod`.
    pub fn press(&mut self, engine: &mut PuzzleEngine, rod: RodId) -> Press {
        let in_range = rod.index() < engine.rod_count() as usize;

        let Some(source) = self.selected.take() else {
            if in_range && engine.top_disk(rod).is_some() {
                debug!(rod = rod.0, "selected source rod");
                self.selected = Some(rod);
                return Press::Selected(rod);
            }
            return Press::Ignored;
        };

        if !in_range || rod == source {
            debug!(rod = source.0, "cleared selection");
            return Press::Cleared;
        }

        let mv = Move::new(source, rod);
        match engine.try_move(mv) {
            Some(disk) => Press::Moved { mv, disk },
            None => Press::Rejected(mv),
        }
    }

    /// Handle a press that landed on no rod.
    pub fn press_outside(&mut self) -> Press {
        match self.selected.take() {
            Some(_) => Press::Cleared,
            None => Press::Ignored,
        }
    }
}

/// Map a horizontal position to a rod, with rods laid out as equal-width
/// columns across `width`.
///
/// Returns `None` for positions outside `[0, width)` or when there are no
/// rods.
///
/// ```
/// use babylon_tower::core::RodId;
/// use babylon_tower::session::rod_at;
///
/// assert_eq!(rod_at(250.0, 600.0, 3), Some(RodId::new(1)));
/// assert_eq!(rod_at(600.0, 600.0, 3), None);
/// ```
#[must_use]
pub fn rod_at(x: f64, width: f64, rod_count: u16) -> Option<RodId> {
    if rod_count == 0 || width.is_nan() || width <= 0.0 || !(0.0..width).contains(&x) {
        return None;
    }

    let column = width / f64::from(rod_count);
    let index = (x / column).floor() as u16;
    (index < rod_count).then_some(RodId(index))
}
