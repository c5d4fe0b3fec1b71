//! Puzzle state: rods, disk count, move counter.
//!
//! `PuzzleState` is a plain value holder. It knows how to lay out the
//! starting position and how to relocate a disk, but not whether a
//! relocation is legal; that lives in `rules::PuzzleEngine`, which is the
//! only code that mutates a state.
//!
//! ## Invariants
//!
//! For every state reachable through `PuzzleEngine`:
//! - the disks across all rods are exactly 1..=disk_count, each once
//! - every rod strictly decreases from bottom to top
//! - `moves_count` only ever grows, by one per applied move

use super::disk::{Disk, RodId};
use super::rod::Rod;
use crate::error::InvariantViolation;

/// Authoritative puzzle state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleState {
    rods: Vec<Rod>,
    disk_count: u32,
    moves_count: u64,
}

impl PuzzleState {
    /// Create the starting position: `rod_count` rods with every disk on
    /// rod 0, largest at the bottom.
    ///
    /// With zero rods the disks have nowhere to go and the state is empty.
    #[must_use]
    pub fn new(disk_count: u32, rod_count: u16) -> Self {
        let mut rods = vec![Rod::new(); rod_count as usize];

        if let Some(first) = rods.first_mut() {
            for disk in Disk::largest_first(disk_count) {
                first.push(disk);
            }
        }

        Self {
            rods,
            disk_count,
            moves_count: 0,
        }
    }

    /// Number of disks, fixed at construction.
    #[must_use]
    pub fn disk_count(&self) -> u32 {
        self.disk_count
    }

    /// Number of rods, fixed at construction.
    #[must_use]
    pub fn rod_count(&self) -> u16 {
        self.rods.len() as u16
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn moves_count(&self) -> u64 {
        self.moves_count
    }

    /// All rods, in index order.
    #[must_use]
    pub fn rods(&self) -> &[Rod] {
        &self.rods
    }

    /// Get a rod by ID, or `None` if out of range.
    #[must_use]
    pub fn rod(&self, rod: RodId) -> Option<&Rod> {
        self.rods.get(rod.index())
    }

    /// Top disk of a rod. `None` if the rod is empty or out of range.
    #[must_use]
    pub fn top_disk(&self, rod: RodId) -> Option<Disk> {
        self.rod(rod).and_then(Rod::top)
    }

    /// Check if a rod ID refers to an existing rod.
    #[must_use]
    pub fn contains_rod(&self, rod: RodId) -> bool {
        rod.index() < self.rods.len()
    }

    /// The goal rod (always the last one).
    #[must_use]
    pub fn goal_rod(&self) -> Option<&Rod> {
        self.rods.last()
    }

    /// Relocate the top disk of `from` onto `to` and count the move.
    ///
    /// Returns the moved disk, or `None` (state untouched) if `from` is
    /// empty or either rod is out of range. Size rules are not checked.
    pub(crate) fn transfer(&mut self, from: RodId, to: RodId) -> Option<Disk> {
        if !self.contains_rod(to) {
            return None;
        }
        let disk = self.rods.get_mut(from.index())?.pop()?;
        self.rods[to.index()].push(disk);
        self.moves_count += 1;
        Some(disk)
    }

    /// Verify disk conservation and per-rod ordering.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for (index, rod) in self.rods.iter().enumerate() {
            if !rod.is_ordered() {
                return Err(InvariantViolation::Ordering {
                    rod: RodId(index as u16),
                });
            }
        }

        // With no rods there is nowhere to hold disks; nothing to conserve.
        if self.rods.is_empty() {
            return Ok(());
        }

        let mut found: Vec<u32> = self
            .rods
            .iter()
            .flat_map(|rod| rod.disks().iter().map(|d| d.size()))
            .collect();
        found.sort_unstable();

        let conserved = found.len() == self.disk_count as usize
            && found.iter().zip(1..).all(|(&size, expected)| size == expected);

        if conserved {
            Ok(())
        } else {
            Err(InvariantViolation::DiskConservation {
                expected: self.disk_count,
                found,
            })
        }
    }
}

impl std::fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, rod) in self.rods.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "Rod {}: {}", index, rod)?;
        }
        Ok(())
    }
}
