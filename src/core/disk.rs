//! Disk and rod identification.
//!
//! ## Disk
//!
//! A disk is identified by its size. Sizes are unique across the puzzle and
//! run from 1 (smallest) to `disk_count` (largest).
//!
//! ## RodId
//!
//! Opaque rod index, 0-based. The last rod (`rod_count - 1`) is always the
//! goal rod.

use serde::{Deserialize, Serialize};

/// A disk, identified by its size.
///
/// Disks compare by size: a smaller disk may rest on a larger one.
///
/// ```
/// use babylon_tower::core::Disk;
///
/// assert!(Disk::new(1) < Disk::new(3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Disk(pub u32);

impl Disk {
    /// Create a disk of the given size.
    #[must_use]
    pub const fn new(size: u32) -> Self {
        Self(size)
    }

    /// Get the disk size.
    #[must_use]
    pub const fn size(self) -> u32 {
        self.0
    }

    /// Iterate over all disks of a puzzle with `disk_count` disks,
    /// largest first.
    ///
    /// This is the order in which disks are stacked onto the first rod.
    pub fn largest_first(disk_count: u32) -> impl DoubleEndedIterator<Item = Disk> {
        (1..=disk_count).rev().map(Disk)
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rod identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RodId(pub u16);

impl RodId {
    /// A rod ID that names no rod in any puzzle.
    ///
    /// Rod counts are `u16`, so the highest existing index is
    /// `u16::MAX - 1`.
    pub const PAST_END: RodId = RodId(u16::MAX);

    /// Create a new rod ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the rod index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all rod IDs for a puzzle with `rod_count` rods.
    pub fn all(rod_count: u16) -> impl Iterator<Item = RodId> {
        (0..rod_count).map(RodId)
    }

    /// The goal rod for a puzzle with `rod_count` rods.
    ///
    /// Returns `None` when there are no rods.
    #[must_use]
    pub fn goal(rod_count: u16) -> Option<RodId> {
        rod_count.checked_sub(1).map(RodId)
    }
}

impl std::fmt::Display for RodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rod {}", self.0)
    }
}
