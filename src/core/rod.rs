//! A single rod: an ordered stack of disks.
//!
//! Index 0 is the bottom of the rod, the last element is the top and the
//! only movable disk. Disks strictly decrease from bottom to top.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::disk::Disk;

/// An ordered stack of disks, bottom first.
///
/// SmallVec keeps typical puzzles (up to 8 disks per rod) off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rod {
    disks: SmallVec<[Disk; 8]>,
}

impl Rod {
    /// Create an empty rod.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rod holding the given disks, bottom first.
    ///
    /// Does not check ordering; see `is_ordered`.
    #[must_use]
    pub fn from_disks(disks: &[Disk]) -> Self {
        Self {
            disks: SmallVec::from_slice(disks),
        }
    }

    /// The top (movable) disk, or `None` if the rod is empty.
    #[must_use]
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Number of disks on this rod.
    #[must_use]
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Check if the rod holds no disks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Disks on this rod, bottom first.
    #[must_use]
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Check that disks strictly decrease from bottom to top.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[0] > pair[1])
    }

    /// Place a disk on top. Legality is the caller's concern.
    pub(crate) fn push(&mut self, disk: Disk) {
        self.disks.push(disk);
    }

    /// Remove the top disk.
    pub(crate) fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }
}

impl From<Vec<u32>> for Rod {
    fn from(sizes: Vec<u32>) -> Self {
        Self {
            disks: sizes.into_iter().map(Disk).collect(),
        }
    }
}

impl std::fmt::Display for Rod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for disk in &self.disks {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", disk)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rod() {
        let rod = Rod::new();
        assert!(rod.is_empty());
        assert_eq!(rod.top(), None);
        assert!(rod.is_ordered());
    }

    #[test]
    fn test_push_pop_top() {
        let mut rod = Rod::new();
        rod.push(Disk(3));
        rod.push(Disk(1));

        assert_eq!(rod.len(), 2);
        assert_eq!(rod.top(), Some(Disk(1)));
        assert_eq!(rod.pop(), Some(Disk(1)));
        assert_eq!(rod.top(), Some(Disk(3)));
    }

    #[test]
    fn test_ordering() {
        assert!(Rod::from(vec![5, 3, 1]).is_ordered());
        assert!(!Rod::from(vec![1, 3]).is_ordered());
        assert!(!Rod::from(vec![2, 2]).is_ordered());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rod::from(vec![3, 2, 1]).to_string(), "3 2 1");
        assert_eq!(Rod::new().to_string(), "");
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let sizes: Vec<u32> = (1..=20).rev().collect();
        let rod = Rod::from(sizes);
        assert_eq!(rod.len(), 20);
        assert_eq!(rod.top(), Some(Disk(1)));
        assert!(rod.is_ordered());
    }
}
