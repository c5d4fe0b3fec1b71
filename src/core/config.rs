//! Puzzle configuration.
//!
//! Hosts describe the puzzle they want with a `PuzzleConfig`:
//! - `disks`: number of disks, sized 1..=disks
//! - `rods`: number of rods; the last one is the goal rod
//!
//! `PuzzleEngine::new` accepts any sizes without checking them. Hosts that
//! take sizes from users go through `validate` (or `Session`, which always
//! validates) to reject puzzles that cannot be played.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest disk count a validated configuration accepts.
pub const MAX_DISKS: u32 = 64;

/// Disk count used when none is given.
pub const DEFAULT_DISKS: u32 = 3;

/// Rod count used when none is given.
pub const DEFAULT_RODS: u16 = 3;

/// Puzzle dimensions.
///
/// ## Example
///
/// ```
/// use babylon_tower::core::PuzzleConfig;
///
/// let config = PuzzleConfig::default().with_disks(5).with_rods(4);
/// assert_eq!(config.disks, 5);
/// assert_eq!(config.rods, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Number of disks.
    pub disks: u32,

    /// Number of rods.
    pub rods: u16,
}

impl PuzzleConfig {
    /// Create a configuration with the given dimensions.
    #[must_use]
    pub const fn new(disks: u32, rods: u16) -> Self {
        Self { disks, rods }
    }

    /// Set the disk count.
    #[must_use]
    pub fn with_disks(mut self, disks: u32) -> Self {
        self.disks = disks;
        self
    }

    /// Set the rod count.
    #[must_use]
    pub fn with_rods(mut self, rods: u16) -> Self {
        self.rods = rods;
        self
    }

    /// Check that the puzzle is playable.
    ///
    /// Requires at least one disk, at least one rod, and no more than
    /// `MAX_DISKS` disks. There is no minimum of three rods.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.disks == 0 {
            return Err(ConfigError::NoDisks);
        }
        if self.disks > MAX_DISKS {
            return Err(ConfigError::TooManyDisks {
                requested: self.disks,
                max: MAX_DISKS,
            });
        }
        if self.rods == 0 {
            return Err(ConfigError::NoRods);
        }
        Ok(())
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DISKS, DEFAULT_RODS)
    }
}
