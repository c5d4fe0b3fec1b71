use crate::core::RodId;

/// Errors raised when a puzzle configuration cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("a puzzle needs at least one disk")]
    NoDisks,

    #[error("a puzzle needs at least one rod")]
    NoRods,

    #[error("{requested} disks requested, at most {max} supported")]
    TooManyDisks { requested: u32, max: u32 },
}

/// A broken state invariant. Seeing one means the engine has a bug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("disks on rods are not exactly 1..={expected}: found {found:?}")]
    DiskConservation { expected: u32, found: Vec<u32> },

    #[error("{rod} is not strictly decreasing from bottom to top")]
    Ordering { rod: RodId },
}
