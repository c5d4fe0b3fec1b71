//! Puzzle engine bindings for Python.

use pyo3::prelude::*;

use crate::core::RodId;
use crate::rules::PuzzleEngine;

/// Convert a Python integer into a rod ID. Negative or oversized indices
/// map to `None` and are treated as out of range.
pub(crate) fn rod_index(index: i64) -> Option<RodId> {
    u16::try_from(index).ok().map(RodId::new)
}

pub(crate) fn rods_as_lists(engine: &PuzzleEngine) -> Vec<Vec<u32>> {
    engine
        .state()
        .iter()
        .map(|rod| rod.disks().iter().map(|d| d.size()).collect())
        .collect()
}

/// Python wrapper for PuzzleEngine.
///
/// Method names follow the browser game's API so existing front ends can
/// drive it unchanged.
#[pyclass(name = "BabylonTower")]
#[derive(Clone)]
pub struct PyBabylonTower(pub PuzzleEngine);

#[pymethods]
impl PyBabylonTower {
    /// Create a puzzle.
    ///
    /// # Arguments
    /// - num_disks: Number of disks, all starting on rod 0
    /// - num_rods: Number of rods; the last one is the goal
    #[new]
    #[pyo3(signature = (num_disks = 3, num_rods = 3))]
    fn new(num_disks: u32, num_rods: u16) -> Self {
        Self(PuzzleEngine::new(num_disks, num_rods))
    }

    /// Copy of all rods as lists of disk sizes, bottom first.
    fn get_state(&self) -> Vec<Vec<u32>> {
        rods_as_lists(&self.0)
    }

    /// Top disk of a rod, or None if empty or out of range.
    fn get_top_disk(&self, rod: i64) -> Option<u32> {
        let rod = rod_index(rod)?;
        self.0.top_disk(rod).map(|d| d.size())
    }

    fn is_valid_move(&self, from_rod: i64, to_rod: i64) -> bool {
        match (rod_index(from_rod), rod_index(to_rod)) {
            (Some(from), Some(to)) => self.0.is_valid_move(from, to),
            _ => false,
        }
    }

    /// Apply a move. Returns False (state unchanged) if it is not legal.
    #[pyo3(name = "move")]
    fn apply_move(&mut self, from_rod: i64, to_rod: i64) -> bool {
        match (rod_index(from_rod), rod_index(to_rod)) {
            (Some(from), Some(to)) => self.0.apply_move(from, to),
            _ => false,
        }
    }

    fn is_game_completed(&self) -> bool {
        self.0.is_completed()
    }

    /// Legal moves as (from_rod, to_rod) pairs.
    fn get_possible_moves(&self) -> Vec<(u16, u16)> {
        self.0.possible_moves().into_iter().map(|m| m.as_pair()).collect()
    }

    fn get_disks_count(&self) -> u32 {
        self.0.disk_count()
    }

    fn get_rods_count(&self) -> u16 {
        self.0.rod_count()
    }

    #[getter]
    fn moves_count(&self) -> u64 {
        self.0.moves_count()
    }

    /// Copy the puzzle.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "BabylonTower(disks={}, rods={}, moves={}, status={})",
            self.0.disk_count(),
            self.0.rod_count(),
            self.0.moves_count(),
            if self.0.is_completed() { "completed" } else { "ongoing" }
        )
    }
}
