//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Move, PuzzleConfig, RodId};
use crate::session::{Press, PressOutcome, Session};

use super::py_engine::{rod_index, rods_as_lists};

fn press_kind(press: &Press) -> &'static str {
    match press {
        Press::Ignored => "ignored",
        Press::Selected(_) => "selected",
        Press::Moved { .. } => "moved",
        Press::Rejected(_) => "rejected",
        Press::Cleared => "cleared",
    }
}

fn outcome(outcome: PressOutcome) -> (&'static str, bool) {
    (press_kind(&outcome.press), outcome.completed)
}

/// Python wrapper for Session.
///
/// Presses return `(kind, completed)` where kind is one of
/// "ignored", "selected", "moved", "rejected", "cleared".
#[pyclass(name = "Session")]
pub struct PySession(pub Session);

#[pymethods]
impl PySession {
    /// Start a session.
    ///
    /// Raises ValueError for puzzles that cannot be played.
    #[new]
    #[pyo3(signature = (num_disks = 3, num_rods = 3, seed = 0))]
    fn new(num_disks: u32, num_rods: u16, seed: u64) -> PyResult<Self> {
        Session::new(PuzzleConfig::new(num_disks, num_rods), seed)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Press a rod. Negative indices count as a press outside every rod.
    fn press(&mut self, rod: i64) -> (&'static str, bool) {
        let result = match rod_index(rod) {
            Some(rod) => self.0.press(rod),
            None => self.0.press_outside(),
        };
        outcome(result)
    }

    /// Press at horizontal position `x` on a surface `width` wide.
    fn press_at(&mut self, x: f64, width: f64) -> (&'static str, bool) {
        outcome(self.0.press_at(x, width))
    }

    /// Apply a move directly.
    fn play(&mut self, from_rod: i64, to_rod: i64) -> (&'static str, bool) {
        let from = rod_index(from_rod).unwrap_or(RodId::PAST_END);
        let to = rod_index(to_rod).unwrap_or(RodId::PAST_END);
        outcome(self.0.play(Move::new(from, to)))
    }

    /// Start a new puzzle with new dimensions.
    fn reset(&mut self, num_disks: u32, num_rods: u16) -> PyResult<()> {
        self.0
            .reset(PuzzleConfig::new(num_disks, num_rods))
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Start over with the current dimensions.
    fn restart(&mut self) {
        self.0.restart();
    }

    #[getter]
    fn selected(&self) -> Option<u16> {
        self.0.selected().map(|r| r.raw())
    }

    #[getter]
    fn moves_count(&self) -> u64 {
        self.0.moves_count()
    }

    fn is_game_completed(&self) -> bool {
        self.0.is_completed()
    }

    fn get_state(&self) -> Vec<Vec<u32>> {
        rods_as_lists(self.0.engine())
    }

    /// CSS colors, one per disk, smallest disk first.
    fn colors(&self) -> Vec<String> {
        self.0.palette().css_colors()
    }

    /// Applied moves as (from_rod, to_rod, disk) triples.
    fn history(&self) -> Vec<(u16, u16, u32)> {
        self.0
            .history()
            .iter()
            .map(|r| (r.mv.from.raw(), r.mv.to.raw(), r.disk.size()))
            .collect()
    }

    fn __repr__(&self) -> String {
        let config = self.0.config();
        format!(
            "Session(disks={}, rods={}, moves={})",
            config.disks,
            config.rods,
            self.0.moves_count()
        )
    }
}
