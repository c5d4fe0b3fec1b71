//! Interactive session: one puzzle plus everything a front end needs
//! around it.
//!
//! A `Session` owns the current `PuzzleEngine` exclusively and replaces it
//! with a fresh one on reset. It routes rod presses through a
//! `SelectionController`, keeps a log of applied moves, holds the disk
//! palette, and notifies an optional observer of the move count after each
//! applied move.

use im::Vector;
use tracing::info;

use super::controller::{rod_at, Press, SelectionController};
use super::palette::DiskPalette;
use crate::core::{Move, MoveRecord, PuzzleConfig, PuzzleRng, RodId};
use crate::error::ConfigError;
use crate::rules::PuzzleEngine;

/// Move count observer.
pub type MoveObserver = Box<dyn FnMut(u64) + Send>;

/// Result of routing one press through the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PressOutcome {
    /// What the press did.
    pub press: Press,

    /// True if this press applied a move that left the puzzle completed.
    pub completed: bool,
}

/// A playable puzzle session.
pub struct Session {
    config: PuzzleConfig,
    engine: PuzzleEngine,
    controller: SelectionController,
    palette: DiskPalette,
    rng: PuzzleRng,
    history: Vector<MoveRecord>,
    observer: Option<MoveObserver>,
}

impl Session {
    /// Start a session with a validated configuration.
    ///
    /// `seed` drives palette generation only.
    pub fn new(config: PuzzleConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = PuzzleRng::new(seed);
        let palette = DiskPalette::random(config.disks, &mut rng);
        info!(disks = config.disks, rods = config.rods, "started session");

        Ok(Self {
            config,
            engine: PuzzleEngine::from_config(&config),
            controller: SelectionController::new(),
            palette,
            rng,
            history: Vector::new(),
            observer: None,
        })
    }

    /// Discard the current puzzle and start a new one with `config`.
    ///
    /// On error the current puzzle is kept unchanged.
    pub fn reset(&mut self, config: PuzzleConfig) -> Result<(), ConfigError> {
        config.validate()?;

        self.config = config;
        self.rebuild();
        Ok(())
    }

    /// Start over with the current configuration.
    pub fn restart(&mut self) {
        self.rebuild();
    }

    /// Replace the puzzle, selection, log and palette from `self.config`.
    fn rebuild(&mut self) {
        let config = self.config;
        self.engine = PuzzleEngine::from_config(&config);
        self.controller.clear();
        self.history.clear();
        self.palette = DiskPalette::random(config.disks, &mut self.rng);

        info!(disks = config.disks, rods = config.rods, "reset session");
        self.notify();
    }

    /// Register a callback that receives the move count after every applied
    /// move and after every reset.
    pub fn on_move(&mut self, observer: impl FnMut(u64) + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    // === Input ===

    /// Route a press on `rod` through the selection controller.
    pub fn press(&mut self, rod: RodId) -> PressOutcome {
        let press = self.controller.press(&mut self.engine, rod);
        self.finish(press)
    }

    /// Route a press at horizontal position `x` on a surface `width` wide,
    /// with rods laid out as equal columns.
    pub fn press_at(&mut self, x: f64, width: f64) -> PressOutcome {
        match rod_at(x, width, self.engine.rod_count()) {
            Some(rod) => self.press(rod),
            None => self.press_outside(),
        }
    }

    /// Route a press that landed on no rod. Drops any selection.
    pub fn press_outside(&mut self) -> PressOutcome {
        let press = self.controller.press_outside();
        self.finish(press)
    }

    /// Apply a move directly, bypassing selection. Clears any selection.
    pub fn play(&mut self, mv: Move) -> PressOutcome {
        self.controller.clear();
        let press = match self.engine.try_move(mv) {
            Some(disk) => Press::Moved { mv, disk },
            None => Press::Rejected(mv),
        };
        self.finish(press)
    }

    fn finish(&mut self, press: Press) -> PressOutcome {
        let mut completed = false;

        if let Press::Moved { mv, disk } = press {
            let sequence = self.engine.moves_count();
            self.history.push_back(MoveRecord::new(mv, disk, sequence));
            self.notify();

            completed = self.engine.is_completed();
            if completed {
                info!(moves = sequence, "puzzle completed");
            }
        }

        PressOutcome { press, completed }
    }

    fn notify(&mut self) {
        let moves = self.engine.moves_count();
        if let Some(observer) = self.observer.as_mut() {
            observer(moves);
        }
    }

    // === Queries ===

    /// The current puzzle.
    #[must_use]
    pub fn engine(&self) -> &PuzzleEngine {
        &self.engine
    }

    /// The configuration the current puzzle was built from.
    #[must_use]
    pub fn config(&self) -> PuzzleConfig {
        self.config
    }

    /// The selected source rod.
    #[must_use]
    pub fn selected(&self) -> Option<RodId> {
        self.controller.selected()
    }

    /// Disk colors for the current puzzle.
    #[must_use]
    pub fn palette(&self) -> &DiskPalette {
        &self.palette
    }

    /// Moves applied since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of moves applied since the last reset.
    #[must_use]
    pub fn moves_count(&self) -> u64 {
        self.engine.moves_count()
    }

    /// Check if the current puzzle is completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.engine.is_completed()
    }
}

impl Default for Session {
    fn default() -> Self {
        let config = PuzzleConfig::default();
        let mut rng = PuzzleRng::new(0);
        Self {
            config,
            engine: PuzzleEngine::from_config(&config),
            controller: SelectionController::new(),
            palette: DiskPalette::random(config.disks, &mut rng),
            rng,
            history: Vector::new(),
            observer: None,
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("engine", &self.engine)
            .field("selected", &self.controller.selected())
            .field("history", &self.history.len())
            .finish_non_exhaustive()
    }
}
