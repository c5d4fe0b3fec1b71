//! Session integration tests.
//!
//! Drive full games through the session the way a front end would:
//! presses on rods, presses by screen position, resets.

use std::sync::{Arc, Mutex};

use babylon_tower::core::{Disk, Move, PuzzleConfig, RodId};
use babylon_tower::error::ConfigError;
use babylon_tower::session::{Press, Session};

fn rod(i: u16) -> RodId {
    RodId::new(i)
}

/// Solve the classic puzzle with two presses per move.
#[test]
fn test_solve_by_presses() {
    let mut session = Session::new(PuzzleConfig::new(3, 3), 42).unwrap();
    let solution = [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)];

    let mut completions = 0;
    for (from, to) in solution {
        assert_eq!(session.press(rod(from)).press, Press::Selected(rod(from)));
        let outcome = session.press(rod(to));
        assert!(matches!(outcome.press, Press::Moved { .. }));
        if outcome.completed {
            completions += 1;
        }
    }

    assert_eq!(completions, 1);
    assert!(session.is_completed());
    assert_eq!(session.moves_count(), 7);
    assert_eq!(session.history().len(), 7);

    let last = session.history().back().copied().unwrap();
    assert_eq!(last.mv, Move::between(0, 2));
    assert_eq!(last.disk, Disk::new(1));
    assert_eq!(last.sequence, 7);
}

/// Presses by position on a 600-wide surface with three 200-wide columns.
#[test]
fn test_solve_by_position() {
    let mut session = Session::new(PuzzleConfig::new(1, 3), 1).unwrap();

    assert_eq!(session.press_at(100.0, 600.0).press, Press::Selected(rod(0)));
    let outcome = session.press_at(500.0, 600.0);

    assert_eq!(outcome.press.applied(), Some(Move::between(0, 2)));
    assert!(outcome.completed);
}

#[test]
fn test_rejected_press_keeps_count() {
    let mut session = Session::new(PuzzleConfig::new(3, 3), 1).unwrap();
    session.play(Move::between(0, 2));

    session.press(rod(0));
    let outcome = session.press(rod(2));

    assert_eq!(outcome.press, Press::Rejected(Move::between(0, 2)));
    assert!(!outcome.completed);
    assert_eq!(session.moves_count(), 1);
    assert_eq!(session.selected(), None);
}

#[test]
fn test_reset_regenerates_palette() {
    let mut session = Session::new(PuzzleConfig::new(4, 3), 9).unwrap();
    let before = session.palette().clone();

    session.reset(PuzzleConfig::new(4, 3)).unwrap();

    assert_eq!(session.palette().len(), 4);
    assert_ne!(session.palette(), &before);
}

#[test]
fn test_sessions_with_same_seed_match() {
    let a = Session::new(PuzzleConfig::new(6, 3), 5).unwrap();
    let b = Session::new(PuzzleConfig::new(6, 3), 5).unwrap();
    assert_eq!(a.palette(), b.palette());
}

#[test]
fn test_reset_rejections() {
    let mut session = Session::new(PuzzleConfig::default(), 1).unwrap();

    assert_eq!(
        session.reset(PuzzleConfig::new(0, 3)),
        Err(ConfigError::NoDisks)
    );
    assert!(matches!(
        session.reset(PuzzleConfig::new(1000, 3)),
        Err(ConfigError::TooManyDisks { requested: 1000, .. })
    ));
    assert_eq!(session.config(), PuzzleConfig::default());
}

#[test]
fn test_observer_tracks_counter_display() {
    let mut session = Session::new(PuzzleConfig::new(2, 3), 1).unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    session.on_move(move |moves| sink.lock().unwrap().push(moves));

    session.play(Move::between(0, 1));
    session.play(Move::between(0, 1)); // rejected, no notification
    session.play(Move::between(0, 2));
    session.reset(PuzzleConfig::new(3, 3)).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 0]);
}

#[test]
fn test_history_is_cheap_to_clone() {
    let mut session = Session::new(PuzzleConfig::new(3, 3), 1).unwrap();
    session.play(Move::between(0, 2));
    let snapshot = session.history().clone();

    session.play(Move::between(0, 1));

    assert_eq!(snapshot.len(), 1);
    assert_eq!(session.history().len(), 2);
}
