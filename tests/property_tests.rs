//! Property tests over arbitrary move sequences.
//!
//! Random (mostly illegal) move requests are thrown at engines of varying
//! sizes; the state invariants must hold after every single request.

use proptest::prelude::*;

use babylon_tower::core::{Move, RodId};
use babylon_tower::rules::PuzzleEngine;

fn all_disks(engine: &PuzzleEngine) -> Vec<u32> {
    let mut disks: Vec<u32> = engine
        .state()
        .iter()
        .flat_map(|rod| rod.disks().iter().map(|d| d.size()).collect::<Vec<_>>())
        .collect();
    disks.sort_unstable();
    disks
}

fn puzzle() -> impl Strategy<Value = (u32, u16, Vec<(u16, u16)>)> {
    (1u32..=7, 1u16..=5).prop_flat_map(|(disks, rods)| {
        // Allow one index past the end to exercise out-of-range requests
        let index = 0..=rods;
        (
            Just(disks),
            Just(rods),
            prop::collection::vec((index.clone(), index), 0..200),
        )
    })
}

proptest! {
    #[test]
    fn disks_are_conserved((disks, rods, moves) in puzzle()) {
        let mut engine = PuzzleEngine::new(disks, rods);
        let expected: Vec<u32> = (1..=disks).collect();

        for (from, to) in moves {
            engine.apply_move(RodId::new(from), RodId::new(to));
            prop_assert_eq!(all_disks(&engine), expected.clone());
        }
    }

    #[test]
    fn rods_stay_ordered((disks, rods, moves) in puzzle()) {
        let mut engine = PuzzleEngine::new(disks, rods);

        for (from, to) in moves {
            engine.apply_move(RodId::new(from), RodId::new(to));
            for rod in engine.state() {
                prop_assert!(rod.disks().windows(2).all(|w| w[0] > w[1]));
            }
            prop_assert!(engine.puzzle_state().check_invariants().is_ok());
        }
    }

    #[test]
    fn counter_tracks_successful_moves((disks, rods, moves) in puzzle()) {
        let mut engine = PuzzleEngine::new(disks, rods);

        for (from, to) in moves {
            let before_count = engine.moves_count();
            let before_state = engine.state();
            let predicted = engine.is_valid_move(RodId::new(from), RodId::new(to));

            let applied = engine.apply_move(RodId::new(from), RodId::new(to));

            prop_assert_eq!(applied, predicted);
            if applied {
                prop_assert_eq!(engine.moves_count(), before_count + 1);
            } else {
                prop_assert_eq!(engine.moves_count(), before_count);
                prop_assert_eq!(engine.state(), before_state);
            }
        }
    }

    #[test]
    fn self_moves_never_valid((disks, rods, moves) in puzzle()) {
        let mut engine = PuzzleEngine::new(disks, rods);

        for (from, to) in moves {
            engine.apply_move(RodId::new(from), RodId::new(to));
            for rod in RodId::all(rods + 1) {
                prop_assert!(!engine.is_valid_move(rod, rod));
            }
        }
    }

    #[test]
    fn completion_means_full_goal_rod((disks, rods, moves) in puzzle()) {
        let mut engine = PuzzleEngine::new(disks, rods);

        for (from, to) in moves {
            engine.apply_move(RodId::new(from), RodId::new(to));
            let goal = engine.state().last().map(|rod| rod.len());
            prop_assert_eq!(engine.is_completed(), goal == Some(disks as usize));
        }
    }

    #[test]
    fn possible_moves_match_predicate((disks, rods, moves) in puzzle()) {
        let mut engine = PuzzleEngine::new(disks, rods);

        for (from, to) in moves {
            engine.apply_move(RodId::new(from), RodId::new(to));

            let mut expected = Vec::new();
            for a in RodId::all(rods) {
                for b in RodId::all(rods) {
                    if a != b && engine.is_valid_move(a, b) {
                        expected.push(Move::new(a, b));
                    }
                }
            }
            prop_assert_eq!(engine.possible_moves(), expected);
        }
    }

    #[test]
    fn state_copies_are_independent((disks, rods, moves) in puzzle()) {
        let mut engine = PuzzleEngine::new(disks, rods);
        for (from, to) in moves {
            engine.apply_move(RodId::new(from), RodId::new(to));
        }

        let snapshot = engine.state();
        let mut scratch = engine.state();
        scratch.clear();
        prop_assert_eq!(engine.state(), snapshot);
    }
}
