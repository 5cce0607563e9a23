//! Solver integration tests.

use std::thread;

use cube_engine::core::{Color, CubeState, PieceOrder, SolverConfig};
use cube_engine::engine::PuzzleState;
use cube_engine::moves::MoveSequence;
use cube_engine::scramble::{scramble, Scrambler};
use cube_engine::solver::{self, worst_case_length, SolveError, Solver, Stage};
use cube_engine::validate::InvalidCubeError;
use proptest::prelude::*;

// =============================================================================
// Round Trip
// =============================================================================

#[test_log::test]
fn test_seed_42_scramble_solves() {
    let s = scramble(25, 42);
    let answer = solver::solve(&s.state).unwrap();
    assert!(answer.len() <= worst_case_length());
    assert!(s.state.apply_sequence(&answer).is_solved());
}

#[test]
fn test_solved_cube_needs_nothing() {
    assert_eq!(solver::solve(&CubeState::solved()).unwrap(), MoveSequence::new());
}

#[test]
fn test_one_move_scrambles() {
    for mv in cube_engine::moves::Move::ALL {
        let state = CubeState::solved().apply(mv);
        let answer = solver::solve(&state).unwrap();
        assert!(state.apply_sequence(&answer).is_solved(), "{mv}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_scramble_round_trip(seed in any::<u64>(), length in 0usize..60) {
        let s = scramble(length, seed);
        let answer = solver::solve(&s.state).unwrap();
        prop_assert!(answer.len() <= worst_case_length());
        prop_assert!(s.state.apply_sequence(&answer).is_solved());
    }
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_every_config_solves() {
    let batch = Scrambler::new(17).scramble_many(8, 30);
    for order in [PieceOrder::Fixed, PieceOrder::CheapestFirst] {
        for reduce in [false, true] {
            for verify in [false, true] {
                let config = SolverConfig::default()
                    .with_piece_order(order)
                    .with_reduce(reduce)
                    .with_verify(verify);
                let solver = Solver::new(config);
                for s in &batch {
                    let answer = solver.solve(&s.state).unwrap();
                    assert!(s.state.apply_sequence(&answer).is_solved(), "{config:?}");
                }
            }
        }
    }
}

#[test]
fn test_report_stages_in_order() {
    let s = scramble(25, 42);
    let report = Solver::default().solve_report(&s.state).unwrap();
    let stages: Vec<_> = report.stages.iter().map(|r| r.stage).collect();
    assert_eq!(stages, Stage::ALL);

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"stages\""));
}

#[test]
fn test_custom_color_scheme() {
    let scheme = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Blue,
    ];
    let s = scramble(25, 4);
    let recolored = CubeState::solved_with_scheme(&scheme).apply_sequence(&s.moves);
    let answer = solver::solve(&recolored).unwrap();
    assert!(recolored.apply_sequence(&answer).is_solved());
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_invalid_cube_rejected() {
    let mut facelets = *CubeState::solved().facelets();
    facelets.swap(5, 10); // UR edge flipped in place
    let result = solver::solve(&CubeState::from_facelets(facelets));
    assert!(matches!(
        result,
        Err(SolveError::InvalidCube(InvalidCubeError::EdgeFlip))
    ));
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_parallel_solves_match_serial() {
    let batch = Scrambler::new(99).scramble_many(16, 25);
    let serial: Vec<_> = batch
        .iter()
        .map(|s| solver::solve(&s.state).unwrap())
        .collect();

    let parallel: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = batch
            .iter()
            .map(|s| scope.spawn(move || solver::solve(&s.state).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(serial, parallel);
}
