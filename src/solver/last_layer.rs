//! Stages 4 and 5: the last (Up) layer.
//!
//! With the first two layers solved, the Up layer is finished in three
//! looks: orient the edges, orient the corners, then permute everything.
//! Each look turns the top face until its pattern is in the table, runs the
//! named algorithm, and (for the permutation) aligns the top face at the end.

use crate::core::{Corner, CubieCube, Edge, SolverConfig};
use crate::engine::PuzzleState;
use crate::moves::MoveSequence;

use super::algorithms::{CORNER_ORIENTATION, EDGE_ORIENTATION, PERMUTATION};
use super::error::UnhandledCaseError;
use super::stage::{Stage, StageOutput};
use super::tables::{PatternTable, PermutationKey, CASE_TABLES, U_TURNS};

pub(crate) const TOP_EDGES: [Edge; 4] = [Edge::UR, Edge::UF, Edge::UL, Edge::UB];
const TOP_CORNERS: [Corner; 4] = [Corner::URF, Corner::UFL, Corner::ULB, Corner::UBR];

fn edge_orientation_key(cube: &CubieCube) -> [u8; 4] {
    TOP_EDGES.map(|e| cube.edge(e).1)
}

fn corner_orientation_key(cube: &CubieCube) -> [u8; 4] {
    TOP_CORNERS.map(|c| cube.corner(c).1)
}

fn permutation_key(cube: &CubieCube) -> PermutationKey {
    (TOP_CORNERS.map(|c| cube.corner(c).0), TOP_EDGES.map(|e| cube.edge(e).0))
}

pub(crate) fn edge_orientation_table() -> PatternTable<[u8; 4]> {
    PatternTable::build(&EDGE_ORIENTATION, &[None], edge_orientation_key)
}

pub(crate) fn corner_orientation_table() -> PatternTable<[u8; 4]> {
    PatternTable::build(&CORNER_ORIENTATION, &[None], corner_orientation_key)
}

pub(crate) fn permutation_table() -> PatternTable<PermutationKey> {
    let finishes = [None, Some(U_TURNS[0]), Some(U_TURNS[1]), Some(U_TURNS[2])];
    PatternTable::build(&PERMUTATION, &finishes, permutation_key)
}

/// Recognise and run one look.
fn look<K: Eq + std::hash::Hash + std::fmt::Debug>(
    stage: Stage,
    table: &PatternTable<K>,
    cube: &mut CubieCube,
    moves: &mut MoveSequence,
    cases: &mut Vec<&'static str>,
) -> Result<(), UnhandledCaseError> {
    let recognised = table.recognise(cube).ok_or_else(|| UnhandledCaseError::MissingCase {
        stage,
        case: format!("{:?}", table.key_of(cube)),
    })?;
    let sequence = recognised.moves();
    log::trace!("{stage}: {} with {} moves", recognised.case.name, sequence.len());
    *cube = cube.apply_sequence(&sequence);
    moves.extend_from(&sequence);
    cases.push(recognised.case.name);
    Ok(())
}

/// Stage 4: orient the top edges.
pub(crate) fn orient_edges(
    cube: &CubieCube,
    _config: &SolverConfig,
) -> Result<StageOutput, UnhandledCaseError> {
    let mut out = StageOutput::start(cube);
    look(
        Stage::LastLayerOrientation,
        &CASE_TABLES.edge_orientation,
        &mut out.cube,
        &mut out.moves,
        &mut out.cases,
    )?;
    Ok(out)
}

/// Stage 5: orient the top corners, then permute the layer.
pub(crate) fn finish(
    cube: &CubieCube,
    _config: &SolverConfig,
) -> Result<StageOutput, UnhandledCaseError> {
    let mut out = StageOutput::start(cube);
    look(
        Stage::LastLayerPermutation,
        &CASE_TABLES.corner_orientation,
        &mut out.cube,
        &mut out.moves,
        &mut out.cases,
    )?;
    look(
        Stage::LastLayerPermutation,
        &CASE_TABLES.permutation,
        &mut out.cube,
        &mut out.moves,
        &mut out.cases,
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// All 24 orderings of four items.
    fn orderings() -> Vec<[usize; 4]> {
        let mut out = Vec::with_capacity(24);
        for a in 0..4 {
            for b in 0..4 {
                for c in 0..4 {
                    for d in 0..4 {
                        let p = [a, b, c, d];
                        if (0..4).all(|x| p.contains(&x)) {
                            out.push(p);
                        }
                    }
                }
            }
        }
        out
    }

    /// Every orientation pattern of four pieces whose sum is 0 mod `modulus`.
    fn orientations(modulus: u8) -> Vec<[u8; 4]> {
        let mut out = Vec::new();
        for a in 0..modulus {
            for b in 0..modulus {
                for c in 0..modulus {
                    let d = (modulus * 3 - a - b - c) % modulus;
                    out.push([a, b, c, d]);
                }
            }
        }
        out
    }

    /// Top layer with the given permutation and orientations, rest solved.
    fn top_layer(cp: [usize; 4], ep: [usize; 4], co: [u8; 4], eo: [u8; 4]) -> CubieCube {
        let mut cube = CubieCube::solved();
        for i in 0..4 {
            cube.cp[i] = TOP_CORNERS[cp[i]];
            cube.ep[i] = TOP_EDGES[ep[i]];
            cube.co[i] = co[i];
            cube.eo[i] = eo[i];
        }
        cube
    }

    fn permutations() -> Vec<([usize; 4], [usize; 4])> {
        let mut out = Vec::new();
        for cp in orderings() {
            for ep in orderings() {
                let cube = top_layer(cp, ep, [0; 4], [0; 4]);
                if cube.corner_parity() == cube.edge_parity() {
                    out.push((cp, ep));
                }
            }
        }
        out
    }

    #[test]
    fn test_case_names() {
        assert_eq!(CASE_TABLES.edge_orientation.names(), vec!["angle", "dot", "line", "solved"]);
        assert_eq!(CASE_TABLES.corner_orientation.names().len(), 8);
        assert_eq!(CASE_TABLES.permutation.names().len(), 22);
    }

    #[test]
    fn test_algorithms_keep_first_two_layers() {
        for (name, notation) in EDGE_ORIENTATION.iter().chain(&CORNER_ORIENTATION).chain(&PERMUTATION) {
            let moves: MoveSequence = notation.parse().unwrap();
            let cube = CubieCube::solved().apply_sequence(&moves);
            assert!(Stage::SecondLayerEdges.is_complete(&cube), "{name}");
        }
    }

    #[test]
    fn test_every_edge_orientation_pattern() {
        let orientations = orientations(2);
        assert_eq!(orientations.len(), 8);
        for eo in orientations {
            let cube = top_layer([0, 1, 2, 3], [0, 1, 2, 3], [0; 4], eo);
            let out = orient_edges(&cube, &SolverConfig::default()).unwrap();
            assert!(Stage::LastLayerOrientation.is_complete(&out.cube), "{eo:?}");
        }
    }

    #[test]
    fn test_every_corner_orientation_pattern() {
        let orientations = orientations(3);
        assert_eq!(orientations.len(), 27);
        for co in orientations {
            let cube = top_layer([0, 1, 2, 3], [0, 1, 2, 3], co, [0; 4]);
            let out = finish(&cube, &SolverConfig::default()).unwrap();
            assert!(out.cube.is_solved(), "{co:?}");
        }
    }

    #[test]
    fn test_every_permutation() {
        let permutations = permutations();
        assert_eq!(permutations.len(), 288);
        for (cp, ep) in permutations {
            let cube = top_layer(cp, ep, [0; 4], [0; 4]);
            let out = finish(&cube, &SolverConfig::default()).unwrap();
            assert!(out.cube.is_solved(), "{cp:?} {ep:?}");
            assert!(out.moves.len() <= 1 + CASE_TABLES.permutation.longest());
        }
    }

    #[test]
    fn test_every_last_layer_state() {
        let config = SolverConfig::default();
        let mut count = 0;
        for (cp, ep) in permutations() {
            for co in orientations(3) {
                for eo in orientations(2) {
                    let cube = top_layer(cp, ep, co, eo);
                    let oriented = orient_edges(&cube, &config).unwrap();
                    let out = finish(&oriented.cube, &config).unwrap();
                    assert!(out.cube.is_solved());
                    count += 1;
                }
            }
        }
        assert_eq!(count, 62_208);
    }

    #[test]
    fn test_recognition_reports_case_names() {
        let sune: MoveSequence = "R U R' U R U2 R'".parse().unwrap();
        let cube = CubieCube::solved().apply_sequence(&sune.inverse());
        let out = finish(&cube, &SolverConfig::default()).unwrap();
        assert_eq!(out.cases, vec!["sune", "solved"]);
        assert_eq!(out.moves, sune);
    }
}
