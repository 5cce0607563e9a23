//! Stage 1: the cross on the Down face.
//!
//! The table comes from one breadth-first search over the positions of the
//! four Down edges (12·11·10·9 placements × 16 flips = 190 080 states),
//! starting at solved. An entry for `(target, slot, flip)` starts from the
//! configuration with the other three Down edges home and walks downhill to
//! distance zero, so it brings the target home and leaves every Down edge
//! that was already home in place.

use crate::core::{CubieCube, Edge, SolverConfig};
use crate::moves::tables::track_edge;
use crate::moves::{Move, MoveSequence};

use super::error::UnhandledCaseError;
use super::stage::{place_pieces, Stage, StageOutput};
use super::tables::{breadth_first_distances, PieceTable, CASE_TABLES};

/// Placement order.
pub(crate) const CROSS_EDGES: [Edge; 4] = [Edge::DF, Edge::DR, Edge::DB, Edge::DL];

/// Pieces tracked by the search, in index order.
const TRACKED: [Edge; 4] = [Edge::DR, Edge::DF, Edge::DL, Edge::DB];

const BITS: usize = 5;

fn tracked_index(edge: Edge) -> Option<usize> {
    TRACKED.iter().position(|&e| e == edge)
}

fn encode(positions: &[(Edge, u8); 4]) -> usize {
    positions
        .iter()
        .enumerate()
        .fold(0, |key, (i, &(slot, flip))| {
            key | ((slot.index() * 2 + usize::from(flip)) << (BITS * i))
        })
}

fn decode(key: usize) -> [(Edge, u8); 4] {
    std::array::from_fn(|i| {
        let code = (key >> (BITS * i)) & ((1 << BITS) - 1);
        (Edge::ALL[code / 2], (code % 2) as u8)
    })
}

fn step(key: usize, mv: Move) -> usize {
    let positions = decode(key).map(|(slot, flip)| track_edge(slot, flip, mv));
    encode(&positions)
}

pub(crate) fn build_table() -> PieceTable<Edge> {
    let solved = TRACKED.map(|e| (e, 0));
    let distance = breadth_first_distances(1 << (BITS * 4), encode(&solved), step);

    let mut table = PieceTable::new();
    for target in CROSS_EDGES {
        let Some(t) = tracked_index(target) else { continue };
        for slot in Edge::ALL {
            for flip in 0..2u8 {
                let mut positions = solved;
                positions[t] = (slot, flip);
                if let Some(s) = tracked_index(slot).filter(|_| slot != target) {
                    positions[s] = (target, 0);
                }
                if let Some(moves) = descend(&distance, encode(&positions)) {
                    table.insert(target, slot, flip, moves);
                }
            }
        }
    }
    table
}

/// Follow decreasing distance to zero, first move in `Move::ALL` order wins.
fn descend(distance: &[u8], mut key: usize) -> Option<MoveSequence> {
    let mut moves = MoveSequence::new();
    while distance[key] != 0 {
        let here = distance[key];
        let (mv, next) = Move::ALL
            .into_iter()
            .map(|mv| (mv, step(key, mv)))
            .find(|&(_, next)| distance[next].wrapping_add(1) == here)?;
        moves.push(mv);
        key = next;
    }
    Some(moves)
}

pub(crate) fn solve_cross(
    cube: &CubieCube,
    config: &SolverConfig,
) -> Result<StageOutput, UnhandledCaseError> {
    place_pieces(Stage::Cross, cube, &CROSS_EDGES, &CASE_TABLES.cross, config.piece_order)
}
