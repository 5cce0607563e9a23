//! Stage 3: the four middle-layer edges.
//!
//! Edges drop into their slot with one of the two standard inserts. For the
//! slot between faces X and Y:
//!
//! - from the left: `U Y U' Y' U' X' U X`
//! - from the right: `U' X' U X U Y U' Y'`
//!
//! Both keep the first layer intact. An edge stuck in the wrong middle slot
//! (or flipped in its own) is lifted out with the same inserts on that slot.

use crate::core::{CubieCube, Edge, Face, SolverConfig};
use crate::moves::tables::track_edge;
use crate::moves::{Move, MoveSequence, Turn};

use super::error::UnhandledCaseError;
use super::stage::{place_pieces, Stage, StageOutput};
use super::tables::{shortest_macro_path, PieceTable, CASE_TABLES, U_TURNS};

/// Placement order.
pub(crate) const MIDDLE_EDGES: [Edge; 4] = [Edge::FR, Edge::FL, Edge::BL, Edge::BR];

fn slot_faces(slot: Edge) -> Option<(Face, Face)> {
    match slot {
        Edge::FR => Some((Face::Front, Face::Right)),
        Edge::FL => Some((Face::Left, Face::Front)),
        Edge::BL => Some((Face::Back, Face::Left)),
        Edge::BR => Some((Face::Right, Face::Back)),
        _ => None,
    }
}

fn is_down_slot(slot: Edge) -> bool {
    matches!(slot, Edge::DR | Edge::DF | Edge::DL | Edge::DB)
}

fn inserts(slot: Edge) -> Vec<MoveSequence> {
    let Some((x, y)) = slot_faces(slot) else {
        return Vec::new();
    };
    let cw = |face| Move::new(face, Turn::Clockwise);
    let ccw = |face| Move::new(face, Turn::CounterClockwise);
    let (u, u_prime) = (cw(Face::Up), ccw(Face::Up));
    vec![
        MoveSequence::from_moves(&[u, cw(y), u_prime, ccw(y), u_prime, ccw(x), u, cw(x)]),
        MoveSequence::from_moves(&[u_prime, ccw(x), u, cw(x), u, cw(y), u_prime, ccw(y)]),
    ]
}

fn state_index(slot: Edge, flip: u8) -> usize {
    slot.index() * 2 + usize::from(flip)
}

fn track(state: usize, moves: &MoveSequence) -> usize {
    let start = (Edge::ALL[state / 2], (state % 2) as u8);
    let (slot, flip) = moves.iter().fold(start, |(s, f), &mv| track_edge(s, f, mv));
    state_index(slot, flip)
}

pub(crate) fn build_table() -> PieceTable<Edge> {
    let mut table = PieceTable::new();
    for target in MIDDLE_EDGES {
        // The cross holds the Down slots, so the edge is never there.
        for slot in Edge::ALL.into_iter().filter(|&s| !is_down_slot(s)) {
            let mut macros: Vec<MoveSequence> = U_TURNS.into_iter().map(MoveSequence::from).collect();
            macros.extend(inserts(target));
            if slot != target {
                macros.extend(inserts(slot));
            }
            for flip in 0..2u8 {
                let start = state_index(slot, flip);
                let goal = state_index(target, 0);
                if let Some(moves) = shortest_macro_path(start, goal, 24, &macros, track) {
                    table.insert(target, slot, flip, moves);
                }
            }
        }
    }
    table
}

pub(crate) fn solve_middle_edges(
    cube: &CubieCube,
    config: &SolverConfig,
) -> Result<StageOutput, UnhandledCaseError> {
    place_pieces(
        Stage::SecondLayerEdges,
        cube,
        &MIDDLE_EDGES,
        &CASE_TABLES.middle,
        config.piece_order,
    )
}
