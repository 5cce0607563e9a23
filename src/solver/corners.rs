//! Stage 2: the four Down-layer corners.
//!
//! A corner is brought home with `U` turns and three-move inserts on its
//! slot. For the slot between faces X and Y (X clockwise of Y when seen from
//! below), the inserts are `Y U^a Y'` and `X' U^a X`: each lifts the slot's
//! corner into the top layer, turns the top, and puts the slot's edge back.
//! If the corner is sitting in another, still unsolved Down slot, that slot's
//! inserts are allowed too.

use crate::core::{Corner, CubieCube, Face, SolverConfig};
use crate::moves::tables::track_corner;
use crate::moves::{Move, MoveSequence, Turn};

use super::error::UnhandledCaseError;
use super::stage::{place_pieces, Stage, StageOutput};
use super::tables::{shortest_macro_path, PieceTable, CASE_TABLES, U_TURNS};

/// Placement order.
pub(crate) const FIRST_LAYER_CORNERS: [Corner; 4] =
    [Corner::DFR, Corner::DLF, Corner::DBL, Corner::DRB];

fn slot_faces(slot: Corner) -> Option<(Face, Face)> {
    match slot {
        Corner::DFR => Some((Face::Front, Face::Right)),
        Corner::DLF => Some((Face::Left, Face::Front)),
        Corner::DBL => Some((Face::Back, Face::Left)),
        Corner::DRB => Some((Face::Right, Face::Back)),
        _ => None,
    }
}

fn inserts(slot: Corner) -> Vec<MoveSequence> {
    let Some((x, y)) = slot_faces(slot) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(6);
    for top in U_TURNS {
        out.push(MoveSequence::from_moves(&[
            Move::new(y, Turn::Clockwise),
            top,
            Move::new(y, Turn::CounterClockwise),
        ]));
        out.push(MoveSequence::from_moves(&[
            Move::new(x, Turn::CounterClockwise),
            top,
            Move::new(x, Turn::Clockwise),
        ]));
    }
    out
}

fn state_index(slot: Corner, twist: u8) -> usize {
    slot.index() * 3 + usize::from(twist)
}

fn track(state: usize, moves: &MoveSequence) -> usize {
    let start = (Corner::ALL[state / 3], (state % 3) as u8);
    let (slot, twist) = moves.iter().fold(start, |(s, t), &mv| track_corner(s, t, mv));
    state_index(slot, twist)
}

pub(crate) fn build_table() -> PieceTable<Corner> {
    let mut table = PieceTable::new();
    for target in FIRST_LAYER_CORNERS {
        for slot in Corner::ALL {
            let mut macros: Vec<MoveSequence> = U_TURNS.into_iter().map(MoveSequence::from).collect();
            macros.extend(inserts(target));
            if slot != target {
                macros.extend(inserts(slot));
            }
            for twist in 0..3u8 {
                let start = state_index(slot, twist);
                let goal = state_index(target, 0);
                if let Some(moves) = shortest_macro_path(start, goal, 24, &macros, track) {
                    table.insert(target, slot, twist, moves);
                }
            }
        }
    }
    table
}

pub(crate) fn solve_corners(
    cube: &CubieCube,
    config: &SolverConfig,
) -> Result<StageOutput, UnhandledCaseError> {
    place_pieces(
        Stage::FirstLayerCorners,
        cube,
        &FIRST_LAYER_CORNERS,
        &CASE_TABLES.corners,
        config.piece_order,
    )
}
