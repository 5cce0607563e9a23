//! Solver stages and piece placement.
//!
//! The solver is a fixed pipeline of five stages. Each stage is a pure
//! function from a cubie cube to the moves it chose and the cube after them;
//! each stage's goal is the next one's precondition.
//!
//! | Stage | Goal |
//! |-------|------|
//! | Cross | DF DR DB DL edges home |
//! | First-layer corners | + DFR DLF DBL DRB corners home |
//! | Second-layer edges | + FR FL BL BR edges home |
//! | Last-layer orientation | + UR UF UL UB edges oriented |
//! | Last-layer permutation | solved |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

use crate::core::{Corner, CubieCube, Edge, PieceOrder, SolverConfig};
use crate::engine::PuzzleState;
use crate::moves::MoveSequence;

use super::error::UnhandledCaseError;
use super::tables::PieceTable;
use super::{corners, cross, last_layer, middle};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Cross,
    FirstLayerCorners,
    SecondLayerEdges,
    LastLayerOrientation,
    LastLayerPermutation,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Cross,
        Stage::FirstLayerCorners,
        Stage::SecondLayerEdges,
        Stage::LastLayerOrientation,
        Stage::LastLayerPermutation,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Stage::Cross => "cross",
            Stage::FirstLayerCorners => "first-layer corners",
            Stage::SecondLayerEdges => "second-layer edges",
            Stage::LastLayerOrientation => "last-layer orientation",
            Stage::LastLayerPermutation => "last-layer permutation",
        }
    }

    /// True when `cube` satisfies the goal of this stage and every earlier one.
    #[must_use]
    pub fn is_complete(self, cube: &CubieCube) -> bool {
        match self {
            Stage::Cross => cross::CROSS_EDGES.iter().all(|&e| cube.edge_home(e)),
            Stage::FirstLayerCorners => {
                Stage::Cross.is_complete(cube)
                    && corners::FIRST_LAYER_CORNERS.iter().all(|&c| cube.corner_home(c))
            }
            Stage::SecondLayerEdges => {
                Stage::FirstLayerCorners.is_complete(cube)
                    && middle::MIDDLE_EDGES.iter().all(|&e| cube.edge_home(e))
            }
            Stage::LastLayerOrientation => {
                Stage::SecondLayerEdges.is_complete(cube)
                    && last_layer::TOP_EDGES.iter().all(|&e| cube.edge(e).1 == 0)
            }
            Stage::LastLayerPermutation => cube.is_solved(),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Moves chosen by one stage and the cube after them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageOutput {
    pub cube: CubieCube,
    pub moves: MoveSequence,
    /// Names of the last-layer cases recognised, in order.
    pub cases: Vec<&'static str>,
}

impl StageOutput {
    pub(crate) fn start(cube: &CubieCube) -> Self {
        Self {
            cube: *cube,
            moves: MoveSequence::new(),
            cases: Vec::new(),
        }
    }
}

pub(crate) type StageFn = fn(&CubieCube, &SolverConfig) -> Result<StageOutput, UnhandledCaseError>;

pub(crate) const PIPELINE: [(Stage, StageFn); 5] = [
    (Stage::Cross, cross::solve_cross),
    (Stage::FirstLayerCorners, corners::solve_corners),
    (Stage::SecondLayerEdges, middle::solve_middle_edges),
    (Stage::LastLayerOrientation, last_layer::orient_edges),
    (Stage::LastLayerPermutation, last_layer::finish),
];

/// Where a piece sits and how it is turned.
pub(crate) trait Locate: Copy + Eq + Hash + fmt::Display + 'static {
    fn locate(cube: &CubieCube, piece: Self) -> (Self, u8);
}

impl Locate for Corner {
    fn locate(cube: &CubieCube, piece: Self) -> (Self, u8) {
        cube.locate_corner(piece)
    }
}

impl Locate for Edge {
    fn locate(cube: &CubieCube, piece: Self) -> (Self, u8) {
        cube.locate_edge(piece)
    }
}

/// Place four pieces one at a time from a case table.
///
/// Table entries bring their piece home while keeping every other piece of
/// the stage that is already home where it is, so pieces can be placed in
/// any order.
pub(crate) fn place_pieces<P: Locate>(
    stage: Stage,
    cube: &CubieCube,
    targets: &[P],
    table: &PieceTable<P>,
    order: PieceOrder,
) -> Result<StageOutput, UnhandledCaseError> {
    let mut out = StageOutput::start(cube);
    let mut remaining = targets.to_vec();

    while !remaining.is_empty() {
        let candidates = match order {
            PieceOrder::Fixed => 1,
            PieceOrder::CheapestFirst => remaining.len(),
        };
        let mut best: Option<(usize, &MoveSequence)> = None;
        for (i, &target) in remaining.iter().take(candidates).enumerate() {
            let (slot, orientation) = P::locate(&out.cube, target);
            let entry = table.get(target, slot, orientation).ok_or_else(|| {
                UnhandledCaseError::MissingCase {
                    stage,
                    case: format!("{target} in {slot} with orientation {orientation}"),
                }
            })?;
            if best.map_or(true, |(_, b)| entry.len() < b.len()) {
                best = Some((i, entry));
            }
        }
        let Some((i, entry)) = best else { break };
        let target = remaining.remove(i);
        log::trace!("{stage}: {target} with {} moves", entry.len());
        out.cube = out.cube.apply_sequence(entry);
        out.moves.extend_from(entry);
    }

    Ok(out)
}
