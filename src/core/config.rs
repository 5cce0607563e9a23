//! Solver and scrambler configuration.

use serde::{Deserialize, Serialize};

/// Order in which the first three stages place their four pieces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceOrder {
    /// Always the table order (DF DR DB DL, DFR DLF DBL DRB, FR FL BL BR).
    Fixed,
    /// Place whichever remaining piece has the shortest case-table entry.
    #[default]
    CheapestFirst,
}

/// Solver configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Piece placement order within the cross, corner and middle-edge stages.
    pub piece_order: PieceOrder,

    /// Merge adjacent same-face turns in the final answer.
    pub reduce: bool,

    /// Replay the answer on the input facelets before returning it.
    pub verify: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            piece_order: PieceOrder::CheapestFirst,
            reduce: true,
            verify: true,
        }
    }
}

impl SolverConfig {
    /// Create a new config with the given piece order.
    pub fn with_piece_order(mut self, order: PieceOrder) -> Self {
        self.piece_order = order;
        self
    }

    /// Create a new config with reduction on or off.
    pub fn with_reduce(mut self, reduce: bool) -> Self {
        self.reduce = reduce;
        self
    }

    /// Create a new config with verification on or off.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// Scrambler configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Number of moves per scramble.
    pub length: usize,

    /// Random seed; same seed produces the same scrambles.
    pub seed: u64,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self { length: 25, seed: 42 }
    }
}

impl ScrambleConfig {
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
