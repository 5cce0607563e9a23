//! Reasons a facelet state is not a reachable cube.

use std::fmt;
use thiserror::Error;

use crate::core::{Color, Corner, Edge};

/// A corner or edge, as a slot or as a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    Corner(Corner),
    Edge(Edge),
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Corner(c) => write!(f, "corner {c}"),
            Piece::Edge(e) => write!(f, "edge {e}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TwistDefect {
    #[error("twists sum to {0} mod 3")]
    Sum(u8),
    #[error("the stickers in slot {0} are in mirrored order")]
    Mirrored(Corner),
}

/// Why a state cannot be reached from solved by face turns.
///
/// Checks run in the order of the variants; the first failure is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidCubeError {
    #[error("{color} appears on {count} facelets, expected 9")]
    ColorCount { color: Color, count: usize },

    #[error("center facelets do not show six distinct colors")]
    Centers,

    #[error("stickers in the {0} slot do not match any piece")]
    UnknownPiece(Piece),

    #[error("{0} appears more than once")]
    DuplicatePiece(Piece),

    #[error("corner permutation parity {corners} differs from edge permutation parity {edges}")]
    Parity { corners: u8, edges: u8 },

    #[error("corner twist is unreachable: {0}")]
    CornerTwist(TwistDefect),

    #[error("edge flips sum to 1 mod 2")]
    EdgeFlip,
}
