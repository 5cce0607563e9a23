//! Moves: the 18 face turns, notation, sequences, and their tables.

pub mod sequence;
pub(crate) mod tables;
pub mod turn;

pub use sequence::MoveSequence;
pub use turn::{Move, ParseMoveError, Turn};
