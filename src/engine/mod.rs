//! Move engine: the `PuzzleState` trait and free functions over it.

pub mod puzzle;

pub use puzzle::{apply, apply_sequence, inverse, PuzzleState};
