//! # cube-engine
//!
//! A 3x3x3 twisty-puzzle engine: state, moves, seeded scrambles, a
//! reachability validator and a layer-by-layer solver.
//!
//! ## Design Principles
//!
//! 1. **Values, not objects**: every state is a small `Copy` value. Applying
//!    a move returns a new state and never touches the old one.
//!
//! 2. **Two views of one cube**: [`CubeState`] holds the 54 stickers a
//!    person sees. [`CubieCube`] holds where each piece sits and how it is
//!    turned. Both implement [`PuzzleState`] and agree move for move.
//!
//! 3. **Derived tables**: move permutations come from cube geometry and
//!    solver case tables from running algorithms on the move engine. Nothing
//!    is typed in by hand beyond the algorithm notation.
//!
//! ## Modules
//!
//! - `core`: faces, colors, facelet and cubie states, RNG, configuration
//! - `moves`: move notation, sequences and the move tables
//! - `engine`: the `PuzzleState` trait
//! - `scramble`: seeded random scrambles
//! - `validate`: facelet state to cubie state, rejecting unreachable states
//! - `solver`: the five-stage solver

pub mod core;
pub mod engine;
pub mod moves;
pub mod scramble;
pub mod solver;
pub mod validate;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorScheme, Corner, CubeRng, CubeRngState, CubeState, CubieCube, Edge, Face,
    PieceOrder, ScrambleConfig, SolverConfig, STANDARD_SCHEME,
};

pub use crate::moves::{Move, MoveSequence, ParseMoveError, Turn};

pub use crate::engine::PuzzleState;

pub use crate::scramble::{scramble, Scramble, Scrambler};

pub use crate::validate::{validate, InvalidCubeError};

pub use crate::solver::{solve, SolveError, SolveReport, Solver, Stage, UnhandledCaseError};
