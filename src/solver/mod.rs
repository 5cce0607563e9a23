//! Layer-by-layer solver.
//!
//! ## Pipeline
//!
//! 1. Cross on the Down face
//! 2. First-layer corners
//! 3. Second-layer edges
//! 4. Last-layer edge orientation
//! 5. Last-layer corner orientation and permutation
//!
//! Each stage is table driven. Tables are derived from the move engine the
//! first time a solve runs (or on [`prepare_tables`]) and shared afterwards.
//!
//! ## Usage
//!
//! ```
//! use cube_engine::engine::PuzzleState;
//! use cube_engine::scramble::scramble;
//! use cube_engine::solver::solve;
//!
//! let scrambled = scramble(25, 42);
//! let answer = solve(&scrambled.state).unwrap();
//! assert!(scrambled.state.apply_sequence(&answer).is_solved());
//! ```

mod algorithms;
mod corners;
mod cross;
pub mod error;
mod last_layer;
mod middle;
pub mod solve;
pub mod stage;
mod tables;

pub use error::{SolveError, UnhandledCaseError};
pub use solve::{prepare_tables, solve, worst_case_length, SolveReport, Solver, StageReport};
pub use stage::{Stage, StageOutput};
