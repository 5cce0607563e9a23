//! Solver errors.

use thiserror::Error;

use crate::validate::InvalidCubeError;

use super::stage::Stage;

/// The solver met a state its case tables do not cover.
///
/// For a cube that passed validation this indicates a defect in the tables,
/// never bad input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UnhandledCaseError {
    #[error("no {stage} case for {case}")]
    MissingCase { stage: Stage, case: String },

    #[error("{stage} finished without reaching its goal")]
    Postcondition { stage: Stage },

    #[error("replaying the solution did not solve the cube")]
    Unsolved,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("invalid cube: {0}")]
    InvalidCube(#[from] InvalidCubeError),

    #[error("unhandled case: {0}")]
    UnhandledCase(#[from] UnhandledCaseError),
}
