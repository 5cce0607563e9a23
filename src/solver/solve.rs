//! The solver: validation, the stage pipeline, and the final answer.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::core::{CubeState, CubieCube, SolverConfig};
use crate::engine::PuzzleState;
use crate::moves::MoveSequence;
use crate::validate::to_cubies;

use super::error::{SolveError, UnhandledCaseError};
use super::stage::{Stage, PIPELINE};
use super::tables::CASE_TABLES;

/// Moves one stage contributed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageReport {
    pub stage: Stage,
    pub moves: MoveSequence,
    /// Last-layer cases recognised by the stage, empty for the first three.
    pub cases: Vec<String>,
}

/// A solution with its per-stage breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub stages: Vec<StageReport>,
    /// The full answer, reduced if the config asks for it.
    pub moves: MoveSequence,
}

impl SolveReport {
    /// Total length of the stage sequences before reduction.
    #[must_use]
    pub fn unreduced_len(&self) -> usize {
        self.stages.iter().map(|s| s.moves.len()).sum()
    }
}

/// Layer-by-layer solver.
///
/// Holds only its configuration; case tables are shared process-wide, so
/// solvers are cheap to create and safe to use from several threads.
#[derive(Clone, Debug, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Moves that take `state` to solved.
    ///
    /// Fails with [`SolveError::InvalidCube`] for unreachable states and
    /// [`SolveError::UnhandledCase`] if the case tables miss a case.
    pub fn solve(&self, state: &CubeState) -> Result<MoveSequence, SolveError> {
        Ok(self.solve_report(state)?.moves)
    }

    /// Like [`Solver::solve`], keeping the moves of each stage.
    pub fn solve_report(&self, state: &CubeState) -> Result<SolveReport, SolveError> {
        let cube = to_cubies(state)?;
        let report = self.solve_cubies(&cube)?;
        if self.config.verify && !state.apply_sequence(&report.moves).is_solved() {
            return Err(UnhandledCaseError::Unsolved.into());
        }
        Ok(report)
    }

    /// Run the stage pipeline on an already validated cubie cube.
    pub fn solve_cubies(&self, cube: &CubieCube) -> Result<SolveReport, UnhandledCaseError> {
        let mut current = *cube;
        let mut stages = Vec::with_capacity(PIPELINE.len());
        let mut moves = MoveSequence::new();

        for (stage, run) in PIPELINE {
            let output = run(&current, &self.config)?;
            if !stage.is_complete(&output.cube) {
                return Err(UnhandledCaseError::Postcondition { stage });
            }
            log::debug!("{stage}: {} moves", output.moves.len());
            moves.extend_from(&output.moves);
            current = output.cube;
            stages.push(StageReport {
                stage,
                moves: output.moves,
                cases: output.cases.iter().map(|name| name.to_string()).collect(),
            });
        }

        if self.config.verify && !cube.apply_sequence(&moves).is_solved() {
            return Err(UnhandledCaseError::Unsolved);
        }
        if self.config.reduce {
            moves = moves.reduced();
        }
        Ok(SolveReport { stages, moves })
    }
}

static DEFAULT_SOLVER: LazyLock<Solver> = LazyLock::new(Solver::default);

/// Solve with the default configuration.
pub fn solve(state: &CubeState) -> Result<MoveSequence, SolveError> {
    DEFAULT_SOLVER.solve(state)
}

/// Build the case tables now instead of on the first solve.
pub fn prepare_tables() {
    LazyLock::force(&CASE_TABLES);
}

/// Upper bound on the length of any answer, from the longest table entries.
#[must_use]
pub fn worst_case_length() -> usize {
    CASE_TABLES.worst_case_length()
}
