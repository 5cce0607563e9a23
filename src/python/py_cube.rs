//! Cube bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::CubeState;
use crate::engine::PuzzleState;
use crate::moves::{Move, MoveSequence, ParseMoveError};
use crate::solver::{self, SolveError};
use crate::scramble::scramble as scramble_cube;
use crate::validate::validate as validate_cube;

/// Python wrapper for CubeState.
///
/// Immutable: `apply` and `apply_sequence` return a new cube.
#[pyclass(name = "Cube", frozen)]
#[derive(Clone, Debug)]
pub struct PyCube(pub CubeState);

#[pymethods]
impl PyCube {
    /// The solved cube in the standard color scheme.
    #[new]
    fn new() -> Self {
        Self(CubeState::solved())
    }

    #[staticmethod]
    fn solved() -> Self {
        Self(CubeState::solved())
    }

    /// Parse 54 color letters (W Y R O B G) in U R F D L B face order.
    ///
    /// Only checks the letters; use `validate` for reachability.
    #[staticmethod]
    fn from_facelets(facelets: &str) -> PyResult<Self> {
        facelets
            .parse::<CubeState>()
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Apply a single move such as "R", "U2" or "F'".
    fn apply(&self, mv: &str) -> PyResult<Self> {
        let mv: Move = mv.parse().map_err(|e: ParseMoveError| {
            PyValueError::new_err(e.to_string())
        })?;
        Ok(Self(self.0.apply(mv)))
    }

    /// Apply a space-separated move sequence.
    fn apply_sequence(&self, moves: &str) -> PyResult<Self> {
        let moves = parse_sequence(moves)?;
        Ok(Self(self.0.apply_sequence(&moves)))
    }

    fn is_solved(&self) -> bool {
        self.0.is_solved()
    }

    /// The 54 color letters.
    fn facelets(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Cube('{}')", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

fn parse_sequence(moves: &str) -> PyResult<MoveSequence> {
    moves
        .parse()
        .map_err(|e: ParseMoveError| PyValueError::new_err(e.to_string()))
}

/// Scramble a solved cube with `length` random moves.
///
/// Returns the scrambled cube and the moves as a string.
#[pyfunction]
#[pyo3(signature = (length = 25, seed = 42))]
pub fn scramble(length: usize, seed: u64) -> (PyCube, String) {
    let s = scramble_cube(length, seed);
    (PyCube(s.state), s.moves.to_string())
}

/// Solve a cube, returning the moves as a string.
///
/// Raises ValueError for an unreachable cube and RuntimeError if the solver
/// meets a case it has no entry for.
#[pyfunction]
pub fn solve(cube: &PyCube) -> PyResult<String> {
    match solver::solve(&cube.0) {
        Ok(moves) => Ok(moves.to_string()),
        Err(e @ SolveError::InvalidCube(_)) => Err(PyValueError::new_err(e.to_string())),
        Err(e @ SolveError::UnhandledCase(_)) => Err(PyRuntimeError::new_err(e.to_string())),
    }
}

/// Raise ValueError if the cube is not reachable from solved.
#[pyfunction]
pub fn validate(cube: &PyCube) -> PyResult<()> {
    validate_cube(&cube.0).map_err(|e| PyValueError::new_err(e.to_string()))
}
