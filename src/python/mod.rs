//! Python bindings for cube-engine.
//!
//! # Quick Start
//!
//! ```python
//! import cube_engine as ce
//!
//! cube, moves = ce.scramble(length=25, seed=42)
//! answer = ce.solve(cube)
//! assert cube.apply_sequence(answer).is_solved()
//! ```

use pyo3::prelude::*;

mod py_cube;

pub use py_cube::*;

/// cube_engine: scramble, validate and solve 3x3x3 cubes.
#[pymodule]
fn cube_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCube>()?;

    m.add_function(wrap_pyfunction!(scramble, m)?)?;
    m.add_function(wrap_pyfunction!(solve, m)?)?;
    m.add_function(wrap_pyfunction!(validate, m)?)?;

    Ok(())
}
