#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod elimination {
    pub mod gauss_jordan;
    pub mod render;
    pub mod trace;
}
pub mod matrix {
    pub mod matrix;
    pub mod matrix_float;
}

pub mod error;
pub mod input;

#[cfg(feature = "python")]
pub mod python;

pub use elimination::gauss_jordan::{solve, solve_batch, SolveResult};
pub use error::{Error, Result};
pub use matrix::matrix_float::{Matrix64, MatrixFloat};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn linear_solver(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::solve_system, m)?)?;
    m.add_function(wrap_pyfunction!(python::solve_systems, m)?)?;
    m.add_function(wrap_pyfunction!(python::render_report, m)?)?;
    Ok(())
}
