use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::elimination::gauss_jordan::{solve, solve_batch, SolveResult};
use crate::elimination::render::{render, render_lines};
use crate::error::Error;
use crate::input::from_rows;

fn to_py_err(error: Error) -> PyErr {
    PyValueError::new_err(error.to_string())
}

fn solve_rows(rows: Vec<Vec<f64>>) -> Result<SolveResult<f64>, Error> {
    let (matrix, n) = from_rows(rows)?;
    solve(matrix, n)
}

fn solution_of(result: &SolveResult<f64>, strict: bool) -> Result<Vec<f64>, Error> {
    if strict {
        result.solution()
    } else {
        Ok(result.solution_unchecked())
    }
}

// rows of the augmented matrix, returns the solution and the report lines
#[pyfunction]
#[pyo3(signature = (rows, strict=false))]
pub fn solve_system(rows: Vec<Vec<f64>>, strict: bool) -> PyResult<(Vec<f64>, Vec<String>)> {
    let result = solve_rows(rows).map_err(to_py_err)?;
    let solution = solution_of(&result, strict).map_err(to_py_err)?;
    Ok((solution, render_lines(&result)))
}

#[pyfunction]
#[pyo3(signature = (systems, strict=false))]
pub fn solve_systems(systems: Vec<Vec<Vec<f64>>>, strict: bool) -> PyResult<Vec<Vec<f64>>> {
    let systems = systems
        .into_iter()
        .map(from_rows)
        .collect::<Result<Vec<_>, Error>>()
        .map_err(to_py_err)?;

    solve_batch(systems)
        .into_iter()
        .map(|result| result.and_then(|r| solution_of(&r, strict)).map_err(to_py_err))
        .collect()
}

#[pyfunction]
pub fn render_report(rows: Vec<Vec<f64>>) -> PyResult<String> {
    match solve_rows(rows) {
        Ok(result) => Ok(render(&result)),
        Err(error) => Err(to_py_err(error)),
    }
}
