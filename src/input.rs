//! Turning user text into an augmented matrix. Every check happens here, so
//! the elimination engine only ever sees well-formed numbers.

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_float::Matrix64;

pub fn parse_equation_count(text: &str) -> Result<usize> {
    let text = text.trim();
    text.parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| Error::InvalidEquationCount {
            value: text.to_string(),
        })
}

pub fn parse_cell(text: &str, row: usize, col: usize) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| Error::NonNumericInput {
            row,
            col,
            text: text.to_string(),
        })
}

fn split_cells(line: &str) -> Vec<&str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|cell| !cell.is_empty())
        .collect_vec()
}

/// Parse `n` rows of `n + 1` cells separated by whitespace or commas.
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_augmented(text: &str, n: usize) -> Result<Matrix64> {
    if n == 0 {
        return Err(Error::InvalidEquationCount {
            value: n.to_string(),
        });
    }

    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(split_cells)
        .collect_vec();

    if lines.len() != n {
        return Err(Error::InvalidShape {
            expected_rows: n,
            expected_cols: n + 1,
            rows: lines.len(),
            cols: lines.iter().map(|cells| cells.len()).max().unwrap_or(0),
        });
    }

    let mut rows = Vec::with_capacity(n);
    for (row, cells) in lines.iter().enumerate() {
        if cells.len() != n + 1 {
            return Err(Error::InvalidShape {
                expected_rows: n,
                expected_cols: n + 1,
                rows: n,
                cols: cells.len(),
            });
        }
        rows.push(
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| parse_cell(cell, row, col))
                .collect::<Result<Vec<f64>>>()?,
        );
    }

    Ok(Matrix64::from_list(rows))
}

/// Validate an already numeric grid as an augmented matrix, returning it with
/// its equation count.
pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<(Matrix64, usize)> {
    let n = rows.len();
    if n == 0 {
        return Err(Error::InvalidEquationCount {
            value: n.to_string(),
        });
    }
    if let Some(bad) = rows.iter().find(|row| row.len() != n + 1) {
        return Err(Error::InvalidShape {
            expected_rows: n,
            expected_cols: n + 1,
            rows: n,
            cols: bad.len(),
        });
    }

    Ok((Matrix64::from_list(rows), n))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
