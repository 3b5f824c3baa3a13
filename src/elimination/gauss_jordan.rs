use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::elimination::trace::{TraceEntry, TraceOp};
use crate::error::{Error, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_float::{MatrixFloat, Scalar};

/// Reduced augmented matrix and the row operations that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult<T> {
    n: usize,
    matrix: MatrixFloat<T>,
    trace: Vec<TraceEntry<T>>,
    zero_pivots: Vec<usize>,
}

impl<T: Scalar> SolveResult<T> {
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn matrix(&self) -> &MatrixFloat<T> {
        &self.matrix
    }

    pub fn trace(&self) -> &[TraceEntry<T>] {
        &self.trace
    }

    /// Pivot columns whose pivot was exactly zero, ascending.
    pub fn zero_pivots(&self) -> &[usize] {
        &self.zero_pivots
    }

    pub fn is_singular(&self) -> bool {
        !self.zero_pivots.is_empty()
    }

    /// The augmented column, or `SingularSystem` naming the first zero pivot.
    pub fn solution(&self) -> Result<Vec<T>> {
        match self.zero_pivots.first() {
            Some(&column) => Err(Error::SingularSystem { column }),
            None => Ok(self.solution_unchecked()),
        }
    }

    /// The augmented column as left by the reduction, meaningless for the
    /// unknowns of a singular system.
    pub fn solution_unchecked(&self) -> Vec<T> {
        self.matrix.column(self.n)
    }

    pub fn is_reduced(&self, tolerance: T) -> bool {
        self.matrix.is_identity_block(tolerance)
    }

    pub fn swap_count(&self) -> usize {
        self.trace.iter().filter(|e| e.is_swap()).count()
    }

    pub fn normalize_count(&self) -> usize {
        self.trace.iter().filter(|e| e.is_normalize()).count()
    }

    pub fn eliminate_count(&self) -> usize {
        self.trace.iter().filter(|e| e.is_eliminate()).count()
    }
}

/// Row in `col..n` with the strictly largest `|matrix[row][col]|`.
/// Ties resolve to the lowest row.
pub fn select_pivot_row<T: Scalar>(matrix: &MatrixFloat<T>, col: usize, n: usize) -> usize {
    let mut max_row = col;
    for k in col + 1..n {
        if matrix.at(k, col).abs() > matrix.at(max_row, col).abs() {
            max_row = k;
        }
    }
    max_row
}

fn record<T: Scalar>(trace: &mut Vec<TraceEntry<T>>, op: TraceOp<T>, matrix: &MatrixFloat<T>) {
    trace!("{:?}", op);
    trace.push(TraceEntry {
        op,
        snapshot: matrix.clone(),
    });
}

/// Gauss-Jordan elimination with partial pivoting on an `n x (n + 1)`
/// augmented matrix.
///
/// A pivot is zero only when it compares equal to `0.0`; such a column is
/// left unreduced (no normalize or eliminate steps) and reported through
/// [`SolveResult::zero_pivots`]. Every other pivot, however small, is divided
/// through.
///
/// The elimination of a zero-pivot column is skipped too, not run with the
/// zero row: for an inconsistent singular system such as
/// `[[1, 1, 2], [1, 1, 3]]` the unchecked solution reads `x1 = 2`, where a
/// loop that keeps eliminating would give `x1 = 1`.
pub fn solve<T: Scalar>(mut matrix: MatrixFloat<T>, n: usize) -> Result<SolveResult<T>> {
    if n == 0 {
        return Err(Error::InvalidEquationCount {
            value: n.to_string(),
        });
    }
    if matrix.rows != n || matrix.cols != n + 1 {
        return Err(Error::InvalidShape {
            expected_rows: n,
            expected_cols: n + 1,
            rows: matrix.rows,
            cols: matrix.cols,
        });
    }

    let mut trace = Vec::with_capacity(n * (n + 1));
    let mut zero_pivots = vec![];

    for i in 0..n {
        let max_row = select_pivot_row(&matrix, i, n);
        if max_row != i {
            matrix.swap_rows(i, max_row);
            record(&mut trace, TraceOp::RowSwap { from: i, to: max_row }, &matrix);
        }

        let pivot = matrix.at(i, i);
        if pivot == T::zero() {
            warn!("zero pivot in column {}, skipping its reduction", i + 1);
            zero_pivots.push(i);
            continue;
        }

        matrix.divide_row(i, pivot);
        record(&mut trace, TraceOp::RowNormalize { row: i, pivot }, &matrix);

        for k in (0..n).filter(|&k| k != i) {
            let factor = matrix.at(k, i);
            matrix.sub_scaled_row(k, i, factor);
            record(
                &mut trace,
                TraceOp::RowEliminate {
                    row: k,
                    pivot_row: i,
                    factor,
                },
                &matrix,
            );
        }
    }

    debug!(
        "solved {}x{} system in {} steps ({} zero pivots)",
        n,
        n + 1,
        trace.len(),
        zero_pivots.len()
    );

    Ok(SolveResult {
        n,
        matrix,
        trace,
        zero_pivots,
    })
}

/// Solve independent systems in parallel. Results keep the input order.
pub fn solve_batch<T: Scalar>(systems: Vec<(MatrixFloat<T>, usize)>) -> Vec<Result<SolveResult<T>>> {
    systems
        .into_par_iter()
        .map(|(matrix, n)| solve(matrix, n))
        .collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
