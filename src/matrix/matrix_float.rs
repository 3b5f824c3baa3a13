use num_traits::Float;

use crate::error::{Error, Result};
use crate::matrix::matrix::Matrix;

pub trait Scalar:  // Avoid repeating all the traits
    Float
    + std::fmt::Display
    + std::fmt::Debug
    + Send
    + Sync
{
}

impl<T> Scalar for T where T: Float + std::fmt::Display + std::fmt::Debug + Send + Sync {}

/// Dense row-major matrix of reals. Used as an `n x (n + 1)` augmented
/// matrix by the elimination engine, the last column holding the constants.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixFloat<T> {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<T>,
}

pub type Matrix64 = MatrixFloat<f64>;

impl<T: Scalar> Matrix<T> for MatrixFloat<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Self {
        let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let rows = lines.len();

        MatrixFloat {
            rows,
            cols,
            cells: lines
                .into_iter()
                .flat_map(|l| {
                    let pad = cols - l.len();
                    l.into_iter().chain(std::iter::repeat_n(T::zero(), pad))
                })
                .collect(),
        }
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return vec![vec![]; self.rows];
        }
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    fn divide_row(&mut self, row: usize, divisor: T) {
        for cell in &mut self.cells[row * self.cols..(row + 1) * self.cols] {
            *cell = *cell / divisor;
        }
    }

    // row[target] -= factor * row[source]
    fn sub_scaled_row(&mut self, target: usize, source: usize, factor: T) {
        for k in 0..self.cols {
            let value = self.at(source, k);
            let cell = &mut self.cells[target * self.cols + k];
            *cell = *cell - factor * value;
        }
    }
}

impl<T: Scalar> MatrixFloat<T> {
    pub fn identity(n: usize) -> MatrixFloat<T> {
        MatrixFloat {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        }
    }

    /// Append `column` to the right, e.g. the constants of `Ax = b`.
    pub fn augment(&self, column: &[T]) -> Result<MatrixFloat<T>> {
        if column.len() != self.rows {
            return Err(Error::InvalidShape {
                expected_rows: self.rows,
                expected_cols: 1,
                rows: column.len(),
                cols: 1,
            });
        }

        Ok(MatrixFloat {
            rows: self.rows,
            cols: self.cols + 1,
            cells: (0..self.rows)
                .flat_map(|r| self.row(r).iter().copied().chain(std::iter::once(column[r])))
                .collect(),
        })
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn column(&self, col: usize) -> Vec<T> {
        (0..self.rows).map(|r| self.at(r, col)).collect()
    }

    /// True when the leading square block is the identity within `tolerance`.
    pub fn is_identity_block(&self, tolerance: T) -> bool {
        let n = self.rows.min(self.cols);
        (0..n).all(|i| {
            (0..n).all(|j| {
                let expected = if i == j { T::one() } else { T::zero() };
                (self.at(i, j) - expected).abs() <= tolerance
            })
        })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
