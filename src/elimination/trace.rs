use crate::matrix::matrix_float::MatrixFloat;

/// An elementary row operation. Row indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceOp<T> {
    /// Rows `from` (the pivot position) and `to` (the selected pivot row) were exchanged.
    RowSwap { from: usize, to: usize },
    /// `row` was divided by `pivot`.
    RowNormalize { row: usize, pivot: T },
    /// `factor * row[pivot_row]` was subtracted from `row`.
    RowEliminate {
        row: usize,
        pivot_row: usize,
        factor: T,
    },
}

/// One step of a solve: the operation and the matrix right after it.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEntry<T> {
    pub op: TraceOp<T>,
    pub snapshot: MatrixFloat<T>,
}

impl<T> TraceEntry<T> {
    pub fn is_swap(&self) -> bool {
        matches!(self.op, TraceOp::RowSwap { .. })
    }

    pub fn is_normalize(&self) -> bool {
        matches!(self.op, TraceOp::RowNormalize { .. })
    }

    pub fn is_eliminate(&self) -> bool {
        matches!(self.op, TraceOp::RowEliminate { .. })
    }
}
