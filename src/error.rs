use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The equation count is not a positive integer.
    #[error("Invalid number of equations '{value}': expected a positive integer")]
    InvalidEquationCount { value: String },

    /// A cell could not be parsed as a real number. Coordinates are 0-based.
    #[error("Cell at row {}, column {} is not a valid number: '{}'", .row + 1, .col + 1, .text)]
    NonNumericInput {
        row: usize,
        col: usize,
        text: String,
    },

    #[error("Expected a {expected_rows}x{expected_cols} augmented matrix, got {rows}x{cols}")]
    InvalidShape {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// The pivot of `column` was exactly zero after pivot selection.
    #[error("Singular system: zero pivot in column {}", .column + 1)]
    SingularSystem { column: usize },
}
