use itertools::Itertools;

use crate::elimination::gauss_jordan::SolveResult;
use crate::elimination::trace::TraceOp;
use crate::matrix::matrix_float::{MatrixFloat, Scalar};

pub const SEPARATOR_WIDTH: usize = 81;

// enough digits for the exact decimal expansion of any f64
const EXACT_DIGITS: usize = 1100;

/// Two decimals, rounding ties away from zero on the exact decimal value of
/// `value`. `{:.2}` rounds exact binary ties to even instead.
pub fn fixed2<T: Scalar>(value: T) -> String {
    if !value.is_finite() {
        return format!("{:.2}", value);
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), "00"));
    let mut digits = int_part
        .bytes()
        .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect_vec();

    if frac.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let to_text = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    format!(
        "{}{}.{}",
        if value.is_sign_negative() { "-" } else { "" },
        to_text(&digits[..split]),
        to_text(&digits[split..])
    )
}

/// One-line, 1-indexed description of a row operation.
pub fn describe<T: Scalar>(op: &TraceOp<T>) -> String {
    match *op {
        TraceOp::RowSwap { from, to } => format!(
            "Swapping row {} with row {} to use the largest pivot element.",
            from + 1,
            to + 1
        ),
        TraceOp::RowNormalize { row, pivot } => {
            format!("Normalizing row {} by dividing by {}.", row + 1, fixed2(pivot))
        }
        TraceOp::RowEliminate {
            row,
            pivot_row,
            factor,
        } => format!(
            "Making element in row {}, column {} zero by subtracting {} * row {}.",
            row + 1,
            pivot_row + 1,
            fixed2(factor),
            pivot_row + 1
        ),
    }
}

/// `Matrix State:` block: every cell right-aligned in 10 columns with two
/// decimals, each followed by a space, then the separator line.
pub fn render_matrix_lines<T: Scalar>(matrix: &MatrixFloat<T>) -> Vec<String> {
    std::iter::once("Matrix State:".to_string())
        .chain((0..matrix.rows).map(|r| {
            matrix
                .row(r)
                .iter()
                .map(|&value| format!("{:>10} ", fixed2(value)))
                .join("")
        }))
        .chain(std::iter::once("-".repeat(SEPARATOR_WIDTH)))
        .collect()
}

pub fn render_solution_lines<T: Scalar>(result: &SolveResult<T>) -> Vec<String> {
    std::iter::once("Solution:".to_string())
        .chain(
            result
                .solution_unchecked()
                .iter()
                .enumerate()
                .map(|(i, &x)| format!("x{} = {}", i + 1, fixed2(x))),
        )
        .collect()
}

/// Full report: each trace step followed by its matrix snapshot, then the
/// solution block.
pub fn render_lines<T: Scalar>(result: &SolveResult<T>) -> Vec<String> {
    let mut lines = vec![];
    for entry in result.trace() {
        lines.push(describe(&entry.op));
        lines.extend(render_matrix_lines(&entry.snapshot));
    }
    lines.extend(render_solution_lines(result));
    lines
}

pub fn render<T: Scalar>(result: &SolveResult<T>) -> String {
    render_lines(result)
        .into_iter()
        .map(|line| line + "\n")
        .collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
