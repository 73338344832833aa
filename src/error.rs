//! Error taxonomy for matrix operations and solvers
//!
//! Every failure is local and terminal for the call that produced it: there
//! are no retries and no partial results. Callers branch on the variant, not
//! on message text.

use thiserror::Error;

/// Errors produced by matrix operations and linear-system solvers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A matrix could not be built: zero rows or columns, ragged row input,
    /// or otherwise malformed construction data.
    #[error("invalid matrix shape: {0}")]
    InvalidShape(String),

    /// Two operands have incompatible shapes (unequal shapes for addition
    /// and subtraction, `A.cols != B.rows` for multiplication, or a vector
    /// length that does not match the matrix).
    #[error("dimension mismatch: {left_rows}x{left_cols} is incompatible with {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Determinant or inverse requested on a rectangular matrix.
    #[error("operation requires a square matrix, got {rows}x{cols}")]
    NonSquareMatrix { rows: usize, cols: usize },

    /// Zero determinant where inversion or Cramer's rule is required, or a
    /// zero pivot during elimination.
    #[error("matrix is singular")]
    SingularMatrix,

    /// The row-sum convergence precondition failed before any iteration ran.
    /// The test is sufficient, not necessary: some rejected systems would
    /// still converge, but the conservative refusal is part of the contract.
    #[error("iteration refused: row {row} of the iteration matrix has absolute sum {row_sum}, must be < 1")]
    DivergenceRisk { row: usize, row_sum: f64 },

    /// Unrecognized method tag, or a tag passed to the wrong solve entry
    /// point (an iterative tag to `solve`, a direct tag to
    /// `solve_iteratively`).
    #[error("unknown method: {0}")]
    UnknownMethod(String),
}
