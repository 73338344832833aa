//! Inverse-matrix method
//!
//! Solves `A x = b` as `x = A^-1 * b`, with the inverse computed from the
//! adjugate. The product is formed against `b` as an n x 1 column matrix,
//! so the result is read back from the single column.

use crate::error::Error;
use crate::matrix::{Factor, Matrix};
use crate::traits::RealField;
use ndarray::Array1;

/// Solve `A x = b` by multiplying with the inverse of `A`.
///
/// Fails with [`Error::SingularMatrix`] when `A` is not invertible.
pub fn inverse_solve<T: RealField>(a: &Matrix<T>, b: &Array1<T>) -> Result<Array1<T>, Error> {
    let inverse = a.inverse()?;
    let constants = Matrix::column(b)?;
    let solution = Matrix::product(&[Factor::Matrix(&inverse), Factor::Matrix(&constants)])?;
    Ok(solution.col(0))
}
