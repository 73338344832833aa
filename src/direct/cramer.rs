//! Cramer's rule
//!
//! Each unknown is the ratio of two determinants: the coefficient matrix
//! with the relevant column replaced by the constants, over the coefficient
//! matrix itself. Practical only for the small systems this crate targets,
//! since every ratio re-runs cofactor expansion.

use crate::error::Error;
use crate::matrix::Matrix;
use crate::traits::RealField;
use ndarray::Array1;

/// Solve `A x = b` by Cramer's rule.
///
/// Fails with [`Error::SingularMatrix`] when `det(A) == 0` and with
/// [`Error::NonSquareMatrix`] on a rectangular `A`.
pub fn cramer_solve<T: RealField>(a: &Matrix<T>, b: &Array1<T>) -> Result<Array1<T>, Error> {
    let det = a.determinant()?;
    if det == T::zero() {
        return Err(Error::SingularMatrix);
    }
    let n = a.nrows();
    let mut x = Array1::zeros(n);
    for i in 0..n {
        let replaced = a.replace_col(i, b)?;
        x[i] = replaced.determinant()? / det;
    }
    Ok(x)
}
