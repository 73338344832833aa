//! Doolittle LU decomposition
//!
//! Factors `A` into a unit-lower-triangular `L` and an upper-triangular `U`
//! (no pivoting), then solves `L y = b` by forward substitution and
//! `U x = y` by back substitution. [`lu_decompose`] is exposed separately so
//! a factorization can be reused for several right-hand sides.

use crate::error::Error;
use crate::matrix::Matrix;
use crate::traits::RealField;
use crate::workspace::EliminationWorkspace;
use ndarray::Array1;

/// Factor `A = L * U` with Doolittle's method.
///
/// `L` starts as the identity and `U` as a clone of `A`; each step stores
/// the elimination factor in `L` and subtracts the scaled pivot row from
/// `U`. A zero pivot on the diagonal of `U` fails with
/// [`Error::SingularMatrix`].
pub fn lu_decompose<T: RealField>(a: &Matrix<T>) -> Result<(Matrix<T>, Matrix<T>), Error> {
    if !a.is_square() {
        return Err(Error::NonSquareMatrix {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    let n = a.nrows();
    let mut lower = EliminationWorkspace::new(&Matrix::identity(n)?);
    let mut upper = EliminationWorkspace::new(a);

    for i in 0..n.saturating_sub(1) {
        let pivot = upper.get(i, i);
        if pivot == T::zero() {
            return Err(Error::SingularMatrix);
        }
        for j in (i + 1)..n {
            let factor = upper.get(j, i) / pivot;
            lower.set(j, i, factor);
            upper.subtract_scaled_row(j, i, factor);
        }
    }

    Ok((lower.into_matrix(), upper.into_matrix()))
}

/// Solve `A x = b` via LU decomposition and two substitution passes.
pub fn lu_solve<T: RealField>(a: &Matrix<T>, b: &Array1<T>) -> Result<Array1<T>, Error> {
    let n = a.nrows();
    if b.len() != n {
        return Err(Error::DimensionMismatch {
            left_rows: a.nrows(),
            left_cols: a.ncols(),
            right_rows: b.len(),
            right_cols: 1,
        });
    }
    let (lower, upper) = lu_decompose(a)?;

    // Forward substitution: L y = b.
    let mut y = Array1::zeros(n);
    for i in 0..n {
        let mut value = b[i];
        for k in 0..i {
            value = value - lower.get(i, k) * y[k];
        }
        y[i] = value;
    }

    // Back substitution: U x = y.
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut value = y[i];
        for k in (i + 1)..n {
            value = value - upper.get(i, k) * x[k];
        }
        let pivot = upper.get(i, i);
        if pivot == T::zero() {
            return Err(Error::SingularMatrix);
        }
        x[i] = value / pivot;
    }
    Ok(x)
}
