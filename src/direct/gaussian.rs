//! Gaussian elimination with partial pivoting
//!
//! Works on the augmented matrix `[A | b]`. Each elimination level picks the
//! row with the largest-magnitude value in the leading column as the pivot
//! (first such row on ties), zeroes the column out of every other row, then
//! drops the leading column and the pivot row and continues on the smaller
//! workspace. The captured pivot rows then drive an explicit reverse
//! back-substitution loop, last variable first.

use crate::error::Error;
use crate::matrix::Matrix;
use crate::traits::RealField;
use crate::workspace::EliminationWorkspace;
use ndarray::Array1;

/// Solve `A x = b` by partial-pivoting Gaussian elimination.
///
/// Fails with [`Error::SingularMatrix`] when a pivot is exactly zero (the
/// leading column has no nonzero entry left).
pub fn gaussian_solve<T: RealField>(a: &Matrix<T>, b: &Array1<T>) -> Result<Array1<T>, Error> {
    if !a.is_square() {
        return Err(Error::NonSquareMatrix {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    let n = a.nrows();
    let augmented = a.push_col(b)?;
    let mut work = EliminationWorkspace::new(&augmented);

    // Pivot row captured at each level (leading column still present, the
    // constant last), together with the pivot value.
    let mut pivots: Vec<(Array1<T>, T)> = Vec::with_capacity(n);

    for _ in 0..n {
        let rows = work.nrows();
        let lead = work.col(0);

        let mut pivot_row = 0;
        for r in 1..rows {
            if lead[r].abs() > lead[pivot_row].abs() {
                pivot_row = r;
            }
        }
        let pivot = lead[pivot_row];
        if pivot == T::zero() {
            return Err(Error::SingularMatrix);
        }

        pivots.push((work.row(pivot_row), pivot));
        if rows == 1 {
            break;
        }

        work.remove_col(0);
        for r in 0..rows {
            if r != pivot_row {
                work.subtract_scaled_row(r, pivot_row, lead[r] / pivot);
            }
        }
        work.remove_row(pivot_row);
    }

    // Back substitution: at level k the captured row holds the pivot
    // coefficient, the coefficients of variables k+1..n, and the constant.
    let mut x = Array1::zeros(n);
    for k in (0..n).rev() {
        let (row, pivot) = &pivots[k];
        let mut value = row[row.len() - 1];
        for j in (k + 1)..n {
            value = value - row[j - k] * x[j];
        }
        x[k] = value / *pivot;
    }
    Ok(x)
}
