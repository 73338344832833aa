//! Jacobi iteration step
//!
//! Simultaneous update: every component of the new iterate is computed from
//! the full previous iterate, `x_{k+1} = b' + A' * x_k`.

use crate::traits::RealField;
use ndarray::{Array1, Array2};

pub(crate) fn step<T: RealField>(
    iteration_matrix: &Array2<T>,
    iteration_constants: &Array1<T>,
    prev: &Array1<T>,
) -> Array1<T> {
    iteration_constants + &iteration_matrix.dot(prev)
}
