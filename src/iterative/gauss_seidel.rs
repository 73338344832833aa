//! Gauss-Seidel iteration step
//!
//! Like Jacobi, but component `i` is computed from already-updated
//! components of the same sweep for indices `< i` and from the previous
//! iterate for indices `> i`, strictly in declared variable order.

use crate::traits::RealField;
use ndarray::{Array1, Array2};

pub(crate) fn step<T: RealField>(
    iteration_matrix: &Array2<T>,
    iteration_constants: &Array1<T>,
    prev: &Array1<T>,
) -> Array1<T> {
    let n = prev.len();
    let mut next = Array1::zeros(n);
    for i in 0..n {
        let mut value = iteration_constants[i];
        for j in 0..i {
            value = value + iteration_matrix[[i, j]] * next[j];
        }
        for j in (i + 1)..n {
            value = value + iteration_matrix[[i, j]] * prev[j];
        }
        next[i] = value;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn later_components_see_earlier_updates() {
        let a = array![[0.0, -0.5], [0.5, 0.0]];
        let b = array![1.5, -0.5];
        let next = step(&a, &b, &b);
        // x0 uses prev x1 = -0.5; x1 uses the freshly computed x0 = 1.75.
        assert_eq!(next, array![1.75, 0.375]);
    }
}
