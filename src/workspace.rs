//! Mutable elimination workspace
//!
//! [`EliminationWorkspace`] carries the in-place elementary row operations
//! that elimination algorithms need. A solver clones the relevant
//! [`Matrix`] into a workspace it exclusively owns, mutates it freely, and
//! discards it on return, so callers never observe intermediate state.

use crate::matrix::Matrix;
use crate::traits::RealField;
use ndarray::{Array1, Array2, Axis};

/// Transient row-operation workspace backing Gaussian elimination and LU
/// decomposition.
#[derive(Debug, Clone)]
pub struct EliminationWorkspace<T: RealField> {
    data: Array2<T>,
}

impl<T: RealField> EliminationWorkspace<T> {
    /// Clone `matrix` into a fresh workspace.
    pub fn new(matrix: &Matrix<T>) -> Self {
        Self {
            data: matrix.as_array().clone(),
        }
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[[i, j]]
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[[i, j]] = value;
    }

    /// Copy of row `i`.
    pub fn row(&self, i: usize) -> Array1<T> {
        self.data.row(i).to_owned()
    }

    /// Copy of column `j`.
    pub fn col(&self, j: usize) -> Array1<T> {
        self.data.column(j).to_owned()
    }

    /// `row[target] += factor * row[source]`.
    pub fn add_scaled_row(&mut self, target: usize, source: usize, factor: T) {
        for k in 0..self.data.ncols() {
            let addend = self.data[[source, k]] * factor;
            self.data[[target, k]] += addend;
        }
    }

    /// `row[target] -= factor * row[source]`.
    pub fn subtract_scaled_row(&mut self, target: usize, source: usize, factor: T) {
        for k in 0..self.data.ncols() {
            let subtrahend = self.data[[source, k]] * factor;
            self.data[[target, k]] -= subtrahend;
        }
    }

    /// `row[i] *= factor`.
    pub fn scale_row(&mut self, i: usize, factor: T) {
        for k in 0..self.data.ncols() {
            self.data[[i, k]] *= factor;
        }
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        for k in 0..self.data.ncols() {
            self.data.swap([a, k], [b, k]);
        }
    }

    /// Drop row `i`, shrinking the workspace by one row.
    pub fn remove_row(&mut self, i: usize) {
        debug_assert!(i < self.data.nrows());
        let keep: Vec<usize> = (0..self.data.nrows()).filter(|&r| r != i).collect();
        self.data = self.data.select(Axis(0), &keep);
    }

    /// Drop column `j`, shrinking the workspace by one column.
    pub fn remove_col(&mut self, j: usize) {
        debug_assert!(j < self.data.ncols());
        let keep: Vec<usize> = (0..self.data.ncols()).filter(|&c| c != j).collect();
        self.data = self.data.select(Axis(1), &keep);
    }

    /// Freeze the workspace back into an immutable matrix.
    pub fn into_matrix(self) -> Matrix<T> {
        Matrix::from_array_unchecked(self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn workspace() -> EliminationWorkspace<f64> {
        EliminationWorkspace::new(
            &Matrix::from_rows(vec![vec![2.0, 4.0, 6.0], vec![1.0, 1.0, 1.0]]).unwrap(),
        )
    }

    #[test]
    fn row_operations_mutate_in_place() {
        let mut w = workspace();
        w.subtract_scaled_row(0, 1, 2.0);
        assert_eq!(w.row(0), array![0.0, 2.0, 4.0]);
        w.add_scaled_row(0, 1, 1.0);
        assert_eq!(w.row(0), array![1.0, 3.0, 5.0]);
        w.scale_row(1, 3.0);
        assert_eq!(w.row(1), array![3.0, 3.0, 3.0]);
        w.swap_rows(0, 1);
        assert_eq!(w.row(0), array![3.0, 3.0, 3.0]);
    }

    #[test]
    fn removal_shrinks_the_workspace() {
        let mut w = workspace();
        w.remove_col(0);
        assert_eq!((w.nrows(), w.ncols()), (2, 2));
        assert_eq!(w.col(0), array![4.0, 1.0]);
        w.remove_row(1);
        assert_eq!((w.nrows(), w.ncols()), (1, 2));
    }

    #[test]
    fn the_source_matrix_is_never_touched() {
        let matrix = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let mut w = EliminationWorkspace::new(&matrix);
        w.scale_row(0, 100.0);
        assert_eq!(matrix.row(0), array![1.0, 2.0]);
        assert_eq!(w.into_matrix().row(0), array![100.0, 200.0]);
    }
}
