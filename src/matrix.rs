//! Dense matrix value type
//!
//! [`Matrix`] is an immutable rectangular grid of real numbers backed by
//! `ndarray`. Every operation returns a new matrix (or a copy of the
//! requested data); nothing here mutates the receiver. In-place elementary
//! row operations live on [`crate::workspace::EliminationWorkspace`], which
//! solvers create from a clone and discard on return.
//!
//! The determinant is computed by recursive cofactor (Laplace) expansion
//! along row 0. The cost is factorial in the dimension, which is acceptable
//! for the small systems this crate targets (n up to ~10); the exact numeric
//! results and sign conventions of cofactor expansion are part of the
//! contract.

use crate::error::Error;
use crate::traits::RealField;
use ndarray::{Array1, Array2, Axis};

/// One operand of a variadic [`Matrix::product`] call.
///
/// Scalar factors commute and scale the final matrix product; matrix factors
/// are multiplied in the order given.
#[derive(Debug, Clone, Copy)]
pub enum Factor<'a, T: RealField> {
    Matrix(&'a Matrix<T>),
    Scalar(T),
}

/// An immutable rows x cols grid of real numbers.
///
/// Invariants: rectangular, with at least one row and one column. Degenerate
/// shapes are rejected at construction with [`Error::InvalidShape`], so every
/// constructed matrix has a well-defined `min`, `max`, and first row.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: RealField> {
    data: Array2<T>,
}

impl<T: RealField> Matrix<T> {
    /// Build a matrix from nested rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, Error> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(Error::InvalidShape(
                "a matrix needs at least one row and one column".into(),
            ));
        }
        let ncols = rows[0].len();
        if rows.iter().any(|row| row.len() != ncols) {
            return Err(Error::InvalidShape("rows have unequal lengths".into()));
        }
        let nrows = rows.len();
        let flat: Vec<T> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((nrows, ncols), flat)
            .map_err(|e| Error::InvalidShape(e.to_string()))?;
        Ok(Self { data })
    }

    /// Build a matrix from an owned `ndarray` array.
    pub fn from_array(data: Array2<T>) -> Result<Self, Error> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(Error::InvalidShape(format!(
                "a {}x{} matrix is degenerate",
                data.nrows(),
                data.ncols()
            )));
        }
        Ok(Self { data })
    }

    pub(crate) fn from_array_unchecked(data: Array2<T>) -> Self {
        debug_assert!(data.nrows() > 0 && data.ncols() > 0);
        Self { data }
    }

    /// All-zeros matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, Error> {
        Self::filled(rows, cols, T::zero())
    }

    /// Matrix of the given shape with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidShape(format!(
                "a {rows}x{cols} matrix is degenerate"
            )));
        }
        Ok(Self {
            data: Array2::from_elem((rows, cols), value),
        })
    }

    /// The n x n identity matrix.
    pub fn identity(n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::InvalidShape("a 0x0 matrix is degenerate".into()));
        }
        Ok(Self { data: Array2::eye(n) })
    }

    /// A single-column matrix holding `values`.
    pub fn column(values: &Array1<T>) -> Result<Self, Error> {
        if values.is_empty() {
            return Err(Error::InvalidShape("a 0x1 matrix is degenerate".into()));
        }
        let data = Array2::from_shape_vec((values.len(), 1), values.to_vec())
            .map_err(|e| Error::InvalidShape(e.to_string()))?;
        Ok(Self { data })
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.data.nrows(), self.data.ncols())
    }

    pub fn is_square(&self) -> bool {
        self.data.nrows() == self.data.ncols()
    }

    /// Element at `(i, j)`. Panics if the indices are out of bounds.
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[[i, j]]
    }

    /// Copy of row `i`. Panics if `i` is out of bounds.
    pub fn row(&self, i: usize) -> Array1<T> {
        self.data.row(i).to_owned()
    }

    /// Copy of column `j`. Panics if `j` is out of bounds.
    pub fn col(&self, j: usize) -> Array1<T> {
        self.data.column(j).to_owned()
    }

    /// All elements in row-major order.
    pub fn elements(&self) -> Vec<T> {
        self.data.iter().copied().collect()
    }

    /// Smallest element.
    pub fn min(&self) -> T {
        self.data.iter().copied().fold(T::infinity(), T::min)
    }

    /// Largest element.
    pub fn max(&self) -> T {
        self.data.iter().copied().fold(T::neg_infinity(), T::max)
    }

    /// View of the underlying storage.
    pub fn as_array(&self) -> &Array2<T> {
        &self.data
    }

    /// New matrix with `row` appended at the bottom.
    pub fn push_row(&self, row: &Array1<T>) -> Result<Self, Error> {
        if row.len() != self.ncols() {
            return Err(self.vector_mismatch(row.len()));
        }
        let mut data = self.data.clone();
        data.push_row(row.view())
            .map_err(|e| Error::InvalidShape(e.to_string()))?;
        Ok(Self { data })
    }

    /// New matrix with `col` appended at the right.
    pub fn push_col(&self, col: &Array1<T>) -> Result<Self, Error> {
        if col.len() != self.nrows() {
            return Err(self.vector_mismatch(col.len()));
        }
        let mut data = self.data.clone();
        data.push_column(col.view())
            .map_err(|e| Error::InvalidShape(e.to_string()))?;
        Ok(Self { data })
    }

    /// New matrix without row `i`. Fails when the result would have no rows.
    pub fn delete_row(&self, i: usize) -> Result<Self, Error> {
        if i >= self.nrows() {
            return Err(Error::InvalidShape(format!(
                "row index {i} out of bounds for {} rows",
                self.nrows()
            )));
        }
        if self.nrows() == 1 {
            return Err(Error::InvalidShape(
                "deleting the last row leaves a degenerate matrix".into(),
            ));
        }
        let keep: Vec<usize> = (0..self.nrows()).filter(|&r| r != i).collect();
        Ok(Self {
            data: self.data.select(Axis(0), &keep),
        })
    }

    /// New matrix without column `j`. Fails when the result would have no
    /// columns.
    pub fn delete_col(&self, j: usize) -> Result<Self, Error> {
        if j >= self.ncols() {
            return Err(Error::InvalidShape(format!(
                "column index {j} out of bounds for {} columns",
                self.ncols()
            )));
        }
        if self.ncols() == 1 {
            return Err(Error::InvalidShape(
                "deleting the last column leaves a degenerate matrix".into(),
            ));
        }
        let keep: Vec<usize> = (0..self.ncols()).filter(|&c| c != j).collect();
        Ok(Self {
            data: self.data.select(Axis(1), &keep),
        })
    }

    /// New matrix with row `i` replaced by `row`.
    pub fn replace_row(&self, i: usize, row: &Array1<T>) -> Result<Self, Error> {
        if row.len() != self.ncols() {
            return Err(self.vector_mismatch(row.len()));
        }
        let mut data = self.data.clone();
        data.row_mut(i).assign(row);
        Ok(Self { data })
    }

    /// New matrix with column `j` replaced by `col`.
    pub fn replace_col(&self, j: usize, col: &Array1<T>) -> Result<Self, Error> {
        if col.len() != self.nrows() {
            return Err(self.vector_mismatch(col.len()));
        }
        let mut data = self.data.clone();
        data.column_mut(j).assign(col);
        Ok(Self { data })
    }

    /// New matrix with rows `a` and `b` exchanged.
    pub fn swap_rows(&self, a: usize, b: usize) -> Self {
        let mut data = self.data.clone();
        for k in 0..self.ncols() {
            data.swap([a, k], [b, k]);
        }
        Self { data }
    }

    /// New matrix with columns `a` and `b` exchanged.
    pub fn swap_cols(&self, a: usize, b: usize) -> Self {
        let mut data = self.data.clone();
        for k in 0..self.nrows() {
            data.swap([k, a], [k, b]);
        }
        Self { data }
    }

    /// Elementwise transform.
    pub fn map<F: Fn(T) -> T>(&self, f: F) -> Self {
        Self {
            data: self.data.mapv(f),
        }
    }

    /// Same shape, every element set to `value`.
    pub fn fill(&self, value: T) -> Self {
        Self {
            data: Array2::from_elem(self.data.raw_dim(), value),
        }
    }

    pub fn transpose(&self) -> Self {
        Self {
            data: self.data.t().to_owned(),
        }
    }

    /// The matrix with row `i` and column `j` removed.
    pub fn submatrix(&self, i: usize, j: usize) -> Result<Self, Error> {
        self.delete_row(i)?.delete_col(j)
    }

    /// `minor(i, j)`: determinant of [`Matrix::submatrix`]`(i, j)`.
    pub fn minor(&self, i: usize, j: usize) -> Result<T, Error> {
        self.submatrix(i, j)?.determinant()
    }

    /// `cofactor(i, j) = (-1)^(i + j) * minor(i, j)`.
    pub fn cofactor(&self, i: usize, j: usize) -> Result<T, Error> {
        let minor = self.minor(i, j)?;
        Ok(if (i + j) % 2 == 0 { minor } else { -minor })
    }

    /// Determinant by cofactor expansion along row 0.
    pub fn determinant(&self) -> Result<T, Error> {
        if !self.is_square() {
            return Err(Error::NonSquareMatrix {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        if self.nrows() == 1 {
            return Ok(self.data[[0, 0]]);
        }
        let mut det = T::zero();
        for j in 0..self.ncols() {
            det = det + self.data[[0, j]] * self.cofactor(0, j)?;
        }
        Ok(det)
    }

    /// Square with a nonzero determinant.
    pub fn is_invertible(&self) -> bool {
        self.is_square()
            && self
                .determinant()
                .map(|det| det != T::zero())
                .unwrap_or(false)
    }

    /// Matrix of cofactors.
    pub fn comatrix(&self) -> Result<Self, Error> {
        if !self.is_square() {
            return Err(Error::NonSquareMatrix {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        let n = self.nrows();
        let mut data = Array2::zeros((n, n));
        for i in 0..n {
            for j in 0..n {
                data[[i, j]] = self.cofactor(i, j)?;
            }
        }
        Ok(Self { data })
    }

    /// Transpose of the comatrix.
    pub fn adjugate(&self) -> Result<Self, Error> {
        Ok(self.comatrix()?.transpose())
    }

    /// Inverse via the adjugate scaled by `1 / determinant`.
    pub fn inverse(&self) -> Result<Self, Error> {
        if !self.is_square() {
            return Err(Error::NonSquareMatrix {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        let det = self.determinant()?;
        if det == T::zero() {
            return Err(Error::SingularMatrix);
        }
        Ok(self.adjugate()?.scale(det.recip()))
    }

    /// Elementwise sum. Fails unless every operand has the receiver's shape.
    pub fn add(&self, other: &Self) -> Result<Self, Error> {
        if self.shape() != other.shape() {
            return Err(self.shape_mismatch(other));
        }
        Ok(Self {
            data: &self.data + &other.data,
        })
    }

    /// Elementwise difference.
    pub fn sub(&self, other: &Self) -> Result<Self, Error> {
        if self.shape() != other.shape() {
            return Err(self.shape_mismatch(other));
        }
        Ok(Self {
            data: &self.data - &other.data,
        })
    }

    /// Matrix product. Fails unless `self.ncols() == other.nrows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self, Error> {
        if self.ncols() != other.nrows() {
            return Err(self.shape_mismatch(other));
        }
        Ok(Self {
            data: self.data.dot(&other.data),
        })
    }

    /// Matrix-vector product. Fails unless `self.ncols() == x.len()`.
    pub fn matvec(&self, x: &Array1<T>) -> Result<Array1<T>, Error> {
        if self.ncols() != x.len() {
            return Err(self.vector_mismatch(x.len()));
        }
        Ok(self.data.dot(x))
    }

    /// Every element multiplied by `k`.
    pub fn scale(&self, k: T) -> Self {
        Self {
            data: self.data.mapv(|v| v * k),
        }
    }

    /// Variadic sum. Fails on an empty operand list or unequal shapes.
    pub fn sum(operands: &[&Matrix<T>]) -> Result<Matrix<T>, Error> {
        let (first, rest) = operands
            .split_first()
            .ok_or_else(|| Error::InvalidShape("sum needs at least one operand".into()))?;
        rest.iter()
            .copied()
            .try_fold((*first).clone(), |acc, m| acc.add(m))
    }

    /// Variadic left-to-right difference.
    pub fn difference(operands: &[&Matrix<T>]) -> Result<Matrix<T>, Error> {
        let (first, rest) = operands
            .split_first()
            .ok_or_else(|| Error::InvalidShape("difference needs at least one operand".into()))?;
        rest.iter()
            .copied()
            .try_fold((*first).clone(), |acc, m| acc.sub(m))
    }

    /// Variadic product over any mix of matrices and scalars.
    ///
    /// Matrix factors are chained in order (each step requires compatible
    /// shapes); scalar factors are multiplied together and scale the final
    /// product. At least one matrix factor is required.
    pub fn product(factors: &[Factor<'_, T>]) -> Result<Matrix<T>, Error> {
        let mut scalar = T::one();
        let mut chained: Option<Matrix<T>> = None;
        for factor in factors {
            match factor {
                Factor::Scalar(s) => scalar = scalar * *s,
                Factor::Matrix(m) => {
                    chained = Some(match chained {
                        None => (*m).clone(),
                        Some(acc) => acc.matmul(*m)?,
                    });
                }
            }
        }
        chained
            .map(|m| m.scale(scalar))
            .ok_or_else(|| Error::InvalidShape("product needs at least one matrix factor".into()))
    }

    fn shape_mismatch(&self, other: &Self) -> Error {
        Error::DimensionMismatch {
            left_rows: self.nrows(),
            left_cols: self.ncols(),
            right_rows: other.nrows(),
            right_cols: other.ncols(),
        }
    }

    fn vector_mismatch(&self, len: usize) -> Error {
        Error::DimensionMismatch {
            left_rows: self.nrows(),
            left_cols: self.ncols(),
            right_rows: len,
            right_cols: 1,
        }
    }
}
