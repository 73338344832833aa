//! Iterative solvers for dense linear systems
//!
//! Jacobi and Gauss-Seidel fixed-point iteration over the derived iteration
//! matrix `A'` (off-diagonal entries divided by the negated row diagonal,
//! zero diagonal) and iteration vector `b'` (constants divided by the row
//! diagonal). Both methods start from `x_0 = b'` and are exposed as the
//! lazy, pull-based [`Iterates`] sequence: the consumer sees every iterate,
//! controls pacing, and may stop at any point.
//!
//! Before any iterate is produced, every row of `|A'|` must sum to less
//! than 1, otherwise the call refuses with [`Error::DivergenceRisk`]. The
//! test is sufficient but not necessary for convergence; the conservative
//! refusal is deliberate and must not be relaxed.

mod gauss_seidel;
mod jacobi;

use crate::error::Error;
use crate::matrix::Matrix;
use crate::system::Solution;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Iterative solver configuration.
#[derive(Debug, Clone)]
pub struct IterationConfig<T> {
    /// Stop once the largest absolute component-wise change between
    /// consecutive iterates falls below this threshold.
    pub accuracy: T,
    /// Hard ceiling on the number of iterates produced, so a slowly
    /// converging system cannot loop unbounded.
    pub max_iterations: usize,
    /// Log progress every N iterations (0 = no output).
    pub print_interval: usize,
}

impl Default for IterationConfig<f64> {
    fn default() -> Self {
        Self {
            accuracy: 1e-3,
            max_iterations: 1000,
            print_interval: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scheme {
    Jacobi,
    GaussSeidel,
}

impl Scheme {
    fn label(self) -> &'static str {
        match self {
            Scheme::Jacobi => "jacobi",
            Scheme::GaussSeidel => "gaussSeidel",
        }
    }
}

/// Derive the iteration matrix `A'` and iteration vector `b'` from the
/// coefficient matrix and constants, checking the row-sum convergence
/// precondition in between (a zero diagonal entry poisons its row sum and
/// is rejected by the same check).
pub(crate) fn derive_iteration<T: RealField>(
    a: &Matrix<T>,
    b: &Array1<T>,
) -> Result<(Array2<T>, Array1<T>), Error> {
    let n = a.nrows();
    let mut iteration_matrix = Array2::zeros((n, n));
    for i in 0..n {
        let diagonal = a.get(i, i);
        for j in 0..n {
            if i != j {
                iteration_matrix[[i, j]] = -(a.get(i, j) / diagonal);
            }
        }
    }

    for i in 0..n {
        let row_sum = iteration_matrix
            .row(i)
            .iter()
            .fold(T::zero(), |acc, &v| acc + v.abs());
        if !(row_sum < T::one()) {
            return Err(Error::DivergenceRisk {
                row: i,
                row_sum: row_sum.to_f64().unwrap_or(f64::NAN),
            });
        }
    }

    let mut iteration_constants = Array1::zeros(n);
    for i in 0..n {
        iteration_constants[i] = b[i] / a.get(i, i);
    }
    Ok((iteration_matrix, iteration_constants))
}

/// Lazy, forward-only sequence of successive approximations.
///
/// Each `next()` call computes one new iterate and yields it; the sequence
/// ends after the first iterate whose maximum component-wise delta from its
/// predecessor is below the configured accuracy, or once the iteration
/// ceiling is reached. Dropping the iterator needs no cleanup, and a fresh
/// call to [`crate::LinearSystem::solve_iteratively`] restarts from `x_0`.
#[derive(Debug)]
pub struct Iterates<'a, T: RealField> {
    scheme: Scheme,
    iteration_matrix: Array2<T>,
    iteration_constants: Array1<T>,
    names: &'a [String],
    current: Array1<T>,
    accuracy: T,
    max_iterations: usize,
    print_interval: usize,
    iteration: usize,
    finished: bool,
}

impl<'a, T: RealField> Iterates<'a, T> {
    pub(crate) fn new(
        scheme: Scheme,
        iteration_matrix: Array2<T>,
        iteration_constants: Array1<T>,
        names: &'a [String],
        config: &IterationConfig<T>,
    ) -> Self {
        let current = iteration_constants.clone();
        Self {
            scheme,
            iteration_matrix,
            iteration_constants,
            names,
            current,
            accuracy: config.accuracy,
            max_iterations: config.max_iterations,
            print_interval: config.print_interval,
            iteration: 0,
            finished: false,
        }
    }

    /// Number of iterates produced so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }
}

impl<T: RealField> Iterator for Iterates<'_, T> {
    type Item = Solution<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.iteration >= self.max_iterations {
            return None;
        }

        let next = match self.scheme {
            Scheme::Jacobi => jacobi::step(
                &self.iteration_matrix,
                &self.iteration_constants,
                &self.current,
            ),
            Scheme::GaussSeidel => gauss_seidel::step(
                &self.iteration_matrix,
                &self.iteration_constants,
                &self.current,
            ),
        };

        let delta = next
            .iter()
            .zip(self.current.iter())
            .map(|(&a, &b)| (a - b).abs())
            .fold(T::zero(), T::max);

        self.iteration += 1;
        if self.print_interval > 0 && self.iteration % self.print_interval == 0 {
            log::info!(
                "{} iteration {}: max delta = {:.6e}",
                self.scheme.label(),
                self.iteration,
                delta.to_f64().unwrap_or(f64::NAN)
            );
        }

        // The terminal iterate is still yielded; the sequence ends after it.
        if delta < self.accuracy {
            self.finished = true;
        }
        self.current = next.clone();
        Some(Solution::new(self.names.to_vec(), next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn well_conditioned() -> (Matrix<f64>, Array1<f64>) {
        (
            Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, -2.0]]).unwrap(),
            array![3.0, 1.0],
        )
    }

    #[test]
    fn derives_the_iteration_matrices() {
        let (a, b) = well_conditioned();
        let (iteration_matrix, iteration_constants) = derive_iteration(&a, &b).unwrap();
        assert_eq!(iteration_matrix, array![[0.0, -0.5], [0.5, 0.0]]);
        assert_eq!(iteration_constants, array![1.5, -0.5]);
    }

    #[test]
    fn refuses_when_a_row_sum_reaches_one() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 1.0]]).unwrap();
        let b = array![1.0, 1.0];
        match derive_iteration(&a, &b) {
            Err(Error::DivergenceRisk { row, row_sum }) => {
                assert_eq!(row, 0);
                assert_eq!(row_sum, 2.0);
            }
            other => panic!("expected DivergenceRisk, got {other:?}"),
        }
    }

    #[test]
    fn zero_diagonal_fails_the_row_sum_test() {
        let a = Matrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 2.0]]).unwrap();
        let b = array![1.0, 1.0];
        assert!(matches!(
            derive_iteration(&a, &b),
            Err(Error::DivergenceRisk { row: 0, .. })
        ));
    }

    #[test]
    fn the_iteration_ceiling_ends_the_sequence() {
        let (a, b) = well_conditioned();
        let (iteration_matrix, iteration_constants) = derive_iteration(&a, &b).unwrap();
        let names = vec!["x".to_string(), "y".to_string()];
        let config = IterationConfig {
            accuracy: 0.0, // delta < 0.0 never holds
            max_iterations: 5,
            print_interval: 0,
        };
        let iterates = Iterates::new(
            Scheme::Jacobi,
            iteration_matrix,
            iteration_constants,
            &names,
            &config,
        );
        assert_eq!(iterates.count(), 5);
    }
}
