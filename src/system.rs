//! Linear system of equations
//!
//! [`LinearSystem`] owns an n x n coefficient matrix, a length-n constant
//! vector, and n ordered unique variable names, all produced by an external
//! front end (an equation parser, a CLI); this crate never parses strings.
//! The augmented matrix is derived once at construction. Solve calls are
//! read-only: direct methods clone into an elimination workspace, iterative
//! methods derive fresh iteration matrices per call.

use crate::direct::{cramer_solve, gaussian_solve, inverse_solve, lu_solve};
use crate::error::Error;
use crate::iterative::{derive_iteration, IterationConfig, Iterates, Scheme};
use crate::matrix::Matrix;
use crate::traits::RealField;
use ndarray::Array1;
use std::fmt;
use std::str::FromStr;

/// Method tag accepted by [`LinearSystem::solve`] and
/// [`LinearSystem::solve_iteratively`].
///
/// The external tag spellings (`cramer`, `matrix`, `gaussianElimination`,
/// `luDecomposition`, `jacobi`, `gaussSeidel`) round-trip through
/// [`FromStr`] and [`fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Cramer,
    Matrix,
    GaussianElimination,
    LuDecomposition,
    Jacobi,
    GaussSeidel,
}

impl Method {
    /// The external tag spelling.
    pub fn tag(self) -> &'static str {
        match self {
            Method::Cramer => "cramer",
            Method::Matrix => "matrix",
            Method::GaussianElimination => "gaussianElimination",
            Method::LuDecomposition => "luDecomposition",
            Method::Jacobi => "jacobi",
            Method::GaussSeidel => "gaussSeidel",
        }
    }

    pub fn is_direct(self) -> bool {
        !self.is_iterative()
    }

    pub fn is_iterative(self) -> bool {
        matches!(self, Method::Jacobi | Method::GaussSeidel)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "cramer" => Ok(Method::Cramer),
            "matrix" => Ok(Method::Matrix),
            "gaussianElimination" => Ok(Method::GaussianElimination),
            "luDecomposition" => Ok(Method::LuDecomposition),
            "jacobi" => Ok(Method::Jacobi),
            "gaussSeidel" => Ok(Method::GaussSeidel),
            other => Err(Error::UnknownMethod(other.to_string())),
        }
    }
}

/// A variable -> value mapping, one entry per variable, stored in declared
/// variable order.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T: RealField> {
    names: Vec<String>,
    values: Array1<T>,
}

impl<T: RealField> Solution<T> {
    pub(crate) fn new(names: Vec<String>, values: Array1<T>) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Self { names, values }
    }

    /// Value of the named variable, if present.
    pub fn get(&self, name: &str) -> Option<T> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    /// Variable names in declared order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Values in declared variable order.
    pub fn values(&self) -> &Array1<T> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(name, value)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// A small dense system of linear equations.
#[derive(Debug, Clone)]
pub struct LinearSystem<T: RealField> {
    coefficients: Matrix<T>,
    constants: Array1<T>,
    variables: Vec<String>,
    augmented: Matrix<T>,
}

impl<T: RealField> LinearSystem<T> {
    /// Build a system from already-parsed numeric input.
    ///
    /// Requires a square coefficient matrix whose row count matches both the
    /// constant vector length and the number of variable names, and unique
    /// names.
    pub fn new(
        coefficients: Matrix<T>,
        constants: Array1<T>,
        variables: Vec<String>,
    ) -> Result<Self, Error> {
        if !coefficients.is_square() {
            return Err(Error::NonSquareMatrix {
                rows: coefficients.nrows(),
                cols: coefficients.ncols(),
            });
        }
        let n = coefficients.nrows();
        if constants.len() != n {
            return Err(Error::DimensionMismatch {
                left_rows: n,
                left_cols: n,
                right_rows: constants.len(),
                right_cols: 1,
            });
        }
        if variables.len() != n {
            return Err(Error::InvalidShape(format!(
                "{} variable names for {n} equations",
                variables.len()
            )));
        }
        for (i, name) in variables.iter().enumerate() {
            if variables[..i].contains(name) {
                return Err(Error::InvalidShape(format!(
                    "duplicate variable name `{name}`"
                )));
            }
        }
        let augmented = coefficients.push_col(&constants)?;
        Ok(Self {
            coefficients,
            constants,
            variables,
            augmented,
        })
    }

    pub fn coefficients(&self) -> &Matrix<T> {
        &self.coefficients
    }

    pub fn constants(&self) -> &Array1<T> {
        &self.constants
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// The coefficient matrix with the constants appended as last column.
    pub fn augmented(&self) -> &Matrix<T> {
        &self.augmented
    }

    /// Number of equations (and variables).
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Solve with a direct method.
    ///
    /// Passing an iterative tag fails with [`Error::UnknownMethod`]; use
    /// [`LinearSystem::solve_iteratively`] for those.
    pub fn solve(&self, method: Method) -> Result<Solution<T>, Error> {
        let x = match method {
            Method::Cramer => cramer_solve(&self.coefficients, &self.constants)?,
            Method::Matrix => inverse_solve(&self.coefficients, &self.constants)?,
            Method::GaussianElimination => gaussian_solve(&self.coefficients, &self.constants)?,
            Method::LuDecomposition => lu_solve(&self.coefficients, &self.constants)?,
            Method::Jacobi | Method::GaussSeidel => {
                return Err(Error::UnknownMethod(format!(
                    "{method} is not a direct method"
                )));
            }
        };
        Ok(Solution::new(self.variables.clone(), x))
    }

    /// Solve with an iterative method, yielding every approximation lazily.
    ///
    /// Fails up front with [`Error::DivergenceRisk`] when the row-sum
    /// convergence precondition does not hold, and with
    /// [`Error::UnknownMethod`] for direct tags.
    pub fn solve_iteratively(
        &self,
        method: Method,
        config: &IterationConfig<T>,
    ) -> Result<Iterates<'_, T>, Error> {
        let scheme = match method {
            Method::Jacobi => Scheme::Jacobi,
            Method::GaussSeidel => Scheme::GaussSeidel,
            _ => {
                return Err(Error::UnknownMethod(format!(
                    "{method} is not an iterative method"
                )));
            }
        };
        let (iteration_matrix, iteration_constants) =
            derive_iteration(&self.coefficients, &self.constants)?;
        Ok(Iterates::new(
            scheme,
            iteration_matrix,
            iteration_constants,
            &self.variables,
            config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn two_by_two() -> LinearSystem<f64> {
        LinearSystem::new(
            Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, -2.0]]).unwrap(),
            array![3.0, 1.0],
            names(&["x", "y"]),
        )
        .unwrap()
    }

    #[test]
    fn construction_validates_shapes_and_names() {
        let square = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();

        let rect = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert!(matches!(
            LinearSystem::new(rect, array![1.0, 2.0], names(&["x", "y"])),
            Err(Error::NonSquareMatrix { .. })
        ));

        assert!(matches!(
            LinearSystem::new(square.clone(), array![1.0], names(&["x", "y"])),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(matches!(
            LinearSystem::new(square.clone(), array![1.0, 2.0], names(&["x"])),
            Err(Error::InvalidShape(_))
        ));
        assert!(matches!(
            LinearSystem::new(square, array![1.0, 2.0], names(&["x", "x"])),
            Err(Error::InvalidShape(_))
        ));
    }

    #[test]
    fn the_augmented_matrix_is_derived_at_construction() {
        let system = two_by_two();
        assert_eq!(system.augmented().shape(), (2, 3));
        assert_eq!(system.augmented().col(2), array![3.0, 1.0]);
        assert_eq!(system.len(), 2);
    }

    #[test]
    fn method_tags_round_trip() {
        for method in [
            Method::Cramer,
            Method::Matrix,
            Method::GaussianElimination,
            Method::LuDecomposition,
            Method::Jacobi,
            Method::GaussSeidel,
        ] {
            assert_eq!(method.tag().parse::<Method>().unwrap(), method);
        }
        assert_eq!(
            "gauss-seidel".parse::<Method>(),
            Err(Error::UnknownMethod("gauss-seidel".to_string()))
        );
        assert!(Method::Cramer.is_direct());
        assert!(Method::GaussSeidel.is_iterative());
    }

    #[test]
    fn direct_and_iterative_tags_are_not_interchangeable() {
        let system = two_by_two();
        assert!(matches!(
            system.solve(Method::Jacobi),
            Err(Error::UnknownMethod(_))
        ));
        assert!(matches!(
            system.solve_iteratively(Method::Cramer, &IterationConfig::default()),
            Err(Error::UnknownMethod(_))
        ));
    }

    #[test]
    fn solutions_map_names_to_values() {
        let solution = two_by_two().solve(Method::Cramer).unwrap();
        assert_eq!(solution.len(), 2);
        assert_eq!(solution.get("x"), Some(1.4));
        assert_eq!(solution.get("y"), Some(0.2));
        assert_eq!(solution.get("z"), None);
        let pairs: Vec<_> = solution.iter().collect();
        assert_eq!(pairs[0].0, "x");
        assert_eq!(pairs[1].0, "y");
    }

    #[test]
    fn solve_calls_never_mutate_the_system() {
        let system = two_by_two();
        let before = system.coefficients().clone();
        system.solve(Method::GaussianElimination).unwrap();
        system.solve(Method::LuDecomposition).unwrap();
        system
            .solve_iteratively(Method::Jacobi, &IterationConfig::default())
            .unwrap()
            .for_each(drop);
        assert_eq!(system.coefficients(), &before);
        assert_eq!(system.constants(), &array![3.0, 1.0]);
    }
}
