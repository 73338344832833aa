//! Direct and iterative solvers for small dense linear systems
//!
//! This crate pairs a general-purpose matrix-algebra type with a solver
//! engine for systems of up to roughly ten equations:
//!
//! - **Direct methods**: Cramer's rule, the inverse-matrix method, Gaussian
//!   elimination with partial pivoting, Doolittle LU decomposition
//! - **Iterative methods**: Jacobi and Gauss-Seidel fixed-point iteration,
//!   exposed as lazy sequences of successive approximations
//! - **Matrix algebra**: determinant by cofactor expansion, inverse via the
//!   adjugate, transpose, structural edits, variadic sums and products
//!
//! Everything is generic over [`RealField`] (`f32` or `f64`), deterministic,
//! and single-threaded; solve calls never mutate the system they run on.
//!
//! # Example
//!
//! ```
//! use linsolve::{IterationConfig, LinearSystem, Matrix, Method};
//! use ndarray::array;
//!
//! # fn main() -> Result<(), linsolve::Error> {
//! let system = LinearSystem::new(
//!     Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, -2.0]])?,
//!     array![3.0, 1.0],
//!     vec!["x".to_string(), "y".to_string()],
//! )?;
//!
//! let solution = system.solve(Method::Cramer)?;
//! assert_eq!(solution.get("x"), Some(1.4));
//!
//! let last = system
//!     .solve_iteratively(Method::GaussSeidel, &IterationConfig::default())?
//!     .last()
//!     .unwrap();
//! assert!((last.get("x").unwrap() - 1.4).abs() < 1e-3);
//! # Ok(())
//! # }
//! ```

pub mod direct;
pub mod error;
pub mod iterative;
pub mod matrix;
pub mod system;
pub mod traits;
pub mod workspace;

pub use error::Error;
pub use matrix::{Factor, Matrix};
pub use system::{LinearSystem, Method, Solution};
pub use traits::RealField;
pub use workspace::EliminationWorkspace;

pub use direct::{cramer_solve, gaussian_solve, inverse_solve, lu_decompose, lu_solve};
pub use iterative::{IterationConfig, Iterates};
