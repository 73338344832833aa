//! Direct solvers for dense linear systems
//!
//! Four deterministic, non-iterative methods:
//! - [`cramer_solve`]: Cramer's rule, one determinant ratio per variable
//! - [`inverse_solve`]: multiplication by the inverse coefficient matrix
//! - [`gaussian_solve`]: partial-pivoting elimination with back substitution
//! - [`lu_solve`]: Doolittle LU decomposition with two substitution passes

mod cramer;
mod gaussian;
mod inverse;
mod lu;

pub use cramer::cramer_solve;
pub use gaussian::gaussian_solve;
pub use inverse::inverse_solve;
pub use lu::{lu_decompose, lu_solve};
