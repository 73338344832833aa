//! Scalar abstraction for the solver library
//!
//! Everything in this crate is generic over [`RealField`], a bound alias for
//! real floating-point scalars. The solvers target small dense real-valued
//! systems, so only `f32` and `f64` are provided.

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::Debug;

/// Trait for real scalar types usable in matrix and solver operations.
///
/// This is a bound alias over the `num-traits` hierarchy: any type that is a
/// floating-point number with assignment operators and primitive conversions
/// qualifies. Conversions to `f64` are used only for diagnostics (log output
/// and error payloads), never for arithmetic.
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Debug + Send + Sync + 'static
{
}

impl RealField for f64 {}
impl RealField for f32 {}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_delta<T: RealField>(a: &[T], b: &[T]) -> T {
        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| (x - y).abs())
            .fold(T::zero(), T::max)
    }

    #[test]
    fn generic_code_works_for_both_widths() {
        assert_eq!(max_delta(&[1.0_f64, 2.0], &[1.5, 1.0]), 1.0);
        assert_eq!(max_delta(&[1.0_f32, 2.0], &[1.5, 1.0]), 1.0);
    }
}
