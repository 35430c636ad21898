//! Per-type numeric limits for real scalar types.
//!
//! Iterative solvers built on top of the orthogonalization kernels need two constants
//! for every real type they work in: the machine epsilon, and the smallest positive
//! value that can safely be divided by. [`faer`]'s own traits expose the epsilon, but the
//! "safe minimum" has to be defined for user-provided scalar types too. For those, the
//! default implementation of [`TypeTraits::min_positive`] falls back to `epsilon()^3`.
//! The built-in floating point types override it with their exact IEEE minimum normal
//! value.
//!
//! The orthogonalization routines do not consult these constants. They are used by the
//! diagnostics in [`crate::utils::diagnostics`] and by the Krylov basis driver.

use core::ops::{Div, Mul};
use faer::traits::ComplexField;

/// Numeric limits of a real scalar type.
pub trait TypeTraits: Copy + PartialOrd + Mul<Output = Self> + Div<Output = Self> {
    /// The difference between `1` and the next representable value.
    fn epsilon() -> Self;

    /// The smallest positive value considered safe to divide by.
    ///
    /// The default is `epsilon()^3`, a heuristic stand-in for scalar types that do not
    /// advertise a minimum normal value. It carries no error bound of its own.
    fn min_positive() -> Self {
        let eps = Self::epsilon();
        eps * eps * eps
    }
}

impl TypeTraits for f32 {
    #[inline]
    fn epsilon() -> Self {
        f32::EPSILON
    }

    #[inline]
    fn min_positive() -> Self {
        f32::MIN_POSITIVE
    }
}

impl TypeTraits for f64 {
    #[inline]
    fn epsilon() -> Self {
        f64::EPSILON
    }

    #[inline]
    fn min_positive() -> Self {
        f64::MIN_POSITIVE
    }
}

/// The real element type of a scalar: `ElemType<f64> = f64`, `ElemType<c64> = f64`.
pub type ElemType<T> = <T as ComplexField>::Real;
