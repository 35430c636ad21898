//! Measures of orthogonality for dense bases.
//!
//! All measures are Frobenius norms, so they are zero for an exact result and grow with
//! the accumulated round-off. [`default_tolerance`] is the bound a single orthogonalization
//! of vectors of length `n` is expected to meet; [`is_orthonormal`] compares a basis
//! against it. The Krylov driver uses its own threshold,
//! [`crate::algorithms::krylov::breakdown_tolerance`].

use crate::type_traits::TypeTraits;
use faer::{
    prelude::*,
    traits::{ComplexField, RealField},
};

/// Multiple of `epsilon * sqrt(n)` accepted as numerically zero by [`default_tolerance`].
pub const TOLERANCE_FACTOR: f64 = 10.0;

/// Returns `TOLERANCE_FACTOR * epsilon * sqrt(n)`, the round-off expected from one
/// orthogonalization of vectors of length `n`.
pub fn default_tolerance<R>(n: usize) -> R
where
    R: RealField + TypeTraits,
{
    R::from_f64_impl(TOLERANCE_FACTOR * (n.max(1) as f64).sqrt()) * <R as TypeTraits>::epsilon()
}

/// Loss of orthogonality `||I - V^H V||_F` of the columns of `v`.
pub fn orthogonality_loss<T: ComplexField>(v: MatRef<'_, T>) -> T::Real
where
    T::Real: RealField,
{
    let k = v.ncols();
    let identity = Mat::<T>::identity(k, k);
    let gram = v.adjoint() * v;
    (identity.as_ref() - gram.as_ref()).norm_l2()
}

/// Returns `true` if the columns of `v` are orthonormal up to `tolerance`, as measured by
/// [`orthogonality_loss`].
pub fn is_orthonormal<T: ComplexField>(v: MatRef<'_, T>, tolerance: T::Real) -> bool
where
    T::Real: RealField,
{
    orthogonality_loss(v) <= tolerance
}

/// Orthogonality `||V[:, 0..l]^H V[:, l..]||_F` between the first `l` columns of `v` and the
/// remaining ones. The columns within each group are not compared with each other.
///
/// # Panics
///
/// Panics if `l > v.ncols()`.
pub fn cross_orthogonality<T: ComplexField>(v: MatRef<'_, T>, l: usize) -> T::Real
where
    T::Real: RealField,
{
    let (left, right) = v.split_at_col(l);
    let cross = left.adjoint() * right;
    cross.norm_l2()
}

/// Relative residual `||A - Q Q^H A||_F / ||A||_F` of projecting the columns of `a` onto
/// the span of the orthonormal columns of `q`. Zero when `span(A)` is contained in
/// `span(Q)`.
///
/// A zero `a` is measured against [`TypeTraits::min_positive`] instead of its own norm.
pub fn column_space_residual<T: ComplexField>(q: MatRef<'_, T>, a: MatRef<'_, T>) -> T::Real
where
    T::Real: RealField + TypeTraits,
{
    let coeffs = q.adjoint() * a;
    let projection = q * coeffs.as_ref();
    let residual = (a - projection.as_ref()).norm_l2();

    let a_norm = a.norm_l2();
    let floor = <T::Real as TypeTraits>::min_positive();
    residual / if a_norm > floor { a_norm } else { floor }
}

/// Frobenius distance between the first `l` columns of `before` and `after`.
///
/// Orthogonalization routines that keep a fixed prefix are expected to report exactly zero.
///
/// # Panics
///
/// Panics if either matrix has fewer than `l` columns, or if their row counts differ.
pub fn prefix_drift<T: ComplexField>(before: MatRef<'_, T>, after: MatRef<'_, T>, l: usize) -> T::Real
where
    T::Real: RealField,
{
    (before.get(.., 0..l) - after.get(.., 0..l)).norm_l2()
}
