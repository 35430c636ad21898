//! Orthogonalization kernels and the Krylov basis driver built on them.
//!
//! ** NOTE: We recommend using the high-level dispatch [`crate::solvers::orthogonalize`]
//! instead. The kernels are public for callers that need a specific variant without
//! going through [`crate::Method`].
//!
//! Every kernel works in place on a [`faer::MatMut`] view. Columns `[0, left_cols_to_skip)`
//! are a fixed frame that is assumed to be orthonormal already; the remaining columns are
//! the ones being orthogonalized. The modules are:
//!
//! - [`gram_schmidt`]: classical, modified and twice-is-enough Gram-Schmidt.
//! - [`householder`]: orthogonalization of a whole block through a Householder QR.
//! - [`partial`]: projection of a new block against the fixed frame, and the JensWehner
//!   composite that follows it with a QR of the new block.
//! - [`krylov`]: a driver that grows a Krylov basis one column at a time.

pub mod gram_schmidt;
pub mod householder;
pub mod krylov;
pub mod partial;

use crate::error::{OrthogonalizationError, OrthogonalizationErrorKind};
use faer::{
    prelude::*,
    traits::{ComplexField, RealField},
};

/// Checks that `left_cols_to_skip` leaves at least one column to orthogonalize.
pub fn check_left_cols_to_skip(
    ncols: usize,
    left_cols_to_skip: usize,
) -> Result<(), OrthogonalizationError> {
    if left_cols_to_skip < ncols {
        Ok(())
    } else {
        Err(OrthogonalizationErrorKind::SkipOutOfRange {
            left_cols_to_skip,
            ncols,
        }
        .into())
    }
}

/// Panics unless `left_cols_to_skip < ncols`.
///
/// An out-of-range skip count is a bug in the calling code, not a data-dependent failure,
/// so the kernels do not return it as an error. A negative count cannot be expressed
/// because the count is a `usize`.
///
/// # Panics
///
/// Panics with the message of [`OrthogonalizationErrorKind::SkipOutOfRange`].
#[inline]
#[track_caller]
pub fn assert_left_cols_to_skip(ncols: usize, left_cols_to_skip: usize) {
    if let Err(e) = check_left_cols_to_skip(ncols, left_cols_to_skip) {
        panic!("{e}");
    }
}

/// Bootstraps the Gram-Schmidt recurrences.
///
/// If nothing is skipped, column 0 is normalized in place and treated as the fixed
/// frame for the rest of the call, so the returned skip count is `1`. Otherwise the
/// count is returned unchanged.
pub fn treat_first_col<T: ComplexField>(mat: MatMut<'_, T>, left_cols_to_skip: usize) -> usize
where
    T::Real: RealField,
{
    if left_cols_to_skip == 0 {
        normalize_col(mat.col_mut(0));
        1
    } else {
        left_cols_to_skip
    }
}

/// Scales a column to unit Euclidean norm. A column of norm exactly zero is left as is.
#[inline]
pub(crate) fn normalize_col<T: ComplexField>(mut col: ColMut<'_, T>)
where
    T::Real: RealField,
{
    let norm = col.rb().norm_l2();
    if norm > T::Real::zero_impl() {
        col *= Scale(T::from_real_impl(&T::Real::recip_impl(&norm)));
    }
}

/// The `alpha` used to subtract a product in [`faer::linalg::matmul::matmul`].
#[inline]
pub(crate) fn minus_one<T: ComplexField>() -> T {
    T::from_f64_impl(-1.0)
}
