//! Orthogonalization of a whole block through a Householder QR factorization.
//!
//! This is the most robust variant: the columns of the Householder `Q` factor are
//! orthonormal to machine precision regardless of how ill-conditioned the input block is.
//! It is also the most expensive, and it has no notion of a fixed prefix. Callers pass
//! exactly the sub-block to orthogonalize, typically a column-range view such as
//! `mat.get_mut(.., l..m)`.

use crate::error::{OrthogonalizationError, OrthogonalizationErrorKind};
use faer::{
    prelude::*,
    traits::{ComplexField, RealField},
};

/// Checks that a block of shape `nrows x ncols` can be orthogonalized by [`householder_qr`].
pub fn check_qr_shape(nrows: usize, ncols: usize) -> Result<(), OrthogonalizationError> {
    if ncols <= nrows {
        Ok(())
    } else {
        Err(OrthogonalizationErrorKind::TooManyColumns { nrows, ncols }.into())
    }
}

/// Replaces the `n x m'` block `mat` by the thin `Q` factor of its Householder QR
/// factorization, i.e. the first `m'` columns of `Q`.
///
/// The result spans the same column space as the input (for a full-rank input) and needs
/// no separate normalization. The factorization and the explicit `Q` are temporaries
/// released on return.
///
/// # Panics
///
/// Panics if `mat.ncols() > mat.nrows()`.
pub fn householder_qr<T: ComplexField>(mut mat: MatMut<'_, T>)
where
    T::Real: RealField,
{
    if let Err(e) = check_qr_shape(mat.nrows(), mat.ncols()) {
        panic!("{e}");
    }
    if mat.ncols() == 0 {
        return;
    }

    let q = mat.rb().qr().compute_thin_Q();
    mat.copy_from(q.as_ref());
}
