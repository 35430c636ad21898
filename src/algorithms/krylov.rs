//! Krylov basis generation on top of the orthogonalization kernels.
//!
//! [`krylov_basis`] is the basis-extension loop an Arnoldi-type eigensolver runs: every
//! step applies the operator to the newest basis vector, appends the result as a new
//! column, and calls [`crate::solvers::orthogonalize`] with all previous columns kept as
//! the fixed frame. Only the basis is produced; the projected (Hessenberg) matrix and
//! anything built on it belong to the eigensolver.
//!
//! The driver is how the experiment binaries compare the loss of orthogonality of the
//! different [`Method`]s on realistic input: Krylov vectors quickly become nearly
//! parallel, which is exactly where classical Gram-Schmidt degrades.

use super::treat_first_col;
use crate::{
    error::{OrthogonalizationError, OrthogonalizationErrorKind},
    matrix::LinearOperator,
    solvers::{Method, orthogonalize},
    type_traits::TypeTraits,
};
use faer::{
    prelude::*,
    traits::{ComplexField, RealField},
};

/// Relative residual below which the new Krylov vector is considered to lie in the span of
/// the current basis, as a multiple of the machine epsilon.
const BREAKDOWN_FACTOR: f64 = 1e3;

/// Returns the threshold on `||w - V V^H w|| / ||w||` below which [`krylov_basis`] stops.
pub fn breakdown_tolerance<R>() -> R
where
    R: RealField + TypeTraits,
{
    R::from_f64_impl(BREAKDOWN_FACTOR) * <R as TypeTraits>::epsilon()
}

/// The output of [`krylov_basis`].
#[derive(Debug, Clone)]
pub struct KrylovOutput<T> {
    /// The `n x steps_taken` basis.
    pub basis: Mat<T>,
    /// The number of basis vectors generated. Smaller than the requested dimension when
    /// the Krylov subspace became invariant.
    pub steps_taken: usize,
}

/// Generates a basis of the Krylov subspace `K_k(A, b) = span{b, Ab, ..., A^(k-1) b}`.
///
/// Column 0 is `b / ||b||`. For every step `j >= 1`, `A v_(j-1)` is written into column `j`
/// and `orthogonalize(basis[:, 0..=j], j, method)` is called. Before that, the residual of
/// the new vector against the current basis is measured; if it is below
/// [`breakdown_tolerance`] relative to the vector's norm, the subspace is invariant and the
/// generation stops early.
///
/// # Arguments
/// * `operator`: A square linear operator `A`.
/// * `b`: The starting vector, an `n x 1` matrix. Must not be a zero vector.
/// * `k`: The requested dimension of the basis, `1 <= k <= n`.
/// * `method`: The orthogonalization strategy used at every extension step.
///   [`Method::HouseholderQr`] is rejected: applied to the one-column new block it would
///   only normalize it without projecting out the existing basis.
///
/// # Errors
/// Returns an [`OrthogonalizationError`] for a non-square operator, a start vector whose
/// shape does not match the operator, a zero start vector, `k` outside `[1, n]`, or
/// [`Method::HouseholderQr`].
pub fn krylov_basis<T, O>(
    operator: &O,
    b: MatRef<'_, T>,
    k: usize,
    method: Method,
) -> Result<KrylovOutput<T>, OrthogonalizationError>
where
    T: ComplexField,
    T::Real: RealField + TypeTraits,
    O: LinearOperator<T> + ?Sized,
{
    let n = operator.nrows();
    if !operator.is_square() {
        return Err(OrthogonalizationErrorKind::InputError(format!(
            "The operator must be square, got {}x{}.",
            n,
            operator.ncols()
        ))
        .into());
    }
    if b.nrows() != operator.ncols() || b.ncols() != 1 {
        return Err(OrthogonalizationErrorKind::DimensionMismatch {
            operator_cols: operator.ncols(),
            vector_rows: b.nrows(),
        }
        .into());
    }
    if k == 0 || k > n {
        return Err(OrthogonalizationErrorKind::InputError(format!(
            "The basis dimension k must be in [1, {n}], got {k}."
        ))
        .into());
    }
    if method == Method::HouseholderQr {
        return Err(OrthogonalizationErrorKind::InputError(
            "Householder QR of a single new column does not orthogonalize it against the basis."
                .to_string(),
        )
        .into());
    }

    let floor = <T::Real as TypeTraits>::min_positive();
    if !(b.norm_l2() > floor) {
        return Err(OrthogonalizationErrorKind::InputError(
            "The initial vector `b` must not be a zero vector.".to_string(),
        )
        .into());
    }

    let mut basis = Mat::<T>::zeros(n, k);
    basis.as_mut().get_mut(.., 0..1).copy_from(b);
    treat_first_col(basis.as_mut().get_mut(.., 0..1), 0);

    let tolerance = breakdown_tolerance::<T::Real>();
    let mut steps_taken = 1;

    for j in 1..k {
        let w = operator.apply(basis.as_ref().get(.., j - 1..j));

        // Residual of `w` against the current basis, to detect an invariant subspace.
        let prefix = basis.as_ref().get(.., 0..j);
        let coeffs = prefix.adjoint() * w.as_ref();
        let projection = prefix * coeffs.as_ref();
        let residual_norm = (w.as_ref() - projection.as_ref()).norm_l2();
        let w_norm = w.norm_l2();

        if !(w_norm > floor) || residual_norm <= tolerance * w_norm {
            log::debug!(
                "Krylov breakdown at step {j}: the subspace is invariant (method {method})."
            );
            break;
        }

        basis.as_mut().get_mut(.., j..j + 1).copy_from(w.as_ref());
        orthogonalize(basis.as_mut().get_mut(.., 0..j + 1), j, method);
        steps_taken += 1;
    }

    // If the generation stopped early, only the first `steps_taken` columns are valid.
    let basis = if steps_taken == k {
        basis
    } else {
        basis.as_ref().get(.., 0..steps_taken).to_owned()
    };

    Ok(KrylovOutput { basis, steps_taken })
}
