//! This module provides the high-level entry point of the crate: a single
//! `orthogonalize(matrix, left_cols_to_skip, method)` contract that dispatches to the
//! kernels in [`crate::algorithms`].

use crate::{
    algorithms::{
        assert_left_cols_to_skip, check_left_cols_to_skip,
        gram_schmidt::{gram_schmidt, modified_gram_schmidt, twice_is_enough},
        householder::{check_qr_shape, householder_qr},
        partial::{jens_wehner, partial_orthogonalization},
    },
    error::{OrthogonalizationError, OrthogonalizationErrorKind},
};
use faer::{
    prelude::*,
    traits::{ComplexField, RealField},
};
use std::{fmt, str::FromStr};

/// Selects the orthogonalization strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Classical Gram-Schmidt: batched projection against the previous columns.
    Classical,
    /// Modified Gram-Schmidt: sequential projection of the running column.
    Modified,
    /// Classical Gram-Schmidt applied twice.
    TwiceIsEnough,
    /// Householder QR of the columns being orthogonalized.
    HouseholderQr,
    /// Projection of the new columns against the fixed prefix only.
    Partial,
    /// Partial orthogonalization followed by a QR of the new columns.
    JensWehner,
}

impl Method {
    /// Every method, in declaration order.
    pub const ALL: [Method; 6] = [
        Method::Classical,
        Method::Modified,
        Method::TwiceIsEnough,
        Method::HouseholderQr,
        Method::Partial,
        Method::JensWehner,
    ];

    /// The kebab-case name used by [`Display`](fmt::Display) and [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Method::Classical => "classical",
            Method::Modified => "modified",
            Method::TwiceIsEnough => "twice-is-enough",
            Method::HouseholderQr => "householder-qr",
            Method::Partial => "partial",
            Method::JensWehner => "jens-wehner",
        }
    }

    /// Returns `true` if the method leaves every processed column orthogonal to every
    /// other processed column, and not only to the fixed prefix.
    pub fn orthonormalizes_block(self) -> bool {
        !matches!(self, Method::Partial)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = OrthogonalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| OrthogonalizationErrorKind::UnknownMethod(s.to_string()).into())
    }
}

/// Orthogonalizes the columns `[left_cols_to_skip, ncols)` of `mat` in place with the
/// selected `method`.
///
/// Columns `[0, left_cols_to_skip)` are a fixed frame, assumed orthonormal. What holds on
/// return depends on the method:
///
/// * [`Method::Classical`], [`Method::Modified`], [`Method::TwiceIsEnough`]: all columns
///   are orthonormal. With `left_cols_to_skip == 0` the first column is normalized first.
/// * [`Method::HouseholderQr`]: the columns `[left_cols_to_skip, ncols)` are replaced by the
///   thin `Q` factor of their QR factorization. They are not projected against the frame.
/// * [`Method::Partial`]: the new columns are orthogonal to the frame and unit-norm, but not
///   necessarily orthogonal to each other. A no-op when `left_cols_to_skip == 0`.
/// * [`Method::JensWehner`]: the new columns are orthonormal and orthogonal to the frame.
///
/// # Panics
///
/// Panics if `left_cols_to_skip >= mat.ncols()`. For [`Method::HouseholderQr`] and
/// [`Method::JensWehner`], also panics if the new block has more columns than rows.
/// See [`try_orthogonalize`] for a non-panicking variant.
pub fn orthogonalize<T: ComplexField>(mat: MatMut<'_, T>, left_cols_to_skip: usize, method: Method)
where
    T::Real: RealField,
{
    log::trace!(
        "orthogonalize: method={method}, shape={}x{}, left_cols_to_skip={left_cols_to_skip}",
        mat.nrows(),
        mat.ncols()
    );

    match method {
        Method::Classical => gram_schmidt(mat, left_cols_to_skip),
        Method::Modified => modified_gram_schmidt(mat, left_cols_to_skip),
        Method::TwiceIsEnough => twice_is_enough(mat, left_cols_to_skip),
        Method::HouseholderQr => {
            assert_left_cols_to_skip(mat.ncols(), left_cols_to_skip);
            let ncols = mat.ncols();
            householder_qr(mat.get_mut(.., left_cols_to_skip..ncols));
        }
        Method::Partial => partial_orthogonalization(mat, left_cols_to_skip),
        Method::JensWehner => jens_wehner(mat, left_cols_to_skip),
    }
}

/// Orthogonalizes every column of `mat`; shorthand for `orthogonalize(mat, 0, method)`.
///
/// # Panics
///
/// Panics if `mat` has no columns, or for the QR-based methods if it has more columns than
/// rows.
pub fn orthogonalize_all<T: ComplexField>(mat: MatMut<'_, T>, method: Method)
where
    T::Real: RealField,
{
    orthogonalize(mat, 0, method);
}

/// Fallible counterpart of [`orthogonalize`].
///
/// All preconditions are validated before `mat` is touched; on error it is left
/// unchanged.
///
/// # Errors
///
/// * `left_cols_to_skip >= mat.ncols()`.
/// * For [`Method::HouseholderQr`] and [`Method::JensWehner`], a new block with more
///   columns than rows.
pub fn try_orthogonalize<T: ComplexField>(
    mat: MatMut<'_, T>,
    left_cols_to_skip: usize,
    method: Method,
) -> Result<(), OrthogonalizationError>
where
    T::Real: RealField,
{
    check_left_cols_to_skip(mat.ncols(), left_cols_to_skip)?;
    if matches!(method, Method::HouseholderQr | Method::JensWehner) {
        check_qr_shape(mat.nrows(), mat.ncols() - left_cols_to_skip)?;
    }
    orthogonalize(mat, left_cols_to_skip, method);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::mat;

    #[test]
    fn test_method_names_round_trip() {
        for method in Method::ALL {
            let parsed: Method = method.to_string().parse().unwrap();
            assert_eq!(parsed, method);
        }
        assert_eq!("Jens-Wehner".parse::<Method>().unwrap(), Method::JensWehner);
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let err = "gram".parse::<Method>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown orthogonalization method: 'gram'");
    }

    #[test]
    fn test_try_orthogonalize_leaves_matrix_untouched_on_error() {
        let mut m: Mat<f64> = mat![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let before = m.clone();
        for method in Method::ALL {
            let err = try_orthogonalize(m.as_mut(), 2, method).unwrap_err();
            assert!(err.is_skip_out_of_range());
            let err = try_orthogonalize(m.as_mut(), usize::MAX, method).unwrap_err();
            assert!(err.is_skip_out_of_range());
            assert_eq!(m, before);
        }
    }

    #[test]
    fn test_try_orthogonalize_rejects_wide_qr_block() {
        let mut m: Mat<f64> = Mat::from_fn(2, 3, |i, j| (i + 2 * j + 1) as f64);
        let before = m.clone();
        assert!(try_orthogonalize(m.as_mut(), 0, Method::HouseholderQr).is_err());
        assert!(try_orthogonalize(m.as_mut(), 0, Method::JensWehner).is_err());
        assert_eq!(m, before);
        // The block [1, 3) fits.
        assert!(try_orthogonalize(m.as_mut(), 1, Method::HouseholderQr).is_ok());
    }

    #[test]
    fn test_householder_dispatch_only_touches_the_new_block() {
        let mut m: Mat<f64> = mat![[1.0, 1.0, 2.0], [0.0, 1.0, 0.0], [0.0, 1.0, 1.0]];
        orthogonalize(m.as_mut(), 1, Method::HouseholderQr);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 0)], 0.0);
        let block = m.as_ref().get(.., 1..3);
        let identity = Mat::<f64>::identity(2, 2);
        assert!((&identity - block.adjoint() * block).norm_l2() < 1e-14);
    }

    #[test]
    fn test_orthogonalize_all_makes_every_method_but_partial_orthonormal() {
        let a: Mat<f64> = mat![[2.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 4.0], [1.0, 0.0, 1.0]];
        let identity = Mat::<f64>::identity(3, 3);
        for method in Method::ALL.into_iter().filter(|m| m.orthonormalizes_block()) {
            let mut m = a.clone();
            orthogonalize_all(m.as_mut(), method);
            let err = (&identity - m.adjoint() * &m).norm_l2();
            assert!(err < 1e-14, "{method}: Gram error {err}");
        }
    }

    #[test]
    #[should_panic(expected = "must be smaller than the number of columns")]
    fn test_orthogonalize_panics_on_full_skip() {
        let mut m: Mat<f64> = Mat::identity(3, 3);
        orthogonalize(m.as_mut(), 3, Method::HouseholderQr);
    }
}
