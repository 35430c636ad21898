//! Gram-Schmidt orthogonalization of a suffix of columns.
//!
//! All three variants process the columns `[left_cols_to_skip, ncols)` from left to right
//! and project each one against every column before it, so that on return the whole
//! matrix is orthonormal (assuming the fixed prefix was, and that the columns are linearly
//! independent). When `left_cols_to_skip == 0` the first column is normalized to start
//! the recurrence, see [`super::treat_first_col`].
//!
//! The variants differ in how the projections are applied:
//!
//! - [`gram_schmidt`] (classical) computes all projection coefficients of a column in
//!   one batched product against the original column. It maps to two matrix-vector
//!   products per column but loses orthogonality to round-off faster.
//! - [`modified_gram_schmidt`] subtracts the projections one at a time, each computed
//!   from the column as already updated by the previous ones.
//! - [`twice_is_enough`] runs the classical variant twice. The second sweep restores
//!   most of the orthogonality lost in the first.
//!
//! No variant detects linear dependence. A column that lies numerically in the span of
//! the previous ones leaves a residual made of round-off, and normalizing it yields an
//! arbitrary unit vector.

use super::{assert_left_cols_to_skip, minus_one, normalize_col, treat_first_col};
use faer::{
    Accum,
    linalg::matmul::matmul,
    prelude::*,
    traits::{ComplexField, RealField},
};

/// Orthogonalizes the columns `[left_cols_to_skip, ncols)` of `mat` with the classical
/// Gram-Schmidt process.
///
/// For each column `j`, the coefficients `c = V[:, 0..j]^H v_j` are computed in one
/// product, `V[:, 0..j] c` is subtracted from `v_j`, and `v_j` is normalized.
///
/// # Panics
///
/// Panics if `left_cols_to_skip >= mat.ncols()`.
pub fn gram_schmidt<T: ComplexField>(mut mat: MatMut<'_, T>, left_cols_to_skip: usize)
where
    T::Real: RealField,
{
    assert_left_cols_to_skip(mat.ncols(), left_cols_to_skip);
    let left_cols_to_skip = treat_first_col(mat.rb_mut(), left_cols_to_skip);

    for j in left_cols_to_skip..mat.ncols() {
        let (left, right) = mat.rb_mut().split_at_col_mut(j);
        let left = left.rb();
        let mut col = right.subcols_mut(0, 1);

        let mut coeffs = Mat::<T>::zeros(j, 1);
        matmul(
            coeffs.as_mut(),
            Accum::Replace,
            left.adjoint(),
            col.rb(),
            T::one_impl(),
            Par::Seq,
        );
        matmul(
            col.rb_mut(),
            Accum::Add,
            left,
            coeffs.as_ref(),
            minus_one::<T>(),
            Par::Seq,
        );

        normalize_col(col.col_mut(0));
    }
}

/// Orthogonalizes the columns `[left_cols_to_skip, ncols)` of `mat` with the modified
/// Gram-Schmidt process.
///
/// For each column `k`, the projections onto the columns `j < k` are removed one at a
/// time, in order, each coefficient `v_j^H v_k` being computed from the current, already
/// updated `v_k`. `v_k` is normalized once all projections have been removed.
///
/// # Panics
///
/// Panics if `left_cols_to_skip >= mat.ncols()`.
pub fn modified_gram_schmidt<T: ComplexField>(mut mat: MatMut<'_, T>, left_cols_to_skip: usize)
where
    T::Real: RealField,
{
    assert_left_cols_to_skip(mat.ncols(), left_cols_to_skip);
    let left_cols_to_skip = treat_first_col(mat.rb_mut(), left_cols_to_skip);

    // 1x1 buffer for the projection coefficient, reused across all projections.
    let mut coeff = Mat::<T>::zeros(1, 1);

    for k in left_cols_to_skip..mat.ncols() {
        let (left, right) = mat.rb_mut().split_at_col_mut(k);
        let left = left.rb();
        let mut col = right.subcols_mut(0, 1);

        for j in 0..k {
            let basis_vec = left.subcols(j, 1);
            matmul(
                coeff.as_mut(),
                Accum::Replace,
                basis_vec.adjoint(),
                col.rb(),
                T::one_impl(),
                Par::Seq,
            );
            matmul(
                col.rb_mut(),
                Accum::Add,
                basis_vec,
                coeff.as_ref(),
                minus_one::<T>(),
                Par::Seq,
            );
        }

        normalize_col(col.col_mut(0));
    }
}

/// Runs [`gram_schmidt`] twice with the same `left_cols_to_skip`.
///
/// # Panics
///
/// Panics if `left_cols_to_skip >= mat.ncols()`.
pub fn twice_is_enough<T: ComplexField>(mut mat: MatMut<'_, T>, left_cols_to_skip: usize)
where
    T::Real: RealField,
{
    gram_schmidt(mat.rb_mut(), left_cols_to_skip);
    gram_schmidt(mat.rb_mut(), left_cols_to_skip);
}
