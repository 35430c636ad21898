//! Extension of a fixed orthonormal basis by a new block of columns.
//!
//! [`partial_orthogonalization`] removes from the new block `[left_cols_to_skip, ncols)`
//! its component along the fixed frame `[0, left_cols_to_skip)` with a single batched
//! projection, then normalizes every new column on its own. The new columns are not made
//! orthogonal to each other.
//!
//! [`jens_wehner`] follows the projection with a Householder QR of the new block, so the
//! new columns also come out mutually orthonormal. This is the variant to use when a
//! block eigensolver appends several vectors at once.
//!
//! Both leave the fixed frame bit-identical.

use super::{assert_left_cols_to_skip, householder::householder_qr, minus_one, normalize_col};
use faer::{
    Accum,
    linalg::matmul::matmul,
    prelude::*,
    traits::{ComplexField, RealField},
};

/// Orthogonalizes the right block `[left_cols_to_skip, ncols)` against the left block
/// `[0, left_cols_to_skip)`, which is assumed to be orthonormal.
///
/// Computes `right -= left * (left^H * right)` and normalizes each column of `right`.
/// With `left_cols_to_skip == 0` there is nothing to project against and the call is a
/// no-op.
///
/// # Panics
///
/// Panics if `left_cols_to_skip >= mat.ncols()`.
pub fn partial_orthogonalization<T: ComplexField>(mat: MatMut<'_, T>, left_cols_to_skip: usize)
where
    T::Real: RealField,
{
    assert_left_cols_to_skip(mat.ncols(), left_cols_to_skip);
    if left_cols_to_skip == 0 {
        return;
    }

    let (left, mut right) = mat.split_at_col_mut(left_cols_to_skip);
    let left = left.rb();

    let mut coeffs = Mat::<T>::zeros(left_cols_to_skip, right.ncols());
    matmul(
        coeffs.as_mut(),
        Accum::Replace,
        left.adjoint(),
        right.rb(),
        T::one_impl(),
        Par::Seq,
    );
    matmul(
        right.rb_mut(),
        Accum::Add,
        left,
        coeffs.as_ref(),
        minus_one::<T>(),
        Par::Seq,
    );

    for j in 0..right.ncols() {
        normalize_col(right.rb_mut().col_mut(j));
    }
}

/// Extends the orthonormal frame `[0, left_cols_to_skip)` with the block
/// `[left_cols_to_skip, ncols)`.
///
/// Runs [`partial_orthogonalization`] and then [`householder_qr`] on exactly the new
/// block, through a column-range view. On return the new columns are mutually
/// orthonormal and orthogonal to the frame, which is left untouched. With
/// `left_cols_to_skip == 0` this is a QR orthogonalization of the whole matrix.
///
/// # Panics
///
/// Panics if `left_cols_to_skip >= mat.ncols()`, or if the new block has more columns
/// than `mat` has rows.
pub fn jens_wehner<T: ComplexField>(mut mat: MatMut<'_, T>, left_cols_to_skip: usize)
where
    T::Real: RealField,
{
    assert_left_cols_to_skip(mat.ncols(), left_cols_to_skip);

    partial_orthogonalization(mat.rb_mut(), left_cols_to_skip);

    let ncols = mat.ncols();
    householder_qr(mat.get_mut(.., left_cols_to_skip..ncols));
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::mat;

    /// Columns 0 and 1 are orthonormal; columns 2 and 3 are not orthogonal to them nor to
    /// each other.
    fn extension_problem() -> Mat<f64> {
        mat![
            [1.0, 0.0, 1.0, 2.0],
            [0.0, 1.0, 1.0, 1.0],
            [0.0, 0.0, 1.0, 1.0],
            [0.0, 0.0, 1.0, 0.0],
        ]
    }

    #[test]
    fn test_partial_leaves_frame_and_projects_it_out() {
        let mut m = extension_problem();
        let before = m.clone();
        partial_orthogonalization(m.as_mut(), 2);

        assert_eq!(m.as_ref().get(.., 0..2), before.as_ref().get(.., 0..2));

        let cross = m.as_ref().get(.., 0..2).adjoint() * m.as_ref().get(.., 2..4);
        assert!(cross.norm_l2() < 1e-15);
        for j in 2..4 {
            assert!((m.as_ref().col(j).norm_l2() - 1.0).abs() < 1e-15);
        }

        // [0, 0, 1, 1] / sqrt(2) and [0, 0, 1, 0]: not orthogonal to each other.
        let inner: f64 = (0..4).map(|i| m[(i, 2)] * m[(i, 3)]).sum();
        assert!((inner - 1.0 / 2.0f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_partial_with_no_frame_is_noop() {
        let mut m = extension_problem();
        let before = m.clone();
        partial_orthogonalization(m.as_mut(), 0);
        assert_eq!(m, before);
    }

    #[test]
    fn test_jens_wehner_orthonormalizes_the_new_block() {
        let mut m = extension_problem();
        let before = m.clone();
        jens_wehner(m.as_mut(), 2);

        assert_eq!(m.as_ref().get(.., 0..2), before.as_ref().get(.., 0..2));
        let identity = Mat::<f64>::identity(4, 4);
        assert!((&identity - m.adjoint() * &m).norm_l2() < 1e-14);
    }

    #[test]
    #[should_panic(expected = "must be smaller than the number of columns")]
    fn test_partial_rejects_full_skip() {
        let mut m = extension_problem();
        partial_orthogonalization(m.as_mut(), 4);
    }

    #[test]
    #[should_panic(expected = "must be smaller than the number of columns")]
    fn test_jens_wehner_rejects_full_skip() {
        let mut m = extension_problem();
        jens_wehner(m.as_mut(), 4);
    }
}
