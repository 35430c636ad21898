//! This module defines the operator abstraction consumed by the Krylov basis driver.
//!
//! A Krylov basis is generated by repeatedly applying an operator `A` to the most recent
//! basis vector. The driver never needs the entries of `A`, only its action, so it is
//! written against the [`LinearOperator`] trait. The trait is implemented for `faer`'s
//! dense matrix types; an implicit operator (a stencil, a product of factors) only has to
//! provide its dimensions and `apply`.

use faer::{Mat, MatMut, MatRef, prelude::Reborrow, traits::ComplexField};

/// Represents a linear operator that can be applied to a vector (or a matrix).
///
/// The Krylov driver only ever calls [`LinearOperator::apply`] with a single `n x 1`
/// column (the newest basis vector) and copies the result into the next basis column, so
/// an implementation may be specialized for that case. It must still return a matrix with
/// `self.nrows()` rows and as many columns as `rhs`.
///
/// # Type Parameters
///
/// *   `T`: The scalar type, which must implement `ComplexField`. This trait from `faer`
///     provides the arithmetic for `f32`, `f64`, and their complex counterparts.
pub trait LinearOperator<T: ComplexField> {
    /// Returns the number of rows of the operator.
    fn nrows(&self) -> usize;

    /// Returns the number of columns of the operator.
    fn ncols(&self) -> usize;

    /// Returns `true` if the operator maps a space to itself. Krylov subspaces are only
    /// defined for such operators.
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Applies the linear operator to `rhs` and returns `A * rhs` as an owned matrix.
    ///
    /// # Panics
    ///
    /// Implementations are expected to panic if the number of columns of the operator does
    /// not match the number of rows of `rhs`.
    fn apply(&self, rhs: MatRef<'_, T>) -> Mat<T>;
}

impl<'a, T: ComplexField> LinearOperator<T> for MatRef<'a, T> {
    #[inline]
    fn nrows(&self) -> usize {
        MatRef::nrows(self)
    }

    #[inline]
    fn ncols(&self) -> usize {
        MatRef::ncols(self)
    }

    #[inline]
    fn apply(&self, rhs: MatRef<'_, T>) -> Mat<T> {
        assert_eq!(
            MatRef::ncols(self),
            rhs.nrows(),
            "Dimension mismatch: operator columns ({}) do not match vector rows ({}).",
            MatRef::ncols(self),
            rhs.nrows(),
        );
        *self * rhs
    }
}

impl<'a, T: ComplexField> LinearOperator<T> for MatMut<'a, T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.rb().nrows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.rb().ncols()
    }

    #[inline]
    fn apply(&self, rhs: MatRef<'_, T>) -> Mat<T> {
        self.rb().apply(rhs)
    }
}

impl<T: ComplexField> LinearOperator<T> for Mat<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.as_ref().nrows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.as_ref().ncols()
    }

    #[inline]
    fn apply(&self, rhs: MatRef<'_, T>) -> Mat<T> {
        self.as_ref().apply(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::mat;

    #[test]
    fn test_linear_operator_for_mat() {
        let matrix: Mat<f64> = mat![[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0],];
        let vector: Mat<f64> = mat![[1.0], [2.0], [3.0]];
        let expected_result = &matrix * &vector;

        let operator: &dyn LinearOperator<f64> = &matrix;
        let result = operator.apply(vector.as_ref());

        assert_eq!(result, expected_result);
        assert_eq!(operator.nrows(), 3);
        assert_eq!(operator.ncols(), 3);
    }

    #[test]
    fn test_linear_operator_for_mat_ref_and_mut() {
        let mut matrix: Mat<f64> = mat![[1.0, 2.0], [3.0, 4.0]];
        let vector: Mat<f64> = mat![[1.0], [1.0]];
        let expected = &matrix * &vector;

        let operator_ref: &dyn LinearOperator<f64> = &matrix.as_ref();
        assert_eq!(operator_ref.apply(vector.as_ref()), expected);

        let operator_mut: &dyn LinearOperator<f64> = &matrix.as_mut();
        assert_eq!(operator_mut.apply(vector.as_ref()), expected);
    }

    #[test]
    fn test_is_square_and_single_column_apply() {
        let square: Mat<f64> = mat![[2.0, 0.0], [0.0, 3.0]];
        let tall = Mat::<f64>::zeros(3, 2);
        assert!(LinearOperator::is_square(&square));
        assert!(!LinearOperator::is_square(&tall));

        // One column in, one column out, with the operator's row count.
        let column: Mat<f64> = mat![[1.0], [1.0]];
        let image = LinearOperator::apply(&tall, column.as_ref());
        assert_eq!((image.nrows(), image.ncols()), (3, 1));
        let expected: Mat<f64> = mat![[2.0], [3.0]];
        assert_eq!(LinearOperator::apply(&square, column.as_ref()), expected);
    }

    #[test]
    #[should_panic(
        expected = "Dimension mismatch: operator columns (2) do not match vector rows (3)."
    )]
    fn test_dimension_mismatch_panic() {
        let matrix: Mat<f64> = mat![[1.0, 0.0], [0.0, 1.0]];
        let vector: Mat<f64> = mat![[1.0], [2.0], [3.0]];
        let operator: &dyn LinearOperator<f64> = &matrix;
        operator.apply(vector.as_ref());
    }
}
