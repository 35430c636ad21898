//! This module defines the custom error types for the library.
//!
//! The orthogonalization kernels themselves treat an out-of-range skip count as a
//! contract violation and panic. Callers that receive the skip count from somewhere
//! they do not control (a configuration file, a command line) go through the fallible
//! entry points instead, which report the same conditions as an
//! [`OrthogonalizationError`].
//!
//! Using the [`thiserror`] crate allows us to create idiomatic error types with minimal
//! boilerplate.
use thiserror::Error;

/// Represents all possible errors reported by the fallible entry points of the crate.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct OrthogonalizationError(#[from] OrthogonalizationErrorKind);

/// Private enum containing the distinct kinds of errors.
#[derive(Error, Debug, PartialEq)]
pub(crate) enum OrthogonalizationErrorKind {
    /// The number of left columns to keep fixed is not smaller than the column count.
    #[error(
        "Invalid skip count: left_cols_to_skip ({left_cols_to_skip}) must be smaller than the number of columns ({ncols})."
    )]
    SkipOutOfRange {
        left_cols_to_skip: usize,
        ncols: usize,
    },

    /// A block handed to the QR orthogonalizer has more columns than rows, so its
    /// columns cannot all be orthonormal.
    #[error(
        "Block too wide for QR orthogonalization: {ncols} columns cannot be orthonormal in a space of dimension {nrows}."
    )]
    TooManyColumns { nrows: usize, ncols: usize },

    /// Indicates that the dimensions of the operator and the input vector are
    /// incompatible for a matrix-vector product.
    #[error(
        "Dimension mismatch: operator has {operator_cols} columns but vector has {vector_rows} rows."
    )]
    DimensionMismatch {
        operator_cols: usize,
        vector_rows: usize,
    },

    /// Indicates that an invalid input parameter was provided to a function.
    #[error("Invalid input parameter: {0}")]
    InputError(String),

    /// A method name that does not correspond to any [`crate::Method`].
    #[error("Unknown orthogonalization method: '{0}'")]
    UnknownMethod(String),
}

// Compare the inner kinds.
impl PartialEq for OrthogonalizationError {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl OrthogonalizationError {
    /// Returns `true` if the error reports an out-of-range skip count.
    pub fn is_skip_out_of_range(&self) -> bool {
        matches!(self.0, OrthogonalizationErrorKind::SkipOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_out_of_range_message() {
        let error = OrthogonalizationError(OrthogonalizationErrorKind::SkipOutOfRange {
            left_cols_to_skip: 4,
            ncols: 4,
        });
        assert_eq!(
            error.to_string(),
            "Invalid skip count: left_cols_to_skip (4) must be smaller than the number of columns (4)."
        );
        assert!(error.is_skip_out_of_range());
    }

    #[test]
    fn test_too_many_columns_message() {
        let error = OrthogonalizationError::from(OrthogonalizationErrorKind::TooManyColumns {
            nrows: 3,
            ncols: 5,
        });
        assert_eq!(
            error.to_string(),
            "Block too wide for QR orthogonalization: 5 columns cannot be orthonormal in a space of dimension 3."
        );
        assert!(!error.is_skip_out_of_range());
    }

    #[test]
    fn test_dimension_mismatch_error_message() {
        let error = OrthogonalizationError(OrthogonalizationErrorKind::DimensionMismatch {
            operator_cols: 100,
            vector_rows: 99,
        });
        let expected_message =
            "Dimension mismatch: operator has 100 columns but vector has 99 rows.";
        assert_eq!(error.to_string(), expected_message);
    }

    #[test]
    fn test_unknown_method_message() {
        let error = OrthogonalizationError(OrthogonalizationErrorKind::UnknownMethod(
            "gram".to_string(),
        ));
        assert_eq!(error.to_string(), "Unknown orthogonalization method: 'gram'");
    }

    #[test]
    fn test_errors_compare_by_kind() {
        let a = OrthogonalizationError::from(OrthogonalizationErrorKind::InputError(
            "k must be positive".to_string(),
        ));
        let b = OrthogonalizationError::from(OrthogonalizationErrorKind::InputError(
            "k must be positive".to_string(),
        ));
        assert_eq!(a, b);
    }
}
