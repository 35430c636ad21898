//! In-place basis orthogonalization for Krylov subspace methods.
//!
//! Iterative eigensolvers (Arnoldi, Lanczos, Davidson) grow an orthonormal basis one
//! vector or one block at a time, and their accuracy rests on how well that basis stays
//! orthonormal. This crate provides the orthogonalization step as a family of in-place
//! kernels over a dense matrix whose columns are the basis vectors. A leading range of
//! `left_cols_to_skip` columns is a fixed, already orthonormal frame; the remaining
//! columns are orthogonalized.
//!
//! Built on the [`faer`] linear algebra framework, all kernels are generic over the
//! scalar type (`f32`, `f64`, `c32`, `c64`) and operate on [`faer::MatMut`] views, so a
//! column range of a larger basis can be orthogonalized without copying it.
//!
//! ## Methods
//!
//! | [`Method`] | Columns on return | Cost |
//! |---|---|---|
//! | `Classical` | all orthonormal | two matrix-vector products per column |
//! | `Modified` | all orthonormal, less round-off than `Classical` | one dot product and one update per pair |
//! | `TwiceIsEnough` | all orthonormal, `Classical` run twice | twice `Classical` |
//! | `HouseholderQr` | new block orthonormal (no frame) | one QR factorization |
//! | `Partial` | new block orthogonal to the frame, unit norm | two matrix-matrix products |
//! | `JensWehner` | new block orthonormal and orthogonal to the frame | `Partial` plus one QR |
//!
//! ## Example Usage
//!
//! Extending an orthonormal pair of vectors by two new vectors:
//!
//! ```rust
//! use faer::{Mat, mat};
//! use krylov_ortho::{Method, orthogonalize, utils::diagnostics::orthogonality_loss};
//!
//! let mut basis: Mat<f64> = mat![
//!     [1.0, 0.0, 1.0, 2.0],
//!     [0.0, 1.0, 1.0, 1.0],
//!     [0.0, 0.0, 1.0, 1.0],
//!     [0.0, 0.0, 1.0, 0.0],
//! ];
//!
//! // Keep the first two columns fixed, orthogonalize the last two.
//! orthogonalize(basis.as_mut(), 2, Method::JensWehner);
//!
//! assert_eq!(basis[(0, 0)], 1.0);
//! assert!(orthogonality_loss(basis.as_ref()) < 1e-14);
//! ```
//!
//! The kernels treat an out-of-range `left_cols_to_skip` as a bug in the caller and panic;
//! [`try_orthogonalize`] reports it as an [`error::OrthogonalizationError`] instead.

pub mod algorithms;
pub mod error;
pub mod matrix;
pub mod solvers;
pub mod type_traits;
pub mod utils;

// Re-export the main API for convenient access.
pub use algorithms::krylov::{KrylovOutput, krylov_basis};
pub use solvers::{Method, orthogonalize, orthogonalize_all, try_orthogonalize};
pub use type_traits::{ElemType, TypeTraits};
