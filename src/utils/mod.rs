//! Utilities shared by the tests, the Krylov driver and the experiment binaries.
//!
//! - **`diagnostics`**: measures of how orthonormal a basis is, whether it spans a given
//!   block, and whether a fixed prefix survived an orthogonalization call.

pub mod diagnostics;
