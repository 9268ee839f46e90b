//! Dense, row-major, single-precision matrices.
//!
//! [`Matrix`] owns a flat `Vec<f32>` and exposes allocation, element access,
//! elementwise and scalar arithmetic, cofactor-based linear algebra
//! (determinant, adjoint, inverse) and a few helpers for neural-network style
//! pipelines (`apply`, `broadcast_add`, `argmax`).
//!
//! Operations come in pairs: `foo` returns a freshly allocated matrix and
//! leaves its inputs untouched, `foo_` mutates `self` in place. No operation
//! returns a view into another matrix's storage.

pub mod error;
pub mod matrix;
pub mod ops;
pub mod utils;

pub use error::MatrixError;
pub use matrix::Matrix;
pub use ops::activation::{relu, sigmoid, tanh};
pub use ops::linalg::{LARGE_DETERMINANT_DIM, SINGULARITY_EPSILON};
