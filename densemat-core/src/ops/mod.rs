//! # Matrix Operations Module (`ops`)
//!
//! Operations are grouped by what they compute:
//!
//! - [`view`]: reshaping and row/column/rectangular extraction (always copies).
//! - [`arithmetic`]: elementwise and scalar arithmetic, row broadcasting.
//! - [`comparison`]: tolerance-based equality.
//! - [`linalg`]: matmul, dot, transpose, determinant, cofactor/adjoint/inverse,
//!   elementary row operations.
//! - [`activation`]: caller-supplied elementwise functions and stock activations.
//! - [`reduction`]: argmax.
//!
//! Each operation has a core `xxx_op` function and a method on
//! [`Matrix`](crate::Matrix) delegating to it. Allocating variants clone their
//! input and run the in-place core, so each operation has one implementation.

pub mod activation;
pub mod arithmetic;
pub mod comparison;
pub mod linalg;
pub mod reduction;
pub mod view;
