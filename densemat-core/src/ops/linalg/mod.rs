// src/ops/linalg/mod.rs

pub mod determinant;
pub mod dot;
pub mod inverse;
pub mod matmul;
pub mod row_ops;
pub mod transpose;

pub use determinant::{determinant_op, minor_op, LARGE_DETERMINANT_DIM};
pub use dot::dot_op;
pub use inverse::{adjoint_op, cofactor_op, inverse_op, inverse_with_epsilon_op, SINGULARITY_EPSILON};
pub use matmul::matmul_op;
pub use row_ops::{add_scaled_row_op, scale_row_op, swap_rows_op};
pub use transpose::transpose_op;
