// src/ops/arithmetic/broadcast.rs

use crate::error::MatrixError;
use crate::matrix::Matrix;

fn check_bias_row(m: &Matrix, bias: &Matrix) -> Result<(), MatrixError> {
    if bias.rows() != 1 || bias.cols() != m.cols() {
        return Err(MatrixError::ShapeMismatch {
            expected: (1, m.cols()),
            actual: bias.shape(),
            operation: "broadcast_add".to_string(),
        });
    }
    Ok(())
}

/// Adds the `1 x cols` row `bias` to every row of `m`.
///
/// # Errors
/// `ShapeMismatch` unless `bias` has exactly one row and `m.cols()` columns.
/// `m` is not modified on error.
pub fn broadcast_add_op_inplace(m: &mut Matrix, bias: &Matrix) -> Result<(), MatrixError> {
    check_bias_row(m, bias)?;
    let bias_row = bias.as_slice();
    for row in m.as_mut_slice().chunks_exact_mut(bias_row.len()) {
        for (x, &b) in row.iter_mut().zip(bias_row) {
            *x += b;
        }
    }
    Ok(())
}

pub fn broadcast_add_op(m: &Matrix, bias: &Matrix) -> Result<Matrix, MatrixError> {
    check_bias_row(m, bias)?;
    let mut result = m.try_clone()?;
    broadcast_add_op_inplace(&mut result, bias)?;
    Ok(result)
}

impl Matrix {
    /// Returns `self` with `bias` added to every row.
    pub fn broadcast_add(&self, bias: &Matrix) -> Result<Matrix, MatrixError> {
        broadcast_add_op(self, bias)
    }

    /// Adds `bias` to every row of `self` in place.
    pub fn broadcast_add_(&mut self, bias: &Matrix) -> Result<(), MatrixError> {
        broadcast_add_op_inplace(self, bias)
    }
}
