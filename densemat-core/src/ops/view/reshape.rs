use crate::error::MatrixError;
use crate::matrix::{checked_numel, Matrix};

fn validate_reshape(m: &Matrix, new_rows: usize, new_cols: usize) -> Result<(), MatrixError> {
    let new_numel = checked_numel(new_rows, new_cols, "reshape")?;
    if new_numel != m.numel() {
        return Err(MatrixError::SizeMismatch {
            expected: m.numel(),
            actual: new_numel,
            operation: "reshape".to_string(),
        });
    }
    Ok(())
}

/// Reinterprets `m` as `new_rows x new_cols` without moving or reallocating
/// its buffer. Row-major order is preserved.
///
/// # Errors
/// * `InvalidShape` if a new dimension is zero.
/// * `SizeMismatch` if `new_rows * new_cols != m.numel()`.
///
/// `m` is unchanged on error.
pub fn reshape_op_inplace(m: &mut Matrix, new_rows: usize, new_cols: usize) -> Result<(), MatrixError> {
    validate_reshape(m, new_rows, new_cols)?;
    log::debug!(
        "reshape_: ({}, {}) -> ({}, {})",
        m.rows(),
        m.cols(),
        new_rows,
        new_cols
    );
    m.set_dims(new_rows, new_cols);
    Ok(())
}

/// Returns a reshaped copy of `m`. The input is not modified and shares no
/// storage with the result.
pub fn reshape_op(m: &Matrix, new_rows: usize, new_cols: usize) -> Result<Matrix, MatrixError> {
    validate_reshape(m, new_rows, new_cols)?;
    let mut result = m.try_clone()?;
    reshape_op_inplace(&mut result, new_rows, new_cols)?;
    Ok(result)
}

impl Matrix {
    /// Returns a `new_rows x new_cols` copy of `self`.
    pub fn reshape(&self, new_rows: usize, new_cols: usize) -> Result<Matrix, MatrixError> {
        reshape_op(self, new_rows, new_cols)
    }

    /// Changes the shape of `self` in place, reusing its storage.
    pub fn reshape_(&mut self, new_rows: usize, new_cols: usize) -> Result<(), MatrixError> {
        reshape_op_inplace(self, new_rows, new_cols)
    }
}

#[cfg(test)]
#[path = "reshape_test.rs"]
mod tests;
