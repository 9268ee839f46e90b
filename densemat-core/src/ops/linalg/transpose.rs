use crate::error::MatrixError;
use crate::matrix::{alloc_storage, Matrix};

fn transpose_into(m: &Matrix, data: &mut [f32]) {
    let (rows, cols) = m.shape();
    let src = m.as_slice();
    for c in 0..cols {
        for r in 0..rows {
            data[c * rows + r] = src[r * cols + c];
        }
    }
}

/// Returns the `(cols, rows)` transpose of `m`.
///
/// Infallible: like `Clone`, the result buffer comes from the global
/// allocator and the process aborts if it cannot be obtained.
pub fn transpose_op(m: &Matrix) -> Matrix {
    let mut data = vec![0.0; m.numel()];
    transpose_into(m, &mut data);
    Matrix::from_parts(m.cols(), m.rows(), data)
}

/// Transpose whose buffer comes from the allocate-or-fail primitive.
pub(crate) fn try_transpose_op(m: &Matrix) -> Result<Matrix, MatrixError> {
    let mut data = alloc_storage(m.numel(), 0.0)?;
    transpose_into(m, &mut data);
    Ok(Matrix::from_parts(m.cols(), m.rows(), data))
}

impl Matrix {
    /// Returns the transpose of `self`.
    pub fn transpose(&self) -> Matrix {
        transpose_op(self)
    }
}
