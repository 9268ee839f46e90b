use crate::error::MatrixError;
use crate::matrix::{alloc_storage, Matrix};

/// Copies the half-open block `[r0, r1) x [c0, c1)` of `m` into a new matrix.
///
/// # Errors
/// `IndexOutOfBounds` unless `r0 < r1 <= rows` and `c0 < c1 <= cols`.
pub fn slice_op(m: &Matrix, r0: usize, r1: usize, c0: usize, c1: usize) -> Result<Matrix, MatrixError> {
    if r0 >= r1 || r1 > m.rows() || c0 >= c1 || c1 > m.cols() {
        return Err(MatrixError::IndexOutOfBounds {
            index: vec![r0, r1, c0, c1],
            shape: m.shape(),
        });
    }
    let (rows, cols) = (r1 - r0, c1 - c0);
    let mut data = alloc_storage(rows * cols, 0.0)?;
    for (dst, r) in data.chunks_exact_mut(cols).zip(r0..r1) {
        dst.copy_from_slice(&m.row_slice(r)[c0..c1]);
    }
    Ok(Matrix::from_parts(rows, cols, data))
}

/// Copies row `r` into a new `1 x cols` matrix.
pub fn row_op(m: &Matrix, r: usize) -> Result<Matrix, MatrixError> {
    m.check_row(r)?;
    slice_op(m, r, r + 1, 0, m.cols())
}

/// Copies column `c` into a new `rows x 1` matrix.
pub fn col_op(m: &Matrix, c: usize) -> Result<Matrix, MatrixError> {
    if c >= m.cols() {
        return Err(MatrixError::IndexOutOfBounds {
            index: vec![c],
            shape: m.shape(),
        });
    }
    slice_op(m, 0, m.rows(), c, c + 1)
}

impl Matrix {
    /// Copy of row `r` as a `1 x cols` matrix.
    pub fn row(&self, r: usize) -> Result<Matrix, MatrixError> {
        row_op(self, r)
    }

    /// Copy of column `c` as a `rows x 1` matrix.
    pub fn col(&self, c: usize) -> Result<Matrix, MatrixError> {
        col_op(self, c)
    }

    /// See [`slice_op`].
    pub fn slice(&self, r0: usize, r1: usize, c0: usize, c1: usize) -> Result<Matrix, MatrixError> {
        slice_op(self, r0, r1, c0, c1)
    }
}

#[cfg(test)]
#[path = "slice_test.rs"]
mod tests;
