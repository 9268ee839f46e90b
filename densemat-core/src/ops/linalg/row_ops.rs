// src/ops/linalg/row_ops.rs
//
// Elementary row operations. All of them work in place and validate every
// index before the first write.

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Exchanges rows `r1` and `r2`. Swapping a row with itself is a no-op.
pub fn swap_rows_op(m: &mut Matrix, r1: usize, r2: usize) -> Result<(), MatrixError> {
    m.check_row(r1)?;
    m.check_row(r2)?;
    if r1 != r2 {
        let n = m.cols();
        let data = m.as_mut_slice();
        for j in 0..n {
            data.swap(r1 * n + j, r2 * n + j);
        }
    }
    Ok(())
}

/// Multiplies row `r` by `scale`. A zero scale is allowed.
pub fn scale_row_op(m: &mut Matrix, r: usize, scale: f32) -> Result<(), MatrixError> {
    m.check_row(r)?;
    m.row_slice_mut(r).iter_mut().for_each(|x| *x *= scale);
    Ok(())
}

/// `row[target] += scale * row[source]`.
///
/// The source row is read from a snapshot taken before any write, so
/// `target == source` gives `row[target] *= 1 + scale`.
pub fn add_scaled_row_op(
    m: &mut Matrix,
    target: usize,
    source: usize,
    scale: f32,
) -> Result<(), MatrixError> {
    m.check_row(target)?;
    m.check_row(source)?;
    let source_row = m.row_slice(source).to_vec();
    for (x, s) in m.row_slice_mut(target).iter_mut().zip(source_row) {
        *x += scale * s;
    }
    Ok(())
}

impl Matrix {
    /// See [`swap_rows_op`].
    pub fn swap_rows(&mut self, r1: usize, r2: usize) -> Result<(), MatrixError> {
        swap_rows_op(self, r1, r2)
    }

    /// See [`scale_row_op`].
    pub fn scale_row(&mut self, r: usize, scale: f32) -> Result<(), MatrixError> {
        scale_row_op(self, r, scale)
    }

    /// See [`add_scaled_row_op`].
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: f32) -> Result<(), MatrixError> {
        add_scaled_row_op(self, target, source, scale)
    }
}

#[cfg(test)]
#[path = "row_ops_test.rs"]
mod tests;
