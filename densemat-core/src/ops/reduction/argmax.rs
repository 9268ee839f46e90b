use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Flat row-major index of the largest element of `m`.
///
/// Ties resolve to the first occurrence. NaN elements never win a comparison,
/// so they are skipped unless the matrix holds nothing else, in which case
/// index 0 is returned.
///
/// # Errors
/// `EmptyMatrix` if the buffer is empty, which the shape invariant makes
/// unreachable for any constructed `Matrix`.
pub fn argmax_op(m: &Matrix) -> Result<usize, MatrixError> {
    let data = m.as_slice();
    let first = data.first().ok_or_else(|| MatrixError::EmptyMatrix {
        operation: "argmax".to_string(),
    })?;

    let mut best_idx = 0;
    let mut best = *first;
    for (i, &x) in data.iter().enumerate().skip(1) {
        if x > best || (best.is_nan() && !x.is_nan()) {
            best = x;
            best_idx = i;
        }
    }
    Ok(best_idx)
}

impl Matrix {
    /// See [`argmax_op`].
    pub fn argmax(&self) -> Result<usize, MatrixError> {
        argmax_op(self)
    }
}
