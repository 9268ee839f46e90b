use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Performs matrix multiplication `C = A @ B`.
/// A: [M, K], B: [K, N] -> C: [M, N]
///
/// Each output element is accumulated in natural `k` order with plain `f32`
/// additions; no compensated summation is applied.
///
/// # Errors
/// `ShapeMismatch` if `a.cols() != b.rows()`.
pub fn matmul_op(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::ShapeMismatch {
            expected: (a.cols(), b.cols()),
            actual: b.shape(),
            operation: "matmul (inner dim)".to_string(),
        });
    }

    let m = a.rows();
    let k = a.cols(); // == b.rows()
    let n = b.cols();

    let mut output = Matrix::new(m, n)?;
    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let out = output.as_mut_slice();

    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0f32;
            for l in 0..k {
                sum += a_data[i * k + l] * b_data[l * n + j];
            }
            out[i * n + j] = sum;
        }
    }
    Ok(output)
}

impl Matrix {
    /// Matrix product `self @ other`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        matmul_op(self, other)
    }
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
