use crate::error::MatrixError;
use crate::matrix::Matrix;

fn is_vector(m: &Matrix) -> bool {
    m.rows() == 1 || m.cols() == 1
}

/// Scalar product of two vectors.
///
/// Both operands must be row (`1 x N`) or column (`N x 1`) vectors holding
/// the same number of elements; their orientations may differ.
///
/// # Errors
/// `ShapeMismatch` otherwise.
pub fn dot_op(a: &Matrix, b: &Matrix) -> Result<f32, MatrixError> {
    if !is_vector(a) || !is_vector(b) || a.numel() != b.numel() {
        return Err(MatrixError::ShapeMismatch {
            expected: a.shape(),
            actual: b.shape(),
            operation: "dot".to_string(),
        });
    }
    Ok(a.as_slice().iter().zip(b.as_slice()).map(|(x, y)| x * y).sum())
}

impl Matrix {
    pub fn dot(&self, other: &Matrix) -> Result<f32, MatrixError> {
        dot_op(self, other)
    }
}
