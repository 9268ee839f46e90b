// src/ops/linalg/determinant.rs
//
// Determinants are computed by Laplace (cofactor) expansion along the first
// row. This is O(n!) in time and allocates one minor per term, so it is only
// suitable for small matrices. It is kept on purpose: an elimination-based
// determinant rounds differently near singularity, and `inverse` relies on the
// exact same expansion for its cofactors.

use crate::error::MatrixError;
use crate::matrix::{alloc_storage, Matrix};

/// Above this dimension the cofactor-expansion entry points log a warning.
pub const LARGE_DETERMINANT_DIM: usize = 10;

pub(crate) fn require_square(m: &Matrix, operation: &str) -> Result<usize, MatrixError> {
    if !m.is_square() {
        return Err(MatrixError::InvalidShape {
            rows: m.rows(),
            cols: m.cols(),
            operation: format!("{} (square required)", operation),
        });
    }
    Ok(m.rows())
}

pub(crate) fn warn_if_large(n: usize, operation: &str) {
    if n > LARGE_DETERMINANT_DIM {
        log::warn!(
            "{} on a {}x{} matrix uses factorial-time cofactor expansion",
            operation,
            n,
            n
        );
    }
}

/// Sign of the cofactor at `(i, j)`: `(-1)^(i + j)`.
pub(crate) fn cofactor_sign(i: usize, j: usize) -> f32 {
    if (i + j) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Removes row `i` and column `j` from an `n x n` matrix with `n >= 2`.
/// Indices are validated by the caller.
pub(crate) fn minor_unchecked(m: &Matrix, i: usize, j: usize) -> Result<Matrix, MatrixError> {
    let n = m.rows();
    let mut data = alloc_storage((n - 1) * (n - 1), 0.0)?;
    let mut k = 0;
    for r in (0..n).filter(|&r| r != i) {
        for (c, &value) in m.row_slice(r).iter().enumerate() {
            if c != j {
                data[k] = value;
                k += 1;
            }
        }
    }
    Ok(Matrix::from_parts(n - 1, n - 1, data))
}

/// Returns the `(n-1) x (n-1)` matrix obtained by deleting row `i` and
/// column `j` of the square matrix `m`.
///
/// # Errors
/// * `InvalidShape` if `m` is not square, or is `1 x 1` (the minor would be
///   empty).
/// * `IndexOutOfBounds` if `i` or `j` is not below `n`.
pub fn minor_op(m: &Matrix, i: usize, j: usize) -> Result<Matrix, MatrixError> {
    let n = require_square(m, "minor")?;
    if i >= n || j >= n {
        return Err(MatrixError::IndexOutOfBounds {
            index: vec![i, j],
            shape: m.shape(),
        });
    }
    if n < 2 {
        return Err(MatrixError::InvalidShape {
            rows: n,
            cols: n,
            operation: "minor (needs at least 2x2)".to_string(),
        });
    }
    minor_unchecked(m, i, j)
}

/// Recursive expansion on an already validated square matrix.
pub(crate) fn determinant_unchecked(m: &Matrix) -> Result<f32, MatrixError> {
    let n = m.rows();
    let a = m.as_slice();
    match n {
        1 => Ok(a[0]),
        2 => Ok(a[0] * a[3] - a[1] * a[2]),
        _ => {
            let mut det = 0.0f32;
            for j in 0..n {
                let minor = minor_unchecked(m, 0, j)?;
                det += cofactor_sign(0, j) * a[j] * determinant_unchecked(&minor)?;
            }
            Ok(det)
        }
    }
}

/// Determinant of a square matrix by cofactor expansion along row 0.
///
/// `1 x 1` returns the element and `2 x 2` returns `ad - bc`; larger
/// matrices expand as `Σ_j (-1)^j * a[0][j] * det(minor(0, j))`.
///
/// Runs in factorial time. Embedders should bound the size of matrices they
/// pass in; a warning is logged above [`LARGE_DETERMINANT_DIM`].
///
/// # Errors
/// `InvalidShape` if `m` is not square.
pub fn determinant_op(m: &Matrix) -> Result<f32, MatrixError> {
    let n = require_square(m, "determinant")?;
    warn_if_large(n, "determinant");
    determinant_unchecked(m)
}

impl Matrix {
    /// See [`minor_op`].
    pub fn minor(&self, i: usize, j: usize) -> Result<Matrix, MatrixError> {
        minor_op(self, i, j)
    }

    /// See [`determinant_op`].
    pub fn determinant(&self) -> Result<f32, MatrixError> {
        determinant_op(self)
    }
}

#[cfg(test)]
#[path = "determinant_test.rs"]
mod tests;
