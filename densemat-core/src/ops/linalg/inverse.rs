// src/ops/linalg/inverse.rs

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::linalg::determinant::{
    cofactor_sign, determinant_unchecked, minor_unchecked, require_square, warn_if_large,
};
use crate::ops::linalg::transpose::try_transpose_op;

/// Relative singularity threshold used by [`inverse_op`].
///
/// A matrix is singular when `|det| <= SINGULARITY_EPSILON * Π_i ‖row_i‖₂`.
/// The right-hand product is Hadamard's bound on `|det|`, so the test does not
/// depend on the scale of the entries. Exactly singular `f32` inputs leave a
/// rounding residue of around `1e-7` of that bound.
pub const SINGULARITY_EPSILON: f32 = 1e-5;

/// Product of the Euclidean row norms, accumulated in `f64` so it cannot
/// overflow for any finite `f32` input of practical size.
fn hadamard_bound(m: &Matrix) -> f64 {
    (0..m.rows())
        .map(|r| {
            m.row_slice(r)
                .iter()
                .map(|&x| f64::from(x) * f64::from(x))
                .sum::<f64>()
                .sqrt()
        })
        .product()
}

fn cofactor_unchecked(m: &Matrix) -> Result<Matrix, MatrixError> {
    let n = m.rows();
    let mut result = Matrix::new(n, n)?;
    if n == 1 {
        // The minor of a 1x1 matrix is empty, with determinant 1.
        result.as_mut_slice()[0] = 1.0;
        return Ok(result);
    }
    let out = result.as_mut_slice();
    for i in 0..n {
        for j in 0..n {
            let minor = minor_unchecked(m, i, j)?;
            out[i * n + j] = cofactor_sign(i, j) * determinant_unchecked(&minor)?;
        }
    }
    Ok(result)
}

/// Matrix of cofactors: entry `(i, j)` is `(-1)^(i+j) * det(minor(i, j))`.
///
/// # Errors
/// `InvalidShape` if `m` is not square.
pub fn cofactor_op(m: &Matrix) -> Result<Matrix, MatrixError> {
    let n = require_square(m, "cofactor")?;
    warn_if_large(n, "cofactor");
    cofactor_unchecked(m)
}

/// Classical adjoint (adjugate): the transpose of the cofactor matrix.
pub fn adjoint_op(m: &Matrix) -> Result<Matrix, MatrixError> {
    let n = require_square(m, "adjoint")?;
    warn_if_large(n, "adjoint");
    try_transpose_op(&cofactor_unchecked(m)?)
}

/// Inverse computed as `adjoint(m) / det(m)`.
///
/// `epsilon` is relative: `m` is singular when `|det|` is at most `epsilon`
/// times the product of its row norms. A NaN determinant is always singular.
///
/// # Errors
/// * `InvalidShape` if `m` is not square.
/// * `SingularMatrix` if the determinant is negligible at the scale of `m`.
pub fn inverse_with_epsilon_op(m: &Matrix, epsilon: f32) -> Result<Matrix, MatrixError> {
    let n = require_square(m, "inverse")?;
    warn_if_large(n, "inverse");
    let det = determinant_unchecked(m)?;
    let threshold = f64::from(epsilon) * hadamard_bound(m);
    if !(f64::from(det).abs() > threshold) {
        log::debug!("inverse: rejecting {}x{} matrix with determinant {}", n, n, det);
        return Err(MatrixError::SingularMatrix { determinant: det });
    }
    let mut result = try_transpose_op(&cofactor_unchecked(m)?)?;
    result.mul_scalar_(1.0 / det);
    Ok(result)
}

/// Inverse using [`SINGULARITY_EPSILON`] as the singularity threshold.
pub fn inverse_op(m: &Matrix) -> Result<Matrix, MatrixError> {
    inverse_with_epsilon_op(m, SINGULARITY_EPSILON)
}

impl Matrix {
    /// See [`cofactor_op`].
    pub fn cofactor(&self) -> Result<Matrix, MatrixError> {
        cofactor_op(self)
    }

    pub fn adjoint(&self) -> Result<Matrix, MatrixError> {
        adjoint_op(self)
    }

    /// See [`inverse_op`].
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        inverse_op(self)
    }

    /// See [`inverse_with_epsilon_op`].
    pub fn inverse_with_epsilon(&self, epsilon: f32) -> Result<Matrix, MatrixError> {
        inverse_with_epsilon_op(self, epsilon)
    }
}

#[cfg(test)]
#[path = "inverse_test.rs"]
mod tests;
