// src/ops/arithmetic/scalar.rs

use crate::matrix::Matrix;

/// Multiplies every element of `m` by `scalar`.
pub fn mul_scalar_op_inplace(m: &mut Matrix, scalar: f32) {
    m.as_mut_slice().iter_mut().for_each(|x| *x *= scalar);
}

/// Adds `scalar` to every element of `m`.
pub fn add_scalar_op_inplace(m: &mut Matrix, scalar: f32) {
    m.as_mut_slice().iter_mut().for_each(|x| *x += scalar);
}

/// Returns `m * scalar` as a new matrix. Infallible, so the result buffer is
/// allocated like `Clone` and the process aborts if memory runs out.
pub fn mul_scalar_op(m: &Matrix, scalar: f32) -> Matrix {
    let mut result = m.clone();
    mul_scalar_op_inplace(&mut result, scalar);
    result
}

/// Returns `m + scalar` as a new matrix. Aborts on out-of-memory, like
/// [`mul_scalar_op`].
pub fn add_scalar_op(m: &Matrix, scalar: f32) -> Matrix {
    let mut result = m.clone();
    add_scalar_op_inplace(&mut result, scalar);
    result
}

impl Matrix {
    /// Returns `self * scalar`.
    pub fn mul_scalar(&self, scalar: f32) -> Matrix {
        mul_scalar_op(self, scalar)
    }

    /// `self *= scalar`.
    pub fn mul_scalar_(&mut self, scalar: f32) {
        mul_scalar_op_inplace(self, scalar)
    }

    /// Returns `self + scalar`.
    pub fn add_scalar(&self, scalar: f32) -> Matrix {
        add_scalar_op(self, scalar)
    }

    /// `self += scalar`.
    pub fn add_scalar_(&mut self, scalar: f32) {
        add_scalar_op_inplace(self, scalar)
    }
}
