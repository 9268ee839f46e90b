// src/ops/arithmetic/elementwise.rs

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Combines `src` into `dest` element by element once shapes are validated.
/// Nothing is written when the shapes differ.
fn zip_inplace<F>(dest: &mut Matrix, src: &Matrix, operation: &str, f: F) -> Result<(), MatrixError>
where
    F: Fn(f32, f32) -> f32,
{
    dest.check_same_shape(src, operation)?;
    for (d, &s) in dest.as_mut_slice().iter_mut().zip(src.as_slice()) {
        *d = f(*d, s);
    }
    Ok(())
}

/// `dest += src`. Shapes must match exactly.
pub fn add_op_inplace(dest: &mut Matrix, src: &Matrix) -> Result<(), MatrixError> {
    zip_inplace(dest, src, "add", |a, b| a + b)
}

/// `dest -= src`. Shapes must match exactly.
pub fn sub_op_inplace(dest: &mut Matrix, src: &Matrix) -> Result<(), MatrixError> {
    zip_inplace(dest, src, "sub", |a, b| a - b)
}

/// `dest *= src` elementwise (Hadamard product). Shapes must match exactly.
pub fn hadamard_op_inplace(dest: &mut Matrix, src: &Matrix) -> Result<(), MatrixError> {
    zip_inplace(dest, src, "hadamard", |a, b| a * b)
}

/// Returns `a + b` as a new matrix.
pub fn add_op(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    a.check_same_shape(b, "add")?;
    let mut result = a.try_clone()?;
    add_op_inplace(&mut result, b)?;
    Ok(result)
}

/// Returns `a - b` as a new matrix.
pub fn sub_op(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    a.check_same_shape(b, "sub")?;
    let mut result = a.try_clone()?;
    sub_op_inplace(&mut result, b)?;
    Ok(result)
}

/// Returns the Hadamard product `a ∘ b` as a new matrix.
pub fn hadamard_op(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    a.check_same_shape(b, "hadamard")?;
    let mut result = a.try_clone()?;
    hadamard_op_inplace(&mut result, b)?;
    Ok(result)
}

impl Matrix {
    /// Elementwise sum. Fails with `ShapeMismatch` unless shapes are equal.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        add_op(self, other)
    }

    /// In-place elementwise sum (`self += other`). `self` is left untouched
    /// on error.
    pub fn add_(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        add_op_inplace(self, other)
    }

    /// Elementwise difference.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        sub_op(self, other)
    }

    /// In-place elementwise difference (`self -= other`).
    pub fn sub_(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        sub_op_inplace(self, other)
    }

    /// Elementwise (Hadamard) product.
    pub fn hadamard(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        hadamard_op(self, other)
    }

    /// In-place Hadamard product.
    pub fn hadamard_(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        hadamard_op_inplace(self, other)
    }
}

#[cfg(test)]
#[path = "elementwise_test.rs"]
mod tests;
