// src/matrix/create.rs

use crate::error::MatrixError;
use crate::matrix::{alloc_storage, checked_numel, Matrix};

use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

impl Matrix {
    /// Creates a `rows x cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Matrix::new(rows, cols)
    }

    /// Creates a `rows x cols` matrix filled with `value`.
    pub fn full(rows: usize, cols: usize, value: f32) -> Result<Self, MatrixError> {
        let numel = checked_numel(rows, cols, "full")?;
        let data = alloc_storage(numel, value)?;
        Ok(Matrix::from_parts(rows, cols, data))
    }

    /// Creates an identity matrix. `rows` and `cols` must be equal.
    ///
    /// # Errors
    /// `InvalidShape` for zero or non-square dimensions.
    pub fn identity(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows != cols {
            return Err(MatrixError::InvalidShape {
                rows,
                cols,
                operation: "identity (square required)".to_string(),
            });
        }
        Matrix::eye(rows)
    }

    /// Creates the `n x n` identity matrix.
    pub fn eye(n: usize) -> Result<Self, MatrixError> {
        let mut m = Matrix::new(n, n)?;
        for i in 0..n {
            m.as_mut_slice()[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Creates a matrix with elements drawn uniformly from `[min, max]`
    /// using the thread-local RNG.
    ///
    /// # Errors
    /// * `InvalidShape` for zero dimensions.
    /// * `InvalidRange` if `min > max`, a bound is NaN, or `max - min`
    ///   overflows.
    pub fn uniform(rows: usize, cols: usize, min: f32, max: f32) -> Result<Self, MatrixError> {
        let mut rng = rand::thread_rng();
        Matrix::uniform_with_rng(rows, cols, min, max, &mut rng)
    }

    /// Same as [`Matrix::uniform`], drawing from a caller-supplied generator.
    pub fn uniform_with_rng<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        min: f32,
        max: f32,
        rng: &mut R,
    ) -> Result<Self, MatrixError> {
        // Also rejects NaN bounds, for which every comparison is false.
        if !(min <= max) || !(max - min).is_finite() {
            return Err(MatrixError::InvalidRange { min, max });
        }
        let mut m = Matrix::new(rows, cols)?;
        let distribution = Uniform::new_inclusive(min, max);
        for x in m.as_mut_slice() {
            *x = distribution.sample(rng);
        }
        Ok(m)
    }

    /// Creates a matrix of independent standard normal samples using the
    /// thread-local RNG.
    ///
    /// Samples come from [`rand_distr::StandardNormal`], which uses the
    /// Ziggurat method.
    pub fn gaussian(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let mut rng = rand::thread_rng();
        Matrix::gaussian_with_rng(rows, cols, &mut rng)
    }

    /// Same as [`Matrix::gaussian`], drawing from a caller-supplied generator.
    pub fn gaussian_with_rng<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, MatrixError> {
        let mut m = Matrix::new(rows, cols)?;
        for x in m.as_mut_slice() {
            *x = StandardNormal.sample(rng);
        }
        Ok(m)
    }

    /// Creates a matrix that takes ownership of a row-major buffer.
    ///
    /// # Errors
    /// * `InvalidShape` for zero dimensions.
    /// * `SizeMismatch` if `values.len() != rows * cols`.
    pub fn from_vec(values: Vec<f32>, rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let numel = checked_numel(rows, cols, "from_vec")?;
        if values.len() != numel {
            return Err(MatrixError::SizeMismatch {
                expected: numel,
                actual: values.len(),
                operation: "from_vec".to_string(),
            });
        }
        Ok(Matrix::from_parts(rows, cols, values))
    }

    /// Creates a matrix by copying a row-major slice.
    pub fn from_slice(values: &[f32], rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let numel = checked_numel(rows, cols, "from_slice")?;
        if values.len() != numel {
            return Err(MatrixError::SizeMismatch {
                expected: numel,
                actual: values.len(),
                operation: "from_slice".to_string(),
            });
        }
        let mut data = alloc_storage(numel, 0.0)?;
        data.copy_from_slice(values);
        Ok(Matrix::from_parts(rows, cols, data))
    }

    /// Returns a deep copy with independent storage.
    ///
    /// # Errors
    /// `AllocationFailure` if the new buffer cannot be allocated.
    pub fn copy(&self) -> Result<Self, MatrixError> {
        self.try_clone()
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
