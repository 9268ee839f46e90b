// src/matrix/mod.rs

use crate::error::MatrixError;

pub mod create;
mod debug;

/// A dense `rows x cols` matrix of `f32` stored in row-major order.
///
/// Element `(r, c)` lives at `data[r * cols + c]`. Both dimensions are always
/// at least 1 and `data.len() == rows * cols`; every constructor and mutator
/// keeps that invariant, which is why the fields are private.
///
/// A `Matrix` exclusively owns its buffer. `Clone` performs a deep copy that
/// aborts if memory runs out; [`Matrix::copy`] reports `AllocationFailure`
/// instead. Operations that return a `Matrix` always return independent
/// storage.
#[derive(Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

/// Allocate-or-fail primitive behind every constructor.
///
/// Reports `AllocationFailure` when the buffer cannot be obtained instead of
/// aborting the process.
pub(crate) fn alloc_storage(len: usize, value: f32) -> Result<Vec<f32>, MatrixError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MatrixError::AllocationFailure { requested: len })?;
    data.resize(len, value);
    log::trace!("Allocated matrix storage for {} elements", len);
    Ok(data)
}

/// Checks that both dimensions are non-zero and returns their product.
pub(crate) fn checked_numel(rows: usize, cols: usize, operation: &str) -> Result<usize, MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidShape {
            rows,
            cols,
            operation: operation.to_string(),
        });
    }
    rows.checked_mul(cols)
        .ok_or(MatrixError::AllocationFailure { requested: usize::MAX })
}

impl Matrix {
    /// Allocates a `rows x cols` matrix with zero-initialized storage.
    ///
    /// # Errors
    /// * `InvalidShape` if either dimension is zero.
    /// * `AllocationFailure` if the storage cannot be allocated.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let numel = checked_numel(rows, cols, "new")?;
        let data = alloc_storage(numel, 0.0)?;
        Ok(Matrix { rows, cols, data })
    }

    /// Wraps an already validated buffer. Callers guarantee the invariant.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f32>) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert_eq!(data.len(), rows * cols);
        Matrix { rows, cols, data }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// `true` when `rows == cols`.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major view of the elements.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable row-major view of the elements. The length cannot change, so
    /// the shape invariant is preserved.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the matrix and returns its row-major buffer.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Returns the element at `(r, c)`.
    ///
    /// # Errors
    /// `IndexOutOfBounds` if `r >= rows` or `c >= cols`.
    pub fn get(&self, r: usize, c: usize) -> Result<f32, MatrixError> {
        let idx = self.flat_index(r, c)?;
        Ok(self.data[idx])
    }

    /// Sets the element at `(r, c)`. The matrix is unchanged on error.
    pub fn set(&mut self, r: usize, c: usize, value: f32) -> Result<(), MatrixError> {
        let idx = self.flat_index(r, c)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Sets every element to `value`.
    pub fn fill_(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Deep copy through the allocate-or-fail primitive. Every allocating
    /// operation that already returns a `Result` starts from this instead of
    /// `Clone`.
    pub(crate) fn try_clone(&self) -> Result<Matrix, MatrixError> {
        let mut data = alloc_storage(self.data.len(), 0.0)?;
        data.copy_from_slice(&self.data);
        Ok(Matrix::from_parts(self.rows, self.cols, data))
    }

    /// Explicitly releases the matrix and its storage.
    ///
    /// Equivalent to dropping it; provided so call sites can mark the end of
    /// a matrix's lifetime. The handle is consumed, so it cannot be used or
    /// released again.
    pub fn release(self) {
        drop(self);
    }

    pub(crate) fn flat_index(&self, r: usize, c: usize) -> Result<usize, MatrixError> {
        if r >= self.rows || c >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                index: vec![r, c],
                shape: self.shape(),
            });
        }
        Ok(r * self.cols + c)
    }

    pub(crate) fn check_row(&self, r: usize) -> Result<(), MatrixError> {
        if r >= self.rows {
            return Err(MatrixError::IndexOutOfBounds {
                index: vec![r],
                shape: self.shape(),
            });
        }
        Ok(())
    }

    /// Elements of row `r`. Callers have already validated `r`.
    pub(crate) fn row_slice(&self, r: usize) -> &[f32] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    pub(crate) fn row_slice_mut(&mut self, r: usize) -> &mut [f32] {
        let cols = self.cols;
        &mut self.data[r * cols..(r + 1) * cols]
    }

    /// Replaces the dimensions without touching the buffer. Callers guarantee
    /// `rows * cols == numel()`.
    pub(crate) fn set_dims(&mut self, rows: usize, cols: usize) {
        debug_assert_eq!(rows * cols, self.data.len());
        self.rows = rows;
        self.cols = cols;
    }

    pub(crate) fn check_same_shape(&self, other: &Matrix, operation: &str) -> Result<(), MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                expected: self.shape(),
                actual: other.shape(),
                operation: operation.to_string(),
            });
        }
        Ok(())
    }
}
