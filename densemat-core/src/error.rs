use thiserror::Error;

/// Error type for every fallible matrix operation.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MatrixError {
    #[error("Invalid shape ({rows}, {cols}) for operation {operation}")]
    InvalidShape {
        rows: usize,
        cols: usize,
        operation: String,
    },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
        operation: String,
    },

    #[error("Size mismatch: expected {expected} elements, got {actual} during operation {operation}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: (usize, usize),
    },

    #[error("Invalid range: min {min} must not exceed max {max}")]
    InvalidRange { min: f32, max: f32 },

    #[error("Matrix is singular (determinant {determinant})")]
    SingularMatrix { determinant: f32 },

    #[error("Failed to allocate storage for {requested} elements")]
    AllocationFailure { requested: usize },

    #[error("Operation {operation} called on an empty matrix")]
    EmptyMatrix { operation: String },
}
