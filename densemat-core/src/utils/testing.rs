use crate::matrix::Matrix;

/// Checks that a matrix has the expected shape and that every element is
/// within `tolerance` of `expected_data`.
/// Panics with the first mismatching index otherwise.
pub fn check_matrix_near(
    actual: &Matrix,
    expected_shape: (usize, usize),
    expected_data: &[f32],
    tolerance: f32,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert_eq!(
        actual.numel(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual.as_slice().iter().zip(expected_data.iter()).enumerate() {
        let diff = (*a - *e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Helper to build a test matrix from literal data.
pub fn create_test_matrix(data: Vec<f32>, rows: usize, cols: usize) -> Matrix {
    Matrix::from_vec(data, rows, cols).expect("Failed to create test matrix")
}
