use crate::matrix::Matrix;
use approx::AbsDiffEq;

/// Returns `true` when `a` and `b` have the same shape and every pair of
/// elements differs by at most `tolerance`.
///
/// NaN never compares equal to anything, including another NaN.
pub fn equal_with_tolerance_op(a: &Matrix, b: &Matrix, tolerance: f32) -> bool {
    if a.shape() != b.shape() {
        return false;
    }
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .all(|(x, y)| x.abs_diff_eq(y, tolerance))
}

impl Matrix {
    /// See [`equal_with_tolerance_op`].
    pub fn equals_with_tolerance(&self, other: &Matrix, tolerance: f32) -> bool {
        equal_with_tolerance_op(self, other, tolerance)
    }
}
