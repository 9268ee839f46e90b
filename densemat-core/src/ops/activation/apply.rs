use crate::matrix::Matrix;

/// Replaces every element `x` of `m` with `f(x)`, in row-major order.
pub fn apply_op_inplace<F>(m: &mut Matrix, mut f: F)
where
    F: FnMut(f32) -> f32,
{
    for x in m.as_mut_slice() {
        *x = f(*x);
    }
}

/// Returns a new matrix holding `f(x)` for every element of `m`.
///
/// Infallible: the result is a `Clone` of `m`, so running out of memory
/// aborts the process.
pub fn apply_op<F>(m: &Matrix, f: F) -> Matrix
where
    F: FnMut(f32) -> f32,
{
    let mut result = m.clone();
    apply_op_inplace(&mut result, f);
    result
}

impl Matrix {
    /// Applies a scalar function elementwise, returning a new matrix.
    ///
    /// ```
    /// use densemat_core::{relu, Matrix};
    /// # fn main() -> Result<(), densemat_core::MatrixError> {
    /// let m = Matrix::from_vec(vec![-1.0, 2.0], 1, 2)?;
    /// assert_eq!(m.apply(relu).as_slice(), &[0.0, 2.0]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn apply<F>(&self, f: F) -> Matrix
    where
        F: FnMut(f32) -> f32,
    {
        apply_op(self, f)
    }

    /// Applies a scalar function elementwise in place.
    pub fn apply_<F>(&mut self, f: F)
    where
        F: FnMut(f32) -> f32,
    {
        apply_op_inplace(self, f)
    }
}
