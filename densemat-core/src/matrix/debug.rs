// src/matrix/debug.rs
use crate::matrix::Matrix;
use std::fmt;

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix(shape=({}, {}), data={:?})", self.rows(), self.cols(), self.as_slice())
    }
}

/// Prints the shape on a header line, then one bracketed line per row.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix({} x {})", self.rows(), self.cols())?;
        for r in 0..self.rows() {
            write!(f, "[")?;
            for (c, value) in self.row_slice(r).iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, value)?,
                    None => write!(f, "{:.4}", value)?,
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

impl Matrix {
    /// Writes every element to stdout in row-major order.
    pub fn print_matrix(&self) {
        print!("{}", self);
    }

    /// Writes `(rows, cols)` to stdout.
    pub fn print_shape(&self) {
        println!("({}, {})", self.rows(), self.cols());
    }
}
