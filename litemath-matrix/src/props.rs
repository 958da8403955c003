//! Trace, minors, determinant and adjugate

use tracing::debug;
use crate::error::{MatrixError, Result};
use crate::types::{DenseMatrix, StorageOrder};

impl DenseMatrix {
    fn check_square(&self, op: &'static str) -> Result<usize> {
        if !self.is_square() {
            return Err(MatrixError::not_square(op, self.rows, self.cols));
        }
        Ok(self.rows)
    }

    /// Sum of the diagonal elements
    pub fn trace(&self) -> Result<f64> {
        let n = self.check_square("trace")?;
        Ok((0..n).map(|i| self.at(i, i)).sum())
    }

    /// Submatrix with `row` and `col` deleted, in the same storage order
    pub fn minor(&self, row: usize, col: usize) -> Result<DenseMatrix> {
        if self.rows <= 1 || self.cols <= 1 {
            return Err(MatrixError::TooSmall { rows: self.rows, cols: self.cols });
        }
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(DenseMatrix::from_fn(self.rows - 1, self.cols - 1, self.order, |i, j| {
            let src_row = if i < row { i } else { i + 1 };
            let src_col = if j < col { j } else { j + 1 };
            self.at(src_row, src_col)
        }))
    }

    /// Determinant by cofactor expansion
    ///
    /// Sizes 1 to 3 use closed forms. Larger matrices expand recursively along
    /// the first row, which costs O(n!).
    pub fn determinant(&self) -> Result<f64> {
        let n = self.check_square("determinant")?;
        let a = |i, j| self.at(i, j);

        match n {
            1 => Ok(a(0, 0)),
            2 => Ok(a(0, 0) * a(1, 1) - a(0, 1) * a(1, 0)),
            3 => Ok(a(0, 0) * (a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1))
                - a(0, 1) * (a(1, 0) * a(2, 2) - a(1, 2) * a(2, 0))
                + a(0, 2) * (a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0))),
            _ => {
                debug!(size = n, "determinant: cofactor expansion along row 0");
                let mut sum = 0.0;
                for j in 0..n {
                    let codet = self.minor(0, j)?.determinant()?;
                    let signed = if j % 2 == 0 { codet } else { -codet };
                    sum += a(0, j) * signed;
                }
                Ok(sum)
            }
        }
    }

    /// Signed cofactor `(-1)^(row+col) * det(minor(row, col))`
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64> {
        self.check_square("cofactor")?;
        let det = self.minor(row, col)?.determinant()?;
        Ok(if (row + col) % 2 == 0 { det } else { -det })
    }

    /// Transposed cofactor matrix, row-major
    ///
    /// Satisfies `self × adj = det(self) × I` for every square matrix.
    pub fn adjugate(&self) -> Result<DenseMatrix> {
        let n = self.check_square("adjugate")?;
        if n == 1 {
            return Ok(DenseMatrix::identity(1));
        }

        let mut adj = DenseMatrix::new(n, n, StorageOrder::RowMajor);
        for i in 0..n {
            for j in 0..n {
                adj.set(j, i, self.cofactor(i, j)?)?;
            }
        }
        Ok(adj)
    }
}
