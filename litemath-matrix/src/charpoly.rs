//! Characteristic polynomial of small square matrices

use crate::error::{MatrixError, Result};
use crate::types::DenseMatrix;

impl DenseMatrix {
    /// Coefficients of `det(M - xI)`, constant term first
    ///
    /// - 1×1: `[a00, -1]`
    /// - 2×2: `[det, -trace, 1]`
    /// - 3×3: `[det, -(sum of principal 2×2 minors), trace, -1]`
    ///
    /// Larger sizes fail with `NotImplemented`.
    pub fn characteristic_coefficients(&self) -> Result<Vec<f64>> {
        if !self.is_square() {
            return Err(MatrixError::not_square("characteristic_coefficients", self.rows, self.cols));
        }
        let a = |i, j| self.at(i, j);

        match self.rows {
            1 => Ok(vec![a(0, 0), -1.0]),
            2 => Ok(vec![self.determinant()?, -self.trace()?, 1.0]),
            3 => {
                let off = a(0, 1) * a(1, 0) + a(0, 2) * a(2, 0) + a(1, 2) * a(2, 1);
                let diag = a(1, 1) * a(2, 2) + a(2, 2) * a(0, 0) + a(0, 0) * a(1, 1);
                Ok(vec![self.determinant()?, off - diag, self.trace()?, -1.0])
            }
            n => Err(MatrixError::NotImplemented(format!(
                "characteristic polynomial of a {}×{} matrix", n, n
            ))),
        }
    }
}
