//! Vector operations over the flat buffer

use crate::error::{MatrixError, Result};
use crate::types::{DenseMatrix, StorageOrder};

impl DenseMatrix {
    /// Sum of elementwise products over the first `min(len, other.len)` elements
    pub fn dot(&self, other: &DenseMatrix) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Euclidean norm of the flat buffer
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Divide every element by the norm, in place; all-zero stays all-zero
    pub fn normalize_in_place(&mut self) -> &mut Self {
        let sum: f64 = self.data.iter().map(|x| x * x).sum();
        if sum != 0.0 {
            let k = 1.0 / sum.sqrt();
            self.scale_in_place(k);
        }
        self
    }

    pub fn normalized(&self) -> DenseMatrix {
        let mut m = self.clone();
        m.normalize_in_place();
        m
    }

    /// 3-D cross product as a new 3×1 vector
    pub fn cross(&self, other: &DenseMatrix) -> Result<DenseMatrix> {
        if self.len() != 3 || other.len() != 3 {
            return Err(MatrixError::size_mismatch("cross", self.shape(), other.shape()));
        }
        let a = &self.data;
        let b = &other.data;
        Ok(DenseMatrix::vector3(
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ))
    }

    /// Column `col` as a new rows×1 vector
    pub fn column(&self, col: usize) -> Option<DenseMatrix> {
        if col >= self.cols {
            return None;
        }
        Some(DenseMatrix::from_fn(self.rows, 1, StorageOrder::RowMajor, |i, _| self.at(i, col)))
    }

    /// Row `row` as a new 1×cols matrix
    pub fn row(&self, row: usize) -> Option<DenseMatrix> {
        if row >= self.rows {
            return None;
        }
        Some(DenseMatrix::from_fn(1, self.cols, StorageOrder::RowMajor, |_, j| self.at(row, j)))
    }

    /// Every element is exactly zero
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_truncates() {
        let a = DenseMatrix::vector3(1.0, 2.0, 3.0);
        let b = DenseMatrix::vector2(4.0, 5.0);
        assert_eq!(a.dot(&b), 14.0);
        assert_eq!(a.dot(&a), 14.0);
    }

    #[test]
    fn test_normalize() {
        let mut v = DenseMatrix::vector3(3.0, 0.0, 4.0);
        v.normalize_in_place();
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v[(0, 0)] - 0.6).abs() < 1e-12);
        assert!((v[(2, 0)] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        let v = DenseMatrix::vector(3).normalized();
        assert!(v.is_zero());
        assert!(v.as_slice().iter().all(|x| !x.is_nan()));
    }

    #[test]
    fn test_cross() {
        let x = DenseMatrix::vector3(1.0, 0.0, 0.0);
        let y = DenseMatrix::vector3(0.0, 1.0, 0.0);
        let z = x.cross(&y).unwrap();
        assert_eq!(z.shape(), (3, 1));
        assert_eq!(z.as_slice(), &[0.0, 0.0, 1.0]);

        let c = DenseMatrix::vector3(1.0, 2.0, 3.0).cross(&DenseMatrix::vector3(4.0, 5.0, 6.0)).unwrap();
        assert_eq!(c.as_slice(), &[-3.0, 6.0, -3.0]);
    }

    #[test]
    fn test_cross_requires_three_elements() {
        let a = DenseMatrix::vector2(1.0, 0.0);
        let b = DenseMatrix::vector3(0.0, 1.0, 0.0);
        assert_eq!(a.cross(&b).unwrap_err().code(), "SIZE_MISMATCH");
    }

    #[test]
    fn test_column_and_row() {
        let m = DenseMatrix::with_data(2, 3, StorageOrder::ColumnMajor, &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        let c = m.column(1).unwrap();
        assert_eq!(c.shape(), (2, 1));
        assert_eq!(c.as_slice(), &[2.0, 5.0]);

        let r = m.row(1).unwrap();
        assert_eq!(r.shape(), (1, 3));
        assert_eq!(r.as_slice(), &[4.0, 5.0, 6.0]);

        assert!(m.column(3).is_none());
        assert!(m.row(2).is_none());
    }

    #[test]
    fn test_is_zero() {
        assert!(DenseMatrix::matrix3().is_zero());
        assert!(!DenseMatrix::identity3().is_zero());
    }
}
