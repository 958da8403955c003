//! Matrix construction and reshaping
//!
//! Every constructor returns an independent matrix. Fixed-size shapes
//! (2×2, 3×3, 4×4 and 2-, 3-, 4-vectors) are plain factories over the same type.

use crate::types::{DenseMatrix, StorageOrder};

impl DenseMatrix {
    /// Zero-filled rows×cols matrix
    ///
    /// A zero dimension is raised to 1 so the buffer is never empty.
    pub fn new(rows: usize, cols: usize, order: StorageOrder) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        DenseMatrix {
            rows,
            cols,
            order,
            data: vec![0.0; rows * cols],
        }
    }

    /// Zero-filled matrix with `values` copied into the flat buffer
    ///
    /// Values beyond the buffer are ignored; missing values stay zero.
    pub fn with_data(rows: usize, cols: usize, order: StorageOrder, values: &[f64]) -> Self {
        let mut m = DenseMatrix::new(rows, cols, order);
        m.set_from_slice(values);
        m
    }

    /// Build from a function of the logical position
    pub fn from_fn<F>(rows: usize, cols: usize, order: StorageOrder, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut m = DenseMatrix::new(rows, cols, order);
        for i in 0..m.rows {
            for j in 0..m.cols {
                let offset = m.offset(i, j);
                m.data[offset] = f(i, j);
            }
        }
        m
    }

    /// Build a row-major matrix from nested rows
    ///
    /// Short rows are zero-padded to the longest row.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(1);
        DenseMatrix::from_fn(rows.len(), cols, StorageOrder::RowMajor, |i, j| {
            rows.get(i).and_then(|r| r.get(j)).copied().unwrap_or(0.0)
        })
    }

    /// dim×dim identity
    pub fn identity(dim: usize) -> Self {
        DenseMatrix::scaled_identity(dim, 1.0)
    }

    /// dim×dim matrix with `coefficient` on the diagonal, row-major
    pub fn scaled_identity(dim: usize, coefficient: f64) -> Self {
        let mut m = DenseMatrix::new(dim, dim, StorageOrder::RowMajor);
        let stride = m.cols + 1;
        for i in 0..m.rows {
            m.data[stride * i] = coefficient;
        }
        m
    }

    pub fn matrix2() -> Self {
        DenseMatrix::new(2, 2, StorageOrder::RowMajor)
    }

    pub fn matrix3() -> Self {
        DenseMatrix::new(3, 3, StorageOrder::RowMajor)
    }

    pub fn matrix4() -> Self {
        DenseMatrix::new(4, 4, StorageOrder::RowMajor)
    }

    pub fn identity2() -> Self {
        DenseMatrix::identity(2)
    }

    pub fn identity3() -> Self {
        DenseMatrix::identity(3)
    }

    pub fn identity4() -> Self {
        DenseMatrix::identity(4)
    }

    /// Zero n×1 column vector
    pub fn vector(n: usize) -> Self {
        DenseMatrix::new(n, 1, StorageOrder::RowMajor)
    }

    /// n×1 column vector holding `values`
    pub fn column_vector(values: &[f64]) -> Self {
        DenseMatrix::with_data(values.len(), 1, StorageOrder::RowMajor, values)
    }

    pub fn vector2(x: f64, y: f64) -> Self {
        DenseMatrix::column_vector(&[x, y])
    }

    pub fn vector3(x: f64, y: f64, z: f64) -> Self {
        DenseMatrix::column_vector(&[x, y, z])
    }

    pub fn vector4(x: f64, y: f64, z: f64, w: f64) -> Self {
        DenseMatrix::column_vector(&[x, y, z, w])
    }

    /// Copy `min(len, values.len())` values into the flat buffer, in place
    pub fn set_from_slice(&mut self, values: &[f64]) -> &mut Self {
        let num = self.data.len().min(values.len());
        self.data[..num].copy_from_slice(&values[..num]);
        self
    }

    /// Mathematical transpose
    ///
    /// The buffer is reused as is: swapping the shape and flipping the storage
    /// order describes exactly the transposed matrix.
    pub fn transpose(&self) -> Self {
        DenseMatrix {
            rows: self.cols,
            cols: self.rows,
            order: self.order.flipped(),
            data: self.data.clone(),
        }
    }

    /// Same logical matrix laid out in `order`
    pub fn with_storage_order(&self, order: StorageOrder) -> Self {
        if order == self.order {
            return self.clone();
        }
        DenseMatrix::from_fn(self.rows, self.cols, order, |i, j| self.at(i, j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero_filled() {
        let m = DenseMatrix::new(2, 3, StorageOrder::ColumnMajor);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.len(), 6);
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_zero_dimension_raised_to_one() {
        let m = DenseMatrix::new(0, 4, StorageOrder::RowMajor);
        assert_eq!(m.shape(), (1, 4));
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn test_with_data_truncates() {
        let m = DenseMatrix::with_data(2, 2, StorageOrder::RowMajor, &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

        let m = DenseMatrix::with_data(2, 2, StorageOrder::RowMajor, &[7.0]);
        assert_eq!(m.as_slice(), &[7.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_set_from_slice_leaves_tail() {
        let mut m = DenseMatrix::with_data(1, 3, StorageOrder::RowMajor, &[1.0, 1.0, 1.0]);
        m.set_from_slice(&[5.0, 6.0]).scale_in_place(2.0);
        assert_eq!(m.as_slice(), &[10.0, 12.0, 2.0]);
    }

    #[test]
    fn test_identity() {
        let m = DenseMatrix::scaled_identity(3, 2.5);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 2.5 } else { 0.0 };
                assert_eq!(m.get(i, j), Some(expected));
            }
        }
        assert_eq!(DenseMatrix::identity4().trace().unwrap(), 4.0);
    }

    #[test]
    fn test_fixed_size_factories() {
        assert_eq!(DenseMatrix::matrix2().shape(), (2, 2));
        assert_eq!(DenseMatrix::matrix3().shape(), (3, 3));
        assert_eq!(DenseMatrix::matrix4().shape(), (4, 4));
        assert_eq!(DenseMatrix::vector(5).shape(), (5, 1));

        let v = DenseMatrix::vector4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.shape(), (4, 1));
        assert_eq!(v.get(3, 0), Some(4.0));
        assert!(DenseMatrix::vector2(0.0, 1.0).is_vector());
    }

    #[test]
    fn test_from_rows_pads() {
        let m = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.get(1, 1), Some(0.0));
    }

    #[test]
    fn test_transpose() {
        let m = DenseMatrix::with_data(2, 3, StorageOrder::RowMajor, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.order(), StorageOrder::ColumnMajor);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m.get(i, j), t.get(j, i));
            }
        }

        let back = t.transpose();
        assert_eq!(back, m);
    }

    #[test]
    fn test_storage_order_roundtrip() {
        let m = DenseMatrix::with_data(3, 2, StorageOrder::RowMajor, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let c = m.with_storage_order(StorageOrder::ColumnMajor);
        assert_eq!(c.as_slice(), &[1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);

        let r = c.with_storage_order(StorageOrder::RowMajor);
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(r.get(i, j), m.get(i, j));
            }
        }
        assert_eq!(r, m);
    }

    #[test]
    fn test_with_same_order_is_clone() {
        let m = DenseMatrix::identity3();
        assert_eq!(m.with_storage_order(StorageOrder::RowMajor), m);
    }
}
