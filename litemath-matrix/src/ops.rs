//! Matrix algebra
//!
//! `*_in_place` methods mutate the receiver and return it for chaining;
//! the other forms return a new matrix. Products and sums read elements by
//! logical position, so operands may use different storage orders.
//! New results are row-major.

use crate::error::{MatrixError, Result};
use crate::types::{DenseMatrix, StorageOrder};

// ============================================================================
// Products
// ============================================================================

/// lhs × rhs, assuming dimensions were already checked
fn product(lhs: &DenseMatrix, rhs: &DenseMatrix) -> DenseMatrix {
    let inner = lhs.cols;
    DenseMatrix::from_fn(lhs.rows, rhs.cols, StorageOrder::RowMajor, |i, j| {
        (0..inner).map(|k| lhs.at(i, k) * rhs.at(k, j)).sum()
    })
}

impl DenseMatrix {
    /// New matrix `self × rhs`
    pub fn multiply_right(&self, rhs: &DenseMatrix) -> Result<DenseMatrix> {
        if self.cols != rhs.rows {
            return Err(MatrixError::size_mismatch("multiply_right", self.shape(), rhs.shape()));
        }
        Ok(product(self, rhs))
    }

    /// New matrix `lhs × self`
    pub fn multiply_left(&self, lhs: &DenseMatrix) -> Result<DenseMatrix> {
        if lhs.cols != self.rows {
            return Err(MatrixError::size_mismatch("multiply_left", lhs.shape(), self.shape()));
        }
        Ok(product(lhs, self))
    }

    /// General product `self × other`
    pub fn multiply(&self, other: &DenseMatrix) -> Result<DenseMatrix> {
        if self.cols != other.rows {
            return Err(MatrixError::size_mismatch("multiply", self.shape(), other.shape()));
        }
        Ok(product(self, other))
    }

    // ========================================================================
    // Sums
    // ========================================================================

    fn check_same_shape(&self, other: &DenseMatrix, op: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::size_mismatch(op, self.shape(), other.shape()));
        }
        Ok(())
    }

    /// `self = self * self_coeff + other * other_coeff`, in place
    pub fn add_scaled_in_place(
        &mut self,
        other: &DenseMatrix,
        other_coeff: f64,
        self_coeff: f64,
    ) -> Result<&mut Self> {
        self.check_same_shape(other, "add")?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                let offset = self.offset(i, j);
                self.data[offset] = self.data[offset] * self_coeff + other.at(i, j) * other_coeff;
            }
        }
        Ok(self)
    }

    /// `self += other`
    pub fn add_in_place(&mut self, other: &DenseMatrix) -> Result<&mut Self> {
        self.add_scaled_in_place(other, 1.0, 1.0)
    }

    /// `self -= other`
    pub fn sub_in_place(&mut self, other: &DenseMatrix) -> Result<&mut Self> {
        self.add_scaled_in_place(other, -1.0, 1.0)
    }

    /// New matrix `self * self_coeff + other * other_coeff`
    pub fn added_scaled(
        &self,
        other: &DenseMatrix,
        other_coeff: f64,
        self_coeff: f64,
    ) -> Result<DenseMatrix> {
        self.check_same_shape(other, "add")?;
        Ok(DenseMatrix::from_fn(self.rows, self.cols, StorageOrder::RowMajor, |i, j| {
            self.at(i, j) * self_coeff + other.at(i, j) * other_coeff
        }))
    }

    /// New matrix `self + other`
    pub fn added(&self, other: &DenseMatrix) -> Result<DenseMatrix> {
        self.added_scaled(other, 1.0, 1.0)
    }

    // ========================================================================
    // Elementwise
    // ========================================================================

    /// Multiply every element by `k`, in place
    pub fn scale_in_place(&mut self, k: f64) -> &mut Self {
        self.data.iter_mut().for_each(|x| *x *= k);
        self
    }

    /// New matrix with every element multiplied by `k`
    pub fn scaled(&self, k: f64) -> DenseMatrix {
        let mut m = self.clone();
        m.scale_in_place(k);
        m
    }

    /// Keep the larger of each pair of flat-buffer elements, in place
    ///
    /// Only the first `min(len, other.len)` elements are compared.
    pub fn max_in_place(&mut self, other: &DenseMatrix) -> &mut Self {
        self.data
            .iter_mut()
            .zip(other.data.iter())
            .for_each(|(a, &b)| *a = a.max(b));
        self
    }

    /// Keep the smaller of each pair of flat-buffer elements, in place
    pub fn min_in_place(&mut self, other: &DenseMatrix) -> &mut Self {
        self.data
            .iter_mut()
            .zip(other.data.iter())
            .for_each(|(a, &b)| *a = a.min(b));
        self
    }

    pub fn componentwise_max(&self, other: &DenseMatrix) -> DenseMatrix {
        let mut m = self.clone();
        m.max_in_place(other);
        m
    }

    pub fn componentwise_min(&self, other: &DenseMatrix) -> DenseMatrix {
        let mut m = self.clone();
        m.min_in_place(other);
        m
    }

    /// Replace every element with its absolute value
    pub fn abs_in_place(&mut self) -> &mut Self {
        self.data.iter_mut().for_each(|x| *x = x.abs());
        self
    }

    /// Largest element of the flat buffer
    pub fn max_element(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}
