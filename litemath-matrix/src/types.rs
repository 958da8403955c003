//! Core matrix type and storage layout

use std::fmt;
use std::ops::{Index, IndexMut};
use nalgebra::DMatrix;
use serde::{Serialize, Deserialize};
use crate::error::{MatrixError, Result};

/// Physical layout of the flat buffer
///
/// Row-major lists elements row by row (`1, 2, 3` across the first row),
/// column-major lists them column by column. The logical matrix is the same
/// under either layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StorageOrder {
    #[default]
    #[serde(rename = "row")]
    RowMajor,
    #[serde(rename = "col")]
    ColumnMajor,
}

impl StorageOrder {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "row" | "row-major" | "rowmajor" => Some(StorageOrder::RowMajor),
            "col" | "column" | "col-major" | "column-major" | "columnmajor" => {
                Some(StorageOrder::ColumnMajor)
            }
            _ => None,
        }
    }

    /// The other layout
    pub fn flipped(self) -> Self {
        match self {
            StorageOrder::RowMajor => StorageOrder::ColumnMajor,
            StorageOrder::ColumnMajor => StorageOrder::RowMajor,
        }
    }

    /// Flat offset of logical (row, col) in a rows×cols buffer
    #[inline]
    pub fn offset(self, rows: usize, cols: usize, row: usize, col: usize) -> usize {
        match self {
            StorageOrder::RowMajor => cols * row + col,
            StorageOrder::ColumnMajor => rows * col + row,
        }
    }
}

/// Dense rows×cols matrix of `f64` over one contiguous buffer
///
/// Vectors are matrices with a single column. The buffer always holds exactly
/// `rows * cols` elements; operations that change the shape build a new matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DenseMatrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) order: StorageOrder,
    pub(crate) data: Vec<f64>,
}

impl DenseMatrix {
    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn order(&self) -> StorageOrder {
        self.order
    }

    /// Number of elements in the flat buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: shapes are at least 1×1
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Single column (or single row)
    pub fn is_vector(&self) -> bool {
        self.cols == 1 || self.rows == 1
    }

    /// Flat buffer in storage order
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume into the flat buffer
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Element at logical (row, col), whatever the storage order
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.at(row, col))
        } else {
            None
        }
    }

    /// Set the element at logical (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<&mut Self> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(self)
    }

    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        self.order.offset(self.rows, self.cols, row, col)
    }

    /// Unchecked logical read; callers guarantee bounds
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> f64 {
        self.data[self.offset(row, col)]
    }

    /// Rows of the logical matrix as nested vectors
    pub fn to_nested_list(&self) -> Vec<Vec<f64>> {
        (0..self.rows)
            .map(|i| (0..self.cols).map(|j| self.at(i, j)).collect())
            .collect()
    }

    /// Convert to nalgebra DMatrix (for SVD based operations)
    pub fn to_dmatrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.rows, self.cols, |i, j| self.at(i, j))
    }

    /// Create from nalgebra DMatrix, row-major
    pub fn from_dmatrix(m: &DMatrix<f64>) -> Self {
        DenseMatrix::from_fn(m.nrows(), m.ncols(), StorageOrder::RowMajor, |i, j| m[(i, j)])
    }
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}×{} matrix",
            row, col, self.rows, self.cols
        );
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}×{} matrix",
            row, col, self.rows, self.cols
        );
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

impl From<&DenseMatrix> for DMatrix<f64> {
    fn from(m: &DenseMatrix) -> Self {
        m.to_dmatrix()
    }
}

impl From<&DMatrix<f64>> for DenseMatrix {
    fn from(m: &DMatrix<f64>) -> Self {
        DenseMatrix::from_dmatrix(m)
    }
}

impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.rows {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.4}", self.at(i, j))?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
