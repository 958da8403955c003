//! Structured errors for matrix operations
//!
//! Every shape-sensitive operation checks its preconditions up front and
//! fails before touching any buffer, so an error never leaves a partial result.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const NOT_SQUARE: &str = "NOT_SQUARE";
    pub const SIZE_MISMATCH: &str = "SIZE_MISMATCH";
    pub const TOO_SMALL: &str = "TOO_SMALL";
    pub const NOT_IMPLEMENTED: &str = "NOT_IMPLEMENTED";
    pub const INDEX_OUT_OF_BOUNDS: &str = "INDEX_OUT_OF_BOUNDS";
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const NO_CONVERGENCE: &str = "NO_CONVERGENCE";
}

/// Result type alias using [`MatrixError`]
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors raised by [`DenseMatrix`](crate::DenseMatrix) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Trace, determinant or characteristic polynomial on a non-square matrix
    #[error("not square: {op} requires a square matrix, got {rows}×{cols}")]
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },

    /// Algebraic combination of incompatibly shaped operands
    #[error("size not match: {op} got {}×{} and {}×{}", .left.0, .left.1, .right.0, .right.1)]
    SizeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Minor extraction on a matrix with a single row or column
    #[error("too small: cannot take a minor of a {rows}×{cols} matrix")]
    TooSmall { rows: usize, cols: usize },

    /// Operation not supported for this size
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// Logical position outside the matrix
    #[error("index ({row}, {col}) out of bounds for {rows}×{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Argument outside the accepted domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Iterative decomposition failed to converge
    #[error("{0} did not converge")]
    NoConvergence(&'static str),
}

impl MatrixError {
    pub(crate) fn not_square(op: &'static str, rows: usize, cols: usize) -> Self {
        MatrixError::NotSquare { op, rows, cols }
    }

    pub(crate) fn size_mismatch(
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        MatrixError::SizeMismatch { op, left, right }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            MatrixError::NotSquare { .. } => codes::NOT_SQUARE,
            MatrixError::SizeMismatch { .. } => codes::SIZE_MISMATCH,
            MatrixError::TooSmall { .. } => codes::TOO_SMALL,
            MatrixError::NotImplemented(_) => codes::NOT_IMPLEMENTED,
            MatrixError::IndexOutOfBounds { .. } => codes::INDEX_OUT_OF_BOUNDS,
            MatrixError::InvalidArgument(_) => codes::INVALID_ARGUMENT,
            MatrixError::NoConvergence(_) => codes::NO_CONVERGENCE,
        }
    }
}
