//! Errors for the principal axis pipeline

use litemath_matrix::MatrixError;
use thiserror::Error;

/// Result type alias using [`AxisError`]
pub type Result<T> = std::result::Result<T, AxisError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AxisError {
    #[error("no samples: at least one 3-D point is required")]
    NoSamples,

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl AxisError {
    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            AxisError::NoSamples => "NO_SAMPLES",
            AxisError::Matrix(e) => e.code(),
        }
    }
}
