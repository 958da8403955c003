//! Litemath Axis - principal axis and best-fit normal of 3-D samples
//!
//! Pipeline: centroid → recentre → optional rescale → covariance →
//! characteristic polynomial → eigenvalues → eigenvectors through a
//! [`PseudoInverse`](litemath_matrix::PseudoInverse) provider.

mod error;
mod config;
mod samples;
mod eigen;
mod analysis;

pub use error::{AxisError, Result};
pub use config::AxisConfig;
pub use samples::{centroid, covariance, recenter, rescale, to_vectors};
pub use eigen::{eigenvalues, eigenvector, EigenPair};
pub use analysis::{analyze, analyze_with, AxisAnalysis};
