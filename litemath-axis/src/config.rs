//! Analysis settings

use serde::{Deserialize, Serialize};
use litemath_matrix::DEFAULT_TOLERANCE;

/// Tunables for [`analyze`](crate::analyze)
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// Divide recentred samples by their largest absolute component
    pub rescale: bool,
    /// Threshold for a zero constant term, a zero eigenvector column and a
    /// negligible negative discriminant
    pub zero_tolerance: f64,
    /// Determinant threshold of the adjugate inverse
    pub inverse_tolerance: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        AxisConfig {
            rescale: true,
            zero_tolerance: 1e-10,
            inverse_tolerance: DEFAULT_TOLERANCE,
        }
    }
}
