//! Eigenvalues and eigenvectors of a 3×3 covariance matrix

use serde::Serialize;
use tracing::{debug, warn};
use litemath_matrix::{
    deflate_cubic, quadratic_roots, smallest_nonnegative_real_root, DenseMatrix, PseudoInverse,
};
use crate::error::Result;

/// Eigenvalue with its unit eigenvector, when one could be isolated
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EigenPair {
    pub value: f64,
    pub vector: Option<DenseMatrix>,
}

/// Real eigenvalues from characteristic coefficients, ascending
///
/// The smallest root comes from the cubic root search; the other two from the
/// quadratic left after dividing it out. Discriminants in `(-tolerance, 0)`
/// count as a double root. Otherwise only the smallest root is returned.
pub fn eigenvalues(coefficients: &[f64], tolerance: f64) -> Result<(f64, Vec<f64>)> {
    let smallest = smallest_nonnegative_real_root(coefficients)?;
    let mut values = vec![smallest];

    let [q0, q1, q2] = deflate_cubic(coefficients, smallest)?;
    let disc = q1 * q1 - 4.0 * q2 * q0;
    if disc < 0.0 && disc > -tolerance {
        let double = -q1 / (2.0 * q2);
        values.extend([double, double]);
    } else if let Some(rest) = quadratic_roots(q0, q1, q2) {
        values.extend(rest);
    } else {
        warn!(disc, "eigenvalues: remaining quadratic has complex roots");
    }

    values.sort_by(|a, b| a.total_cmp(b));
    debug!(?values, smallest, "eigenvalues");
    Ok((smallest, values))
}

/// Unit eigenvector of `m` for `value`, from the null space of `m - value·I`
///
/// Takes the first column of the provider's null-space columns whose norm
/// exceeds `tolerance`. `None` when every column vanishes, which the
/// adjugate provider reports for a repeated eigenvalue.
pub fn eigenvector<P>(
    m: &DenseMatrix,
    value: f64,
    provider: &P,
    tolerance: f64,
) -> Result<Option<DenseMatrix>>
where
    P: PseudoInverse + ?Sized,
{
    let shift = DenseMatrix::scaled_identity(m.rows(), value);
    let shifted = m.added_scaled(&shift, -1.0, 1.0)?;
    let columns = provider.null_space_columns(&shifted)?;
    debug!(value, candidates = columns.cols(), "eigenvector: null space of shifted matrix");

    let vector = (0..columns.cols())
        .filter_map(|j| columns.column(j))
        .find(|c| c.norm() > tolerance)
        .map(|c| c.normalized());
    Ok(vector)
}
