//! Sample preparation: centroid, recentring, rescaling, covariance

use litemath_matrix::DenseMatrix;
use crate::error::{AxisError, Result};

/// Points as 3×1 column vectors
pub fn to_vectors(points: &[[f64; 3]]) -> Vec<DenseMatrix> {
    points
        .iter()
        .map(|&[x, y, z]| DenseMatrix::vector3(x, y, z))
        .collect()
}

/// Mean of the samples
pub fn centroid(samples: &[DenseMatrix]) -> Result<DenseMatrix> {
    if samples.is_empty() {
        return Err(AxisError::NoSamples);
    }
    let mut sum = DenseMatrix::vector(3);
    for v in samples {
        sum.add_in_place(v)?;
    }
    sum.scale_in_place(1.0 / samples.len() as f64);
    Ok(sum)
}

/// Subtract `center` from every sample, in place
pub fn recenter(samples: &mut [DenseMatrix], center: &DenseMatrix) -> Result<()> {
    for v in samples.iter_mut() {
        v.sub_in_place(center)?;
    }
    Ok(())
}

/// Divide every sample by its largest absolute component, in place
///
/// Returns the divisor, or 1 when every component is zero.
pub fn rescale(samples: &mut [DenseMatrix]) -> f64 {
    let mut upper = DenseMatrix::vector(3);
    let mut lower = DenseMatrix::vector(3);
    for v in samples.iter() {
        upper.max_in_place(v);
        lower.min_in_place(v);
    }
    lower.abs_in_place();

    let largest = upper.max_element().max(lower.max_element());
    if largest == 0.0 {
        return 1.0;
    }
    let k = 1.0 / largest;
    for v in samples.iter_mut() {
        v.scale_in_place(k);
    }
    largest
}

/// Mean outer product `Σ v vᵀ / n` of recentred samples
pub fn covariance(samples: &[DenseMatrix]) -> Result<DenseMatrix> {
    if samples.is_empty() {
        return Err(AxisError::NoSamples);
    }
    let mut m = DenseMatrix::matrix3();
    for v in samples {
        let outer = v.multiply(&v.transpose())?;
        m.add_in_place(&outer)?;
    }
    m.scale_in_place(1.0 / samples.len() as f64);
    Ok(m)
}
