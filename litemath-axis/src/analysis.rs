//! End-to-end principal axis analysis

use serde::Serialize;
use tracing::{debug, info};
use litemath_matrix::{AdjugateInverse, DenseMatrix, PseudoInverse};
use crate::config::AxisConfig;
use crate::eigen::{eigenvalues, eigenvector, EigenPair};
use crate::error::{AxisError, Result};
use crate::samples::{centroid, covariance, recenter, rescale, to_vectors};

/// Everything computed from one sample set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisAnalysis {
    pub sample_count: usize,
    pub centroid: DenseMatrix,
    /// Divisor applied to the recentred samples (1 when rescaling is off)
    pub scale: f64,
    pub covariance: DenseMatrix,
    /// Characteristic coefficients of the covariance, constant term first
    pub coefficients: Vec<f64>,
    pub smallest_root: f64,
    /// Ascending by eigenvalue
    pub eigenpairs: Vec<EigenPair>,
    /// Eigenvector of the smallest eigenvalue: best-fit plane normal
    pub normal: Option<DenseMatrix>,
    /// Eigenvector of the largest eigenvalue: dominant direction
    pub principal_axis: Option<DenseMatrix>,
}

/// Analyze with the adjugate inverse
pub fn analyze(points: &[[f64; 3]], config: &AxisConfig) -> Result<AxisAnalysis> {
    let provider = AdjugateInverse::new(config.inverse_tolerance);
    analyze_with(points, config, &provider)
}

/// Analyze with a caller-supplied inverse provider
pub fn analyze_with<P>(points: &[[f64; 3]], config: &AxisConfig, provider: &P) -> Result<AxisAnalysis>
where
    P: PseudoInverse + ?Sized,
{
    if points.is_empty() {
        return Err(AxisError::NoSamples);
    }
    info!(samples = points.len(), "principal axis analysis");

    let mut samples = to_vectors(points);
    let center = centroid(&samples)?;
    recenter(&mut samples, &center)?;
    let scale = if config.rescale { rescale(&mut samples) } else { 1.0 };
    debug!(centroid = %center.to_csv(), scale, "samples recentred");

    let cov = covariance(&samples)?;
    let coefficients = cov.characteristic_coefficients()?;
    debug!(?coefficients, "characteristic polynomial");

    let (smallest_root, values) = eigenvalues(&coefficients, config.zero_tolerance)?;
    let eigenpairs = values
        .into_iter()
        .map(|value| {
            let vector = eigenvector(&cov, value, provider, config.zero_tolerance)?;
            Ok(EigenPair { value, vector })
        })
        .collect::<Result<Vec<_>>>()?;

    let normal = eigenpairs.first().and_then(|p| p.vector.clone());
    let principal_axis = eigenpairs.last().and_then(|p| p.vector.clone());

    Ok(AxisAnalysis {
        sample_count: points.len(),
        centroid: center,
        scale,
        covariance: cov,
        coefficients,
        smallest_root,
        eigenpairs,
        normal,
        principal_axis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use litemath_matrix::MoorePenrose;

    fn cross_points() -> Vec<[f64; 3]> {
        vec![[1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, -1.0, 0.0]]
    }

    #[test]
    fn test_planar_cross() {
        let a = analyze(&cross_points(), &AxisConfig::default()).unwrap();
        assert_eq!(a.sample_count, 4);
        assert_eq!(a.centroid.as_slice(), &[0.0, 0.0, 0.0]);
        assert_eq!(a.scale, 1.0);
        assert_eq!(a.covariance.to_nested_list(), vec![
            vec![0.5, 0.0, 0.0],
            vec![0.0, 0.5, 0.0],
            vec![0.0, 0.0, 0.0],
        ]);
        assert_eq!(a.coefficients, vec![0.0, -0.25, 1.0, -1.0]);
        assert!(a.smallest_root.abs() < 1e-8);

        let values: Vec<f64> = a.eigenpairs.iter().map(|p| p.value).collect();
        assert_eq!(values.len(), 3);
        assert!((values[1] - 0.5).abs() < 1e-9 && (values[2] - 0.5).abs() < 1e-9);

        let normal = a.normal.unwrap();
        assert!((normal[(2, 0)].abs() - 1.0).abs() < 1e-9);
        assert!(normal[(0, 0)].abs() < 1e-9 && normal[(1, 0)].abs() < 1e-9);

        // Repeated largest eigenvalue: no unique direction
        assert!(a.principal_axis.is_none());
    }

    #[test]
    fn test_line_along_diagonal() {
        let points = [[1.0, 1.0, 0.0], [-1.0, -1.0, 0.0], [2.0, 2.0, 0.0], [-2.0, -2.0, 0.0]];
        let a = analyze(&points, &AxisConfig::default()).unwrap();
        assert_eq!(a.scale, 2.0);

        let axis = a.principal_axis.unwrap();
        let h = 0.5f64.sqrt();
        assert!((axis[(0, 0)].abs() - h).abs() < 1e-9);
        assert!((axis[(1, 0)].abs() - h).abs() < 1e-9);
        assert!(axis[(2, 0)].abs() < 1e-9);
        assert!((a.eigenpairs[2].value - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_rescale_off_keeps_units() {
        let points: Vec<[f64; 3]> = cross_points().iter().map(|p| [p[0] * 4.0, p[1] * 4.0, p[2]]).collect();
        let config = AxisConfig { rescale: false, ..AxisConfig::default() };
        let a = analyze(&points, &config).unwrap();
        assert_eq!(a.scale, 1.0);
        assert_eq!(a.covariance[(0, 0)], 8.0);
        assert!(a.normal.is_some());
    }

    #[test]
    fn test_offset_plane_normal() {
        // Tilted plane z = x, shifted away from the origin
        let points = [
            [11.0, 5.0, 11.0],
            [9.0, 5.0, 9.0],
            [10.0, 7.0, 10.0],
            [10.0, 3.0, 10.0],
            [12.0, 6.0, 12.0],
            [8.0, 4.0, 8.0],
        ];
        let a = analyze(&points, &AxisConfig::default()).unwrap();
        for (got, want) in a.centroid.as_slice().iter().zip([10.0, 5.0, 10.0]) {
            assert!((got - want).abs() < 1e-12);
        }

        let n = a.normal.unwrap();
        let h = 0.5f64.sqrt();
        assert!((n[(0, 0)].abs() - h).abs() < 1e-4);
        assert!(n[(1, 0)].abs() < 1e-4);
        assert!((n[(0, 0)] + n[(2, 0)]).abs() < 1e-4);
    }

    #[test]
    fn test_no_samples() {
        let err = analyze(&[], &AxisConfig::default()).unwrap_err();
        assert_eq!(err, AxisError::NoSamples);
    }

    #[test]
    fn test_moore_penrose_provider_matches_adjugate_normal() {
        let a = analyze_with(&cross_points(), &AxisConfig::default(), &MoorePenrose::default()).unwrap();
        assert_eq!(a.eigenpairs.len(), 3);

        let normal = a.normal.unwrap();
        assert!((normal[(2, 0)].abs() - 1.0).abs() < 1e-9, "{}", normal);
        assert!(normal[(0, 0)].abs() < 1e-9 && normal[(1, 0)].abs() < 1e-9);

        // Repeated eigenvalue 0.5: any unit vector of the xy plane qualifies
        let axis = a.principal_axis.unwrap();
        assert!(axis[(2, 0)].abs() < 1e-9, "{}", axis);
        assert!((axis.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_moore_penrose_provider_on_tilted_plane() {
        let points = [
            [11.0, 5.0, 11.0],
            [9.0, 5.0, 9.0],
            [10.0, 7.0, 10.0],
            [10.0, 3.0, 10.0],
            [12.0, 6.0, 12.0],
            [8.0, 4.0, 8.0],
        ];
        let adj = analyze(&points, &AxisConfig::default()).unwrap();
        let mp = analyze_with(&points, &AxisConfig::default(), &MoorePenrose::default()).unwrap();
        let (a, b) = (adj.normal.unwrap(), mp.normal.unwrap());
        assert!((a.dot(&b).abs() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_serializes_to_json() {
        let a = analyze(&cross_points(), &AxisConfig::default()).unwrap();
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["sample_count"], 4);
        assert_eq!(json["covariance"]["rows"], 3);
        assert!(json["principal_axis"].is_null());
    }
}
