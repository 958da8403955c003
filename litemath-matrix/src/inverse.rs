//! Generalized inverses
//!
//! [`PseudoInverse`] is the seam callers use to turn `M - λI` into an
//! eigenvector: providers return a matrix together with the determinant of
//! the input, and the columns of [`PseudoInverse::null_space_columns`] hold
//! the near-null directions. For [`AdjugateInverse`] those are the columns of
//! the adjugate itself, since for a rank n-1 input each of them lies in the
//! null space. [`MoorePenrose`] is the SVD based generalized inverse and
//! answers with the right singular vector of the smallest singular value.

use nalgebra::DMatrix;
use serde::Serialize;
use tracing::debug;
use crate::error::{MatrixError, Result};
use crate::types::{DenseMatrix, StorageOrder};

/// Default tolerance for treating a determinant or singular value as zero
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Generalized inverse plus the determinant of the input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PseudoInverseResult {
    pub matrix: DenseMatrix,
    pub determinant: f64,
}

/// Provider of an approximate or generalized inverse of a square matrix
pub trait PseudoInverse {
    fn pseudo_inverse(&self, m: &DenseMatrix) -> Result<PseudoInverseResult>;

    /// Matrix whose non-zero columns lie in the null space of `m`
    ///
    /// Defaults to the projector `I - R·m`, where `R` is this provider's
    /// generalized inverse of `m`.
    fn null_space_columns(&self, m: &DenseMatrix) -> Result<DenseMatrix> {
        let r = self.pseudo_inverse(m)?;
        let mut projector = DenseMatrix::identity(m.cols());
        projector.sub_in_place(&r.matrix.multiply(m)?)?;
        Ok(projector)
    }
}

fn check_square(m: &DenseMatrix) -> Result<()> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            op: "pseudo_inverse",
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    Ok(())
}

// ============================================================================
// Adjugate
// ============================================================================

/// `adj(M) / det(M)` when `|det| > tolerance`, otherwise the unscaled adjugate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjugateInverse {
    pub tolerance: f64,
}

impl Default for AdjugateInverse {
    fn default() -> Self {
        AdjugateInverse { tolerance: DEFAULT_TOLERANCE }
    }
}

impl AdjugateInverse {
    pub fn new(tolerance: f64) -> Self {
        AdjugateInverse { tolerance }
    }
}

impl PseudoInverse for AdjugateInverse {
    fn pseudo_inverse(&self, m: &DenseMatrix) -> Result<PseudoInverseResult> {
        check_square(m)?;
        let determinant = m.determinant()?;
        let mut matrix = m.adjugate()?;
        if determinant.abs() > self.tolerance {
            matrix.scale_in_place(1.0 / determinant);
        } else {
            debug!(determinant, "adjugate inverse: singular input, returning adjugate");
        }
        Ok(PseudoInverseResult { matrix, determinant })
    }

    fn null_space_columns(&self, m: &DenseMatrix) -> Result<DenseMatrix> {
        Ok(self.pseudo_inverse(m)?.matrix)
    }
}

// ============================================================================
// Moore-Penrose
// ============================================================================

/// SVD based pseudo-inverse; singular values at or below `tolerance` are dropped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoorePenrose {
    pub tolerance: f64,
}

impl Default for MoorePenrose {
    fn default() -> Self {
        MoorePenrose { tolerance: DEFAULT_TOLERANCE }
    }
}

impl MoorePenrose {
    pub fn new(tolerance: f64) -> Self {
        MoorePenrose { tolerance }
    }
}

impl PseudoInverse for MoorePenrose {
    fn pseudo_inverse(&self, m: &DenseMatrix) -> Result<PseudoInverseResult> {
        check_square(m)?;
        let a = m.to_dmatrix();
        let determinant = a.determinant();

        let svd = a
            .try_svd(true, true, f64::EPSILON, 0)
            .ok_or(MatrixError::NoConvergence("svd"))?;
        let u = svd.u.ok_or(MatrixError::NoConvergence("svd"))?;
        let vt = svd.v_t.ok_or(MatrixError::NoConvergence("svd"))?;
        let s = svd.singular_values;

        // S^+ (pseudo-inverse of singular values)
        let mut s_inv = DMatrix::zeros(vt.nrows(), u.ncols());
        for i in 0..s.len() {
            if s[i].abs() > self.tolerance {
                s_inv[(i, i)] = 1.0 / s[i];
            }
        }

        // pinv(A) = V × S^+ × U^T
        let pinv = vt.transpose() * s_inv * u.transpose();
        Ok(PseudoInverseResult {
            matrix: DenseMatrix::from_dmatrix(&pinv),
            determinant,
        })
    }

    /// Unit `x` minimizing `|m·x|`: the right singular vector of the
    /// smallest singular value, as an n×1 column
    fn null_space_columns(&self, m: &DenseMatrix) -> Result<DenseMatrix> {
        check_square(m)?;
        let svd = m
            .to_dmatrix()
            .try_svd(false, true, f64::EPSILON, 0)
            .ok_or(MatrixError::NoConvergence("svd"))?;
        let vt = svd.v_t.ok_or(MatrixError::NoConvergence("svd"))?;

        let (k, _) = svd
            .singular_values
            .iter()
            .enumerate()
            .fold((0, f64::INFINITY), |best, (i, &s)| if s < best.1 { (i, s) } else { best });
        Ok(DenseMatrix::from_fn(vt.ncols(), 1, StorageOrder::RowMajor, |i, _| vt[(k, i)]))
    }
}
