//! Real roots of low-degree polynomials
//!
//! Coefficients are always ordered from the constant term upward, matching
//! [`DenseMatrix::characteristic_coefficients`](crate::DenseMatrix::characteristic_coefficients).

use tracing::warn;
use crate::error::{MatrixError, Result};

/// Refinement steps of [`smallest_nonnegative_real_root`]
pub const ROOT_SEARCH_ITERATIONS: usize = 30;

/// Evaluate `c0 + c1 x + c2 x² + ...` by Horner's rule
pub fn evaluate_polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Real roots of `c0 + c1 x + c2 x²`, ascending
///
/// `None` when the discriminant is negative or `c2` is zero.
pub fn quadratic_roots(c0: f64, c1: f64, c2: f64) -> Option<[f64; 2]> {
    if c2 == 0.0 {
        return None;
    }
    let disc = c1 * c1 - 4.0 * c2 * c0;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let a = (-c1 - sq) / (2.0 * c2);
    let b = (-c1 + sq) / (2.0 * c2);
    Some([a.min(b), a.max(b)])
}

/// Divide a cubic by `(x - root)`, returning the quotient quadratic
///
/// The remainder is dropped; it is `p(root)`.
pub fn deflate_cubic(coeffs: &[f64], root: f64) -> Result<[f64; 3]> {
    if coeffs.len() != 4 {
        return Err(MatrixError::InvalidArgument(format!(
            "expected 4 cubic coefficients, got {}", coeffs.len()
        )));
    }
    let b2 = coeffs[3];
    let b1 = coeffs[2] + root * b2;
    let b0 = coeffs[1] + root * b1;
    Ok([b0, b1, b2])
}

#[derive(Debug, Clone, Copy)]
struct Bracket {
    x: f64,
    err: f64,
}

/// Smallest real root of a cubic known to have three real roots
///
/// Tuned for characteristic polynomials of symmetric 3×3 covariance
/// matrices, whose roots are real and non-negative. The sign is normalized
/// so the cubic term is negative, then two points are seeded at `x = 0` and
/// at the smaller critical point. Each of the [`ROOT_SEARCH_ITERATIONS`]
/// steps evaluates the midpoint and stores it in slot 0 when `f >= 0`,
/// slot 1 otherwise. The slot with the smaller `|f|` wins.
///
/// The slots are not guaranteed to straddle a sign change, so this is a
/// best-effort search rather than a convergent bisection.
pub fn smallest_nonnegative_real_root(coefficients: &[f64]) -> Result<f64> {
    if coefficients.len() > 4 {
        return Err(MatrixError::InvalidArgument(format!(
            "root search takes at most 4 coefficients, got {}", coefficients.len()
        )));
    }
    let mut c = [0.0; 4];
    c[..coefficients.len()].copy_from_slice(coefficients);
    if c[3] == 0.0 {
        return Err(MatrixError::InvalidArgument(
            "root search requires a non-zero cubic coefficient".to_string(),
        ));
    }

    if c[3] > 0.0 {
        c.iter_mut().for_each(|v| *v = -*v);
    }
    let f = |x: f64| evaluate_polynomial(&c, x);
    let at = |x: f64| Bracket { x, err: f(x).abs() };

    let mut spans = [at(0.0), at(0.0)];

    // Critical points of the cubic: roots of its derivative
    match quadratic_roots(c[1], 2.0 * c[2], 3.0 * c[3]) {
        Some([lo, _]) => spans[1] = at(lo),
        None => warn!(?coefficients, "root search: cubic has no real critical points"),
    }

    for _ in 0..ROOT_SEARCH_ITERATIONS {
        let x = (spans[0].x + spans[1].x) * 0.5;
        let y = f(x);
        let slot = if y >= 0.0 { 0 } else { 1 };
        spans[slot] = Bracket { x, err: y.abs() };
    }

    let best = if spans[0].err <= spans[1].err { spans[0] } else { spans[1] };
    Ok(best.x)
}
