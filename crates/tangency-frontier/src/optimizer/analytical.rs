//! Closed-form frontier via the two-fund separation.
//!
//! Solving the Lagrangian for variance minimization subject to `1ᵗw = 1` and
//! `μᵗw = m` gives weights linear in the target return, `w(m) = g + h·m`,
//! with everything expressed through four scalars of `Σ⁻¹`:
//!
//! ```text
//! A = 1ᵗΣ⁻¹μ   B = μᵗΣ⁻¹μ   C = 1ᵗΣ⁻¹1   D = BC − A²
//! ```
//!
//! The minimum-variance portfolio sits at return `A/C` with standard
//! deviation `sqrt(1/C)`, and the frontier variance at return `m` is
//! `(Cm² − 2Am + B)/D`.

use nalgebra::{DMatrix, DVector};
use tangency_math::linear_algebra::{apply, dot, invert};
use tangency_math::MathResult;

use crate::config::SweepConfig;
use crate::types::{FrontierCoefficients, FrontierSolution, PortfolioPoint};

/// Discriminant magnitude below which the two-fund separation is ill-posed.
pub const DISCRIMINANT_TOLERANCE: f64 = 1e-14;

/// Width substituted when μ has no spread, so sampling still covers a band.
const FLAT_RETURN_RANGE: f64 = 0.05;

/// Attempts the analytical path.
///
/// `Ok(None)` means the discriminant collapsed and the caller should run the
/// weight sweep instead. A singular Σ propagates as
/// [`MathError::SingularMatrix`](tangency_math::MathError::SingularMatrix)
/// for the caller to handle the same way.
pub(crate) fn solve(
    mu: &DVector<f64>,
    sigma: &DMatrix<f64>,
    config: &SweepConfig,
) -> MathResult<Option<FrontierSolution>> {
    let n = mu.len();

    let sigma_inv = invert(sigma)?;
    let ones = DVector::from_element(n, 1.0);
    let inv_mu = apply(&sigma_inv, mu)?;
    let inv_one = apply(&sigma_inv, &ones)?;

    let a = dot(&ones, &inv_mu)?;
    let b = dot(mu, &inv_mu)?;
    let c = dot(&ones, &inv_one)?;
    let d = b * c - a * a;

    if d.abs() <= DISCRIMINANT_TOLERANCE {
        return Ok(None);
    }

    let min_variance_return = a / c;
    let min_variance_std_dev = (1.0 / c).sqrt();

    let g: Vec<f64> = (0..n)
        .map(|i| (b * inv_one[i] - a * inv_mu[i]) / d)
        .collect();
    let h: Vec<f64> = (0..n)
        .map(|i| (c * inv_mu[i] - a * inv_one[i]) / d)
        .collect();
    let coefficients = FrontierCoefficients { g, h, a, b, c, d };

    let mu_max = mu.iter().fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    let mu_min = mu.iter().fold(f64::INFINITY, |acc, &v| acc.min(v));
    let mut range = mu_max - mu_min;
    if range == 0.0 {
        range = FLAT_RETURN_RANGE;
    }

    let lo = min_variance_return - 0.5 * range;
    let hi = mu_max + 0.8 * range;
    let samples = config.samples.max(2);

    let mut points = Vec::with_capacity(samples);
    for k in 0..samples {
        let m = lo + (hi - lo) * (k as f64) / ((samples - 1) as f64);
        let variance = coefficients.variance_at(m);
        if variance < 0.0 {
            // Out of the feasible domain for this Σ.
            continue;
        }
        points.push(PortfolioPoint {
            expected_return: m,
            std_dev: variance.sqrt(),
            weights: coefficients.weights_for_return(m),
        });
    }

    Ok(Some(FrontierSolution {
        points,
        min_variance_return,
        min_variance_std_dev,
        coefficients: Some(coefficients),
        analytical: true,
    }))
}
