//! Frontier computation entry point.
//!
//! [`efficient_frontier`] validates the inputs, attempts the analytical
//! closed-form path, and falls back to the weight sweep when the covariance
//! is numerically singular or the frontier discriminant collapses.

mod analytical;
mod sweep;

use nalgebra::{DMatrix, DVector};
use tangency_math::MathError;

use crate::config::SweepConfig;
use crate::error::{FrontierError, FrontierResult};
use crate::types::FrontierSolution;

/// Computes the efficient frontier for expected returns μ and covariance Σ.
///
/// Inputs are fractional (0.05 = 5%); a caller collecting percentage input
/// must divide by 100 before calling. The result carries fractional units
/// back out.
///
/// The analytical path is preferred. It is abandoned for the weight-sweep
/// fallback in exactly two cases: Σ fails to invert at the kernel's pivot
/// tolerance, or the discriminant `D = BC − A²` falls below `1e-14` (two-fund
/// separation ill-posed, e.g. when μ has no variation across assets).
///
/// # Errors
///
/// - [`FrontierError::TooFewAssets`] for fewer than two assets.
/// - [`FrontierError::DegenerateInput`] for a mis-shaped Σ, non-finite
///   entries, or a non-positive variance on the diagonal. These must be
///   rendered as a warning, not charted.
pub fn efficient_frontier(
    mean_returns: &DVector<f64>,
    covariance: &DMatrix<f64>,
    config: &SweepConfig,
) -> FrontierResult<FrontierSolution> {
    validate(mean_returns, covariance)?;

    match analytical::solve(mean_returns, covariance, config) {
        Ok(Some(solution)) => return Ok(solution),
        Ok(None) => {
            log::debug!("frontier discriminant below tolerance, using weight-sweep fallback");
        }
        Err(MathError::SingularMatrix { .. }) => {
            log::debug!("covariance numerically singular, using weight-sweep fallback");
        }
        Err(err) => return Err(err.into()),
    }

    sweep::solve(mean_returns, covariance, config)
}

fn validate(mean_returns: &DVector<f64>, covariance: &DMatrix<f64>) -> FrontierResult<()> {
    let n = mean_returns.len();
    if n < 2 {
        return Err(FrontierError::TooFewAssets { actual: n });
    }

    if covariance.nrows() != n || covariance.ncols() != n {
        return Err(FrontierError::degenerate(format!(
            "covariance must be {n}x{n}, got {}x{}",
            covariance.nrows(),
            covariance.ncols()
        )));
    }

    if mean_returns.iter().any(|v| !v.is_finite())
        || covariance.iter().any(|v| !v.is_finite())
    {
        return Err(FrontierError::degenerate("non-finite input"));
    }

    for i in 0..n {
        if covariance[(i, i)] <= 0.0 {
            return Err(FrontierError::degenerate(format!(
                "asset {i} has non-positive variance"
            )));
        }
    }

    Ok(())
}
