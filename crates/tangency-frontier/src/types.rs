//! Result types for frontier optimization.

use serde::{Deserialize, Serialize};

/// A single portfolio on (or near) the efficient frontier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPoint {
    /// Expected portfolio return (fractional).
    pub expected_return: f64,
    /// Portfolio standard deviation (fractional, non-negative).
    pub std_dev: f64,
    /// Asset weights, summing to 1. Negative entries are short positions.
    pub weights: Vec<f64>,
}

/// Closed-form frontier coefficients from the two-fund separation.
///
/// The weight vector minimizing variance subject to `1ᵗw = 1` and `μᵗw = m`
/// is `g + h·m` for every target return `m`; `g` and `h` come from solving
/// the Lagrangian system once, so no further linear solves are needed to
/// recover weights anywhere on the frontier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontierCoefficients {
    /// Constant term of the two-fund decomposition.
    pub g: Vec<f64>,
    /// Return-proportional term of the two-fund decomposition.
    pub h: Vec<f64>,
    /// `1ᵗ Σ⁻¹ μ`.
    pub a: f64,
    /// `μᵗ Σ⁻¹ μ`.
    pub b: f64,
    /// `1ᵗ Σ⁻¹ 1`.
    pub c: f64,
    /// Discriminant `BC − A²`.
    pub d: f64,
}

impl FrontierCoefficients {
    /// Weights of the frontier portfolio with target return `m`.
    #[must_use]
    pub fn weights_for_return(&self, m: f64) -> Vec<f64> {
        self.g
            .iter()
            .zip(self.h.iter())
            .map(|(&g, &h)| g + h * m)
            .collect()
    }

    /// Frontier variance at target return `m`: `(Cm² − 2Am + B) / D`.
    #[must_use]
    pub fn variance_at(&self, m: f64) -> f64 {
        (self.c * m * m - 2.0 * self.a * m + self.b) / self.d
    }
}

/// The computed frontier, fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontierSolution {
    /// Frontier samples, strictly increasing by expected return.
    pub points: Vec<PortfolioPoint>,
    /// Expected return of the minimum-variance portfolio.
    pub min_variance_return: f64,
    /// Standard deviation of the minimum-variance portfolio.
    pub min_variance_std_dev: f64,
    /// Closed-form coefficients; present only on the analytical path.
    pub coefficients: Option<FrontierCoefficients>,
    /// `true` when produced analytically, `false` for the weight sweep.
    pub analytical: bool,
}
