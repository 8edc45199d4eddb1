//! Root-finding algorithms.
//!
//! A single solver lives here: bounded Newton-Raphson, tuned for
//! net-present-value style polynomials where the caller runs it from many
//! seeds and treats individual failures as expected.
//!
//! Convergence requires both a small step and a small residual. Step
//! convergence alone is not enough: an iteration parked on a flat stretch of
//! the NPV curve can take tiny steps while the function value is nowhere
//! near zero.

mod newton;

pub use newton::{newton_raphson, DERIVATIVE_FLOOR};

use crate::error::MathResult;

/// Default step-size tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default residual acceptance threshold.
pub const DEFAULT_RESIDUAL_TOLERANCE: f64 = 1e-9;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Step-size tolerance for convergence.
    pub tolerance: f64,
    /// Residual magnitude below which an iterate is accepted as a root.
    pub residual_tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
    /// Divergence guard: an iterate leaving `(min, max]` aborts the solve.
    pub bounds: Option<(f64, f64)>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            residual_tolerance: DEFAULT_RESIDUAL_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            bounds: None,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            ..Self::default()
        }
    }

    /// Sets the step-size tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the residual acceptance threshold.
    #[must_use]
    pub fn with_residual_tolerance(mut self, residual_tolerance: f64) -> Self {
        self.residual_tolerance = residual_tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the divergence guard interval `(min, max]`.
    #[must_use]
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some((min, max));
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

/// Trait for root-finding algorithms.
pub trait RootFinder {
    /// Finds a root of the given function from an initial guess.
    fn find_root<F, DF>(
        &self,
        f: F,
        df: DF,
        initial_guess: f64,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        DF: Fn(f64) -> f64;
}

/// Newton-Raphson solver implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonSolver;

impl RootFinder for NewtonSolver {
    fn find_root<F, DF>(
        &self,
        f: F,
        df: DF,
        initial_guess: f64,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        DF: Fn(f64) -> f64,
    {
        newton_raphson(f, df, initial_guess, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config_builders() {
        let config = SolverConfig::default()
            .with_tolerance(1e-9)
            .with_residual_tolerance(0.01)
            .with_max_iterations(200)
            .with_bounds(-0.99, 100.0);

        assert!((config.tolerance - 1e-9).abs() < f64::EPSILON);
        assert!((config.residual_tolerance - 0.01).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 200);
        assert_eq!(config.bounds, Some((-0.99, 100.0)));
    }

    #[test]
    fn test_root_finder_trait() {
        let solver = NewtonSolver;
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = solver
            .find_root(f, df, 1.5, &SolverConfig::default())
            .unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }
}
