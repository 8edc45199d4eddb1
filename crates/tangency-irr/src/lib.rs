//! # Tangency IRR
//!
//! Multi-start internal rate of return solver.
//!
//! The IRR of a cash flow series is a discount rate at which the series' net
//! present value equals zero. Cash flow patterns with several sign changes
//! can cross zero several times, so [`find_all_roots`] runs Newton-Raphson
//! from a battery of seed guesses, keeps every rate that converges, and
//! deduplicates rates that differ by less than [`DUPLICATE_ROOT_TOLERANCE`]
//! (the same economic root reached from different seeds).
//!
//! ## Known limitation
//!
//! The seed battery is a heuristic, not a complete root enumeration: a
//! series with many sign changes (Descartes' rule) can have real roots that
//! no seed converges to, and those are silently missed. Callers that need
//! guaranteed enumeration need a polynomial root finder; this solver
//! deliberately trades that guarantee for the simple, fast multi-start that
//! matches how the results are consumed (marking zero crossings on an NPV
//! chart).
//!
//! ## Units
//!
//! Cash flows are raw currency amounts indexed by period (period 0
//! conventionally the initial outlay). Rates are fractional: 0.10 = 10%.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]

use tangency_math::solvers::{newton_raphson, SolverConfig};

/// Open lower bound for an economically meaningful discount rate.
///
/// `(1 + rate)` must stay positive; rates at or below -99% are treated as
/// divergence rather than solutions.
pub const RATE_LOWER_BOUND: f64 = -0.99;

/// Closed upper bound for an economically meaningful discount rate (10000%).
pub const RATE_UPPER_BOUND: f64 = 100.0;

/// NPV magnitude below which an iterate counts as a root.
///
/// Expressed in cash flow units, not rate units: an IRR is only accepted if
/// the NPV it produces is within a cent-scale band of zero.
pub const NPV_RESIDUAL_TOLERANCE: f64 = 0.01;

/// Rates closer than this are treated as the same economic root.
pub const DUPLICATE_ROOT_TOLERANCE: f64 = 1e-3;

/// Newton step tolerance used by [`find_all_roots`].
pub const STEP_TOLERANCE: f64 = 1e-9;

/// Iteration budget per seed used by [`find_all_roots`].
pub const MAX_ITERATIONS: u32 = 200;

/// Seed battery for the multi-start search.
///
/// Mixed positive, negative, and extreme guesses so that both conventional
/// single-root series and multi-root series with late sign changes have a
/// seed in each basin of attraction that matters in practice.
pub const SEED_GUESSES: [f64; 8] = [0.1, 0.5, 1.0, -0.5, 0.01, 0.25, 2.0, -0.3];

/// Net present value of `cash_flows` at `rate`: `Σ cf[t] / (1+rate)^t`.
#[must_use]
pub fn present_value(rate: f64, cash_flows: &[f64]) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

/// Derivative of [`present_value`] with respect to the rate.
///
/// `Σ −t·cf[t] / (1+rate)^(t+1)` for `t ≥ 1`; the period-0 term is constant
/// in the rate and contributes nothing.
#[must_use]
pub fn present_value_derivative(rate: f64, cash_flows: &[f64]) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .skip(1)
        .map(|(t, cf)| -(t as f64) * cf / (1.0 + rate).powi(t as i32 + 1))
        .sum()
}

/// Runs Newton-Raphson from a single seed guess.
///
/// Returns `None` when the seed fails to converge: near-zero derivative,
/// divergence outside ([`RATE_LOWER_BOUND`], [`RATE_UPPER_BOUND`]], or an
/// exhausted iteration budget with the NPV still away from zero. A failed
/// seed is expected under multi-start and is only logged at debug level.
#[must_use]
pub fn solve_from_guess(cash_flows: &[f64], guess: f64, config: &SolverConfig) -> Option<f64> {
    let f = |r: f64| present_value(r, cash_flows);
    let df = |r: f64| present_value_derivative(r, cash_flows);

    match newton_raphson(f, df, guess, config) {
        Ok(result) => Some(result.root),
        Err(err) => {
            log::debug!("IRR seed {guess} dropped: {err}");
            None
        }
    }
}

/// Finds the distinct real IRR roots of a cash flow series.
///
/// Runs [`solve_from_guess`] from every entry of [`SEED_GUESSES`],
/// deduplicates converged rates within [`DUPLICATE_ROOT_TOLERANCE`], and
/// returns them sorted ascending. An empty vector means no seed converged;
/// the caller should render that as "no solution", not as an error.
///
/// # Example
///
/// ```rust
/// use tangency_irr::find_all_roots;
///
/// // -100 today, 110 in one period: IRR is exactly 10%.
/// let roots = find_all_roots(&[-100.0, 110.0]);
/// assert_eq!(roots.len(), 1);
/// assert!((roots[0] - 0.10).abs() < 1e-6);
/// ```
#[must_use]
pub fn find_all_roots(cash_flows: &[f64]) -> Vec<f64> {
    let config = SolverConfig::new(STEP_TOLERANCE, MAX_ITERATIONS)
        .with_residual_tolerance(NPV_RESIDUAL_TOLERANCE)
        .with_bounds(RATE_LOWER_BOUND, RATE_UPPER_BOUND);

    let mut roots: Vec<f64> = Vec::new();
    for guess in SEED_GUESSES {
        let Some(root) = solve_from_guess(cash_flows, guess, &config) else {
            continue;
        };
        let duplicate = roots
            .iter()
            .any(|&existing| (root - existing).abs() < DUPLICATE_ROOT_TOLERANCE);
        if !duplicate {
            roots.push(root);
        }
    }

    roots.sort_by(f64::total_cmp);
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_present_value_at_zero_rate_is_sum() {
        let flows = [-100.0, 30.0, 30.0, 30.0, 30.0];
        assert_relative_eq!(present_value(0.0, &flows), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_present_value_known_value() {
        // -100 + 110/1.10 = 0.
        assert_relative_eq!(
            present_value(0.10, &[-100.0, 110.0]),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let flows = [-100.0, 30.0, 40.0, 50.0];
        let h = 1e-7;
        for rate in [-0.2, 0.0, 0.05, 0.3, 1.0] {
            let numeric =
                (present_value(rate + h, &flows) - present_value(rate - h, &flows)) / (2.0 * h);
            assert_relative_eq!(
                present_value_derivative(rate, &flows),
                numeric,
                epsilon = 1e-4
            );
        }
    }

    #[test]
    fn test_derivative_ignores_period_zero() {
        // Only the initial outlay: NPV is constant in the rate.
        assert_relative_eq!(
            present_value_derivative(0.25, &[-100.0]),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_single_period_root() {
        let roots = find_all_roots(&[-100.0, 110.0]);

        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 0.10, epsilon = 1e-6);
    }

    #[test]
    fn test_deferred_payoff_root() {
        // 100·(1+r)^4 = 121 ⇒ r = 1.21^(1/4) − 1 ≈ 4.88%.
        let roots = find_all_roots(&[-100.0, 0.0, 0.0, 0.0, 121.0]);

        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 1.21_f64.powf(0.25) - 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_no_sign_change_has_no_root() {
        // All-positive flows: NPV > 0 for every rate in the guarded range.
        let roots = find_all_roots(&[100.0, 50.0, 50.0]);
        assert!(roots.is_empty());
    }

    #[test]
    fn test_double_root_series() {
        // NPV(r) = -100 + 230/(1+r) - 132/(1+r)²: zero at exactly 10% and 20%.
        let roots = find_all_roots(&[-100.0, 230.0, -132.0]);

        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 0.10, epsilon = 1e-6);
        assert_relative_eq!(roots[1], 0.20, epsilon = 1e-6);
    }

    #[test]
    fn test_roots_sorted_ascending() {
        let roots = find_all_roots(&[-100.0, 230.0, -132.0]);
        for pair in roots.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_seeds_deduplicate_to_one_root() {
        // A plain series every seed converges to: still exactly one root.
        let roots = find_all_roots(&[-100.0, 30.0, 30.0, 30.0, 30.0]);

        assert_eq!(roots.len(), 1);
        // NPV at the root is (well) within the acceptance band.
        assert!(present_value(roots[0], &[-100.0, 30.0, 30.0, 30.0, 30.0]).abs() < 0.01);
    }

    #[test]
    fn test_empty_series() {
        assert!(find_all_roots(&[]).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let flows = [-100.0, 230.0, -132.0];
        assert_eq!(find_all_roots(&flows), find_all_roots(&flows));
    }

    #[test]
    fn test_solve_from_guess_rejects_divergent_seed() {
        let config = SolverConfig::new(STEP_TOLERANCE, MAX_ITERATIONS)
            .with_residual_tolerance(NPV_RESIDUAL_TOLERANCE)
            .with_bounds(RATE_LOWER_BOUND, RATE_UPPER_BOUND);

        // No sign change: Newton walks the rate out of the guarded range.
        assert!(solve_from_guess(&[100.0, 50.0, 50.0], 0.1, &config).is_none());
    }
}
