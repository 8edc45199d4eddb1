//! Weight-sweep frontier approximation.
//!
//! Used when Σ cannot be inverted (perfectly correlated assets) or the
//! analytical discriminant collapses. Candidate weight vectors are generated
//! without any linear solve, their realized return and risk are evaluated
//! directly from μ and Σ, and the envelope is approximated by keeping the
//! minimum-risk candidate in each equal-width return bin.
//!
//! Candidate generation by asset count:
//!
//! - n = 2: 1-D sweep of `w1 ∈ [-0.5, 1.5]`, `w2 = 1 − w1`
//! - n = 3: 2-D grid over `(w1, w2)`, `w3 = 1 − w1 − w2`
//! - n > 3: uniform random draws from `[-0.5, 1.5]` per leading component,
//!   last component balancing the sum to 1 (seedable via
//!   [`SweepConfig::seed`])

use nalgebra::{DMatrix, DVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tangency_math::linear_algebra::{apply, dot};

use crate::config::SweepConfig;
use crate::error::{FrontierError, FrontierResult};
use crate::types::{FrontierSolution, PortfolioPoint};

/// Sweep interval for each free weight component.
const WEIGHT_MIN: f64 = -0.5;
const WEIGHT_MAX: f64 = 1.5;

struct Candidate {
    expected_return: f64,
    std_dev: f64,
    weights: Vec<f64>,
}

pub(crate) fn solve(
    mu: &DVector<f64>,
    sigma: &DMatrix<f64>,
    config: &SweepConfig,
) -> FrontierResult<FrontierSolution> {
    let mut candidates = Vec::new();
    for weights in generate_weights(mu.len(), config) {
        if let Some(candidate) = evaluate(weights, mu, sigma)? {
            candidates.push(candidate);
        }
    }

    if candidates.is_empty() {
        return Err(FrontierError::degenerate(
            "weight sweep produced no feasible portfolios",
        ));
    }

    candidates.sort_by(|x, y| x.expected_return.total_cmp(&y.expected_return));

    let min_return = candidates[0].expected_return;
    let span = candidates[candidates.len() - 1].expected_return - min_return;

    // Degenerate span (all candidates share one return, e.g. identical μ):
    // a single bin collapses the frontier to the minimum-risk portfolio.
    let survivors = if span <= f64::EPSILON {
        thin_to_envelope(candidates, min_return, 1.0, 1)
    } else {
        thin_to_envelope(candidates, min_return, span, config.return_bins.max(1))
    };

    // Non-empty input always leaves at least one survivor per filled bin.
    let mut min_variance_return = survivors[0].expected_return;
    let mut min_variance_std_dev = survivors[0].std_dev;
    for candidate in &survivors[1..] {
        if candidate.std_dev < min_variance_std_dev {
            min_variance_return = candidate.expected_return;
            min_variance_std_dev = candidate.std_dev;
        }
    }

    let points = survivors
        .into_iter()
        .map(|c| PortfolioPoint {
            expected_return: c.expected_return,
            std_dev: c.std_dev,
            weights: c.weights,
        })
        .collect();

    Ok(FrontierSolution {
        points,
        min_variance_return,
        min_variance_std_dev,
        coefficients: None,
        analytical: false,
    })
}

/// Keeps the minimum-risk candidate per equal-width return bin.
///
/// Input must be sorted ascending by return; output stays sorted because
/// each survivor's return lies inside its own bin.
fn thin_to_envelope(
    candidates: Vec<Candidate>,
    min_return: f64,
    span: f64,
    bins: usize,
) -> Vec<Candidate> {
    let mut best: Vec<Option<Candidate>> = (0..bins).map(|_| None).collect();

    for candidate in candidates {
        let mut bin =
            ((candidate.expected_return - min_return) / span * bins as f64) as usize;
        if bin >= bins {
            bin = bins - 1;
        }
        let replace = match &best[bin] {
            Some(current) => candidate.std_dev < current.std_dev,
            None => true,
        };
        if replace {
            best[bin] = Some(candidate);
        }
    }

    best.into_iter().flatten().collect()
}

fn evaluate(
    weights: Vec<f64>,
    mu: &DVector<f64>,
    sigma: &DMatrix<f64>,
) -> FrontierResult<Option<Candidate>> {
    let w = DVector::from_column_slice(&weights);
    let expected_return = dot(&w, mu)?;
    let variance = dot(&w, &apply(sigma, &w)?)?;

    if !expected_return.is_finite() || !variance.is_finite() {
        return Ok(None);
    }

    // Tiny negative variance from rounding on a rank-deficient Σ clamps to
    // zero; anything materially negative is infeasible.
    if variance < -1e-12 {
        return Ok(None);
    }

    Ok(Some(Candidate {
        expected_return,
        std_dev: variance.max(0.0).sqrt(),
        weights,
    }))
}

fn generate_weights(n: usize, config: &SweepConfig) -> Vec<Vec<f64>> {
    let steps = config.grid_steps.max(2);

    match n {
        2 => (0..steps)
            .map(|i| {
                let w1 = grid_value(i, steps);
                vec![w1, 1.0 - w1]
            })
            .collect(),
        3 => {
            let mut out = Vec::with_capacity(steps * steps);
            for i in 0..steps {
                for j in 0..steps {
                    let w1 = grid_value(i, steps);
                    let w2 = grid_value(j, steps);
                    out.push(vec![w1, w2, 1.0 - w1 - w2]);
                }
            }
            out
        }
        _ => {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            (0..config.random_candidates)
                .map(|_| {
                    let mut weights: Vec<f64> = (0..n - 1)
                        .map(|_| rng.gen_range(WEIGHT_MIN..WEIGHT_MAX))
                        .collect();
                    let balance = 1.0 - weights.iter().sum::<f64>();
                    weights.push(balance);
                    weights
                })
                .collect()
        }
    }
}

fn grid_value(i: usize, steps: usize) -> f64 {
    WEIGHT_MIN + (WEIGHT_MAX - WEIGHT_MIN) * (i as f64) / ((steps - 1) as f64)
}
