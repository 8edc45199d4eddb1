//! Property tests for frontier invariants.

use nalgebra::{DMatrix, DVector};
use proptest::prelude::*;
use tangency_frontier::{efficient_frontier, SweepConfig};

/// Strategy for a well-posed (μ, Σ) pair: diagonal covariance with strictly
/// positive variances, and expected returns separated by at least 1% so the
/// frontier discriminant stays well-conditioned.
fn well_posed_inputs() -> impl Strategy<Value = (DVector<f64>, DMatrix<f64>)> {
    (2usize..6)
        .prop_flat_map(|n| {
            (
                -0.05f64..0.05,
                prop::collection::vec(0.01f64..0.08, n - 1),
                prop::collection::vec(0.05f64..0.4, n),
            )
        })
        .prop_map(|(base, gaps, sigmas)| {
            let mut mu = Vec::with_capacity(gaps.len() + 1);
            let mut level = base;
            mu.push(level);
            for gap in gaps {
                level += gap;
                mu.push(level);
            }
            let cov = DMatrix::from_fn(sigmas.len(), sigmas.len(), |i, j| {
                if i == j {
                    sigmas[i] * sigmas[i]
                } else {
                    0.0
                }
            });
            (DVector::from_vec(mu), cov)
        })
}

proptest! {
    #[test]
    fn weights_sum_to_one((mu, cov) in well_posed_inputs()) {
        let config = SweepConfig::default().with_seed(99);
        let solution = efficient_frontier(&mu, &cov, &config).unwrap();

        for point in &solution.points {
            let sum: f64 = point.weights.iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9, "weights sum to {}", sum);
            prop_assert!(point.std_dev >= 0.0);
            prop_assert!(point.std_dev.is_finite());
        }
    }

    #[test]
    fn returns_strictly_increase((mu, cov) in well_posed_inputs()) {
        let config = SweepConfig::default().with_seed(99);
        let solution = efficient_frontier(&mu, &cov, &config).unwrap();

        for pair in solution.points.windows(2) {
            prop_assert!(pair[0].expected_return < pair[1].expected_return);
        }
    }

    #[test]
    fn no_point_beats_the_minimum_variance_portfolio((mu, cov) in well_posed_inputs()) {
        let config = SweepConfig::default().with_seed(99);
        let solution = efficient_frontier(&mu, &cov, &config).unwrap();

        for point in &solution.points {
            prop_assert!(point.std_dev + 1e-9 >= solution.min_variance_std_dev);
        }
    }

    #[test]
    fn identical_inputs_identical_outputs((mu, cov) in well_posed_inputs()) {
        let config = SweepConfig::default().with_seed(99);
        let first = efficient_frontier(&mu, &cov, &config).unwrap();
        let second = efficient_frontier(&mu, &cov, &config).unwrap();

        prop_assert_eq!(first, second);
    }
}
