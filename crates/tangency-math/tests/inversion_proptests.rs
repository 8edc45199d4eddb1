//! Property tests for the Gauss-Jordan inversion kernel.

use nalgebra::DMatrix;
use proptest::prelude::*;
use tangency_math::linear_algebra::{invert, multiply};

/// Builds a strictly diagonally dominant matrix from arbitrary entries.
///
/// Diagonal dominance guarantees invertibility, so these inputs exercise the
/// round-trip property without tripping the singularity guard.
fn diagonally_dominant(n: usize, entries: &[f64]) -> DMatrix<f64> {
    let mut m = DMatrix::zeros(n, n);
    for i in 0..n {
        let mut row_sum = 0.0;
        for j in 0..n {
            if i != j {
                let v = entries[i * n + j];
                m[(i, j)] = v;
                row_sum += v.abs();
            }
        }
        m[(i, i)] = row_sum + 1.0;
    }
    m
}

proptest! {
    #[test]
    fn invert_round_trips_to_identity(
        n in 2usize..6,
        entries in prop::collection::vec(-5.0f64..5.0, 36),
    ) {
        let m = diagonally_dominant(n, &entries);
        let inv = invert(&m).unwrap();
        let product = multiply(&m, &inv).unwrap();

        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { 1.0 } else { 0.0 };
                prop_assert!(
                    (product[(i, j)] - expected).abs() < 1e-9,
                    "M * M^-1 deviates from identity at ({}, {}): {}",
                    i, j, product[(i, j)]
                );
            }
        }
    }

    #[test]
    fn invert_rejects_rank_deficient(
        n in 2usize..6,
        entries in prop::collection::vec(-5.0f64..5.0, 36),
        dup in 1usize..6,
    ) {
        let mut m = diagonally_dominant(n, &entries);
        // Copy one row over another: rank drops below n.
        let dup = dup % n;
        let src = (dup + 1) % n;
        for j in 0..n {
            m[(dup, j)] = m[(src, j)];
        }

        prop_assert!(invert(&m).is_err());
    }
}
