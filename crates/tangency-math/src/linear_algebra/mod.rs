//! Dense linear algebra kernel.
//!
//! This module provides the handful of matrix operations the frontier
//! optimizer needs: products, inner products, and Gauss-Jordan inversion
//! with partial pivoting. Everything is a pure function over
//! [`DMatrix<f64>`] / [`DVector<f64>`]; dimension violations and singular
//! inputs are reported as typed errors, never panics.
//!
//! Partial pivoting is not optional here: covariance matrices built from
//! near-collinear asset histories are routinely close to singular, and
//! naive elimination loses the frontier entirely on such inputs.

use crate::error::{MathError, MathResult};
use nalgebra::{DMatrix, DVector};

/// Smallest pivot magnitude accepted during Gauss-Jordan elimination.
///
/// A column whose best remaining pivot falls below this threshold marks the
/// matrix as numerically singular.
pub const PIVOT_TOLERANCE: f64 = 1e-12;

/// Computes the dense matrix product `A × B`.
///
/// # Errors
///
/// Returns [`MathError::DimensionMismatch`] if `columns(A) != rows(B)`.
pub fn multiply(a: &DMatrix<f64>, b: &DMatrix<f64>) -> MathResult<DMatrix<f64>> {
    if a.ncols() != b.nrows() {
        return Err(MathError::DimensionMismatch {
            rows1: a.nrows(),
            cols1: a.ncols(),
            rows2: b.nrows(),
            cols2: b.ncols(),
        });
    }

    let (n, k, m) = (a.nrows(), a.ncols(), b.ncols());
    let mut out = DMatrix::zeros(n, m);

    for i in 0..n {
        for j in 0..m {
            let mut sum = 0.0;
            for p in 0..k {
                sum += a[(i, p)] * b[(p, j)];
            }
            out[(i, j)] = sum;
        }
    }

    Ok(out)
}

/// Computes the matrix-vector product `A × v`.
///
/// # Errors
///
/// Returns [`MathError::DimensionMismatch`] if `columns(A) != len(v)`.
pub fn apply(a: &DMatrix<f64>, v: &DVector<f64>) -> MathResult<DVector<f64>> {
    if a.ncols() != v.len() {
        return Err(MathError::DimensionMismatch {
            rows1: a.nrows(),
            cols1: a.ncols(),
            rows2: v.len(),
            cols2: 1,
        });
    }

    let mut out = DVector::zeros(a.nrows());
    for i in 0..a.nrows() {
        let mut sum = 0.0;
        for j in 0..a.ncols() {
            sum += a[(i, j)] * v[j];
        }
        out[i] = sum;
    }

    Ok(out)
}

/// Computes the inner product of two vectors.
///
/// # Errors
///
/// Returns [`MathError::DimensionMismatch`] if the lengths differ.
pub fn dot(a: &DVector<f64>, b: &DVector<f64>) -> MathResult<f64> {
    if a.len() != b.len() {
        return Err(MathError::DimensionMismatch {
            rows1: a.len(),
            cols1: 1,
            rows2: b.len(),
            cols2: 1,
        });
    }

    let mut sum = 0.0;
    for i in 0..a.len() {
        sum += a[i] * b[i];
    }

    Ok(sum)
}

/// Inverts a square matrix by Gauss-Jordan elimination with partial pivoting.
///
/// Works on the augmented matrix `[M | I]`: for each column the largest
/// remaining pivot is swapped into place, the pivot row is normalized, and
/// the column is eliminated from every other row. After `n` columns the
/// right half of the augmented matrix is `M⁻¹`.
///
/// # Errors
///
/// - [`MathError::InvalidInput`] if the matrix is not square.
/// - [`MathError::SingularMatrix`] if some column has no pivot with
///   magnitude at least [`PIVOT_TOLERANCE`] among the remaining rows.
pub fn invert(m: &DMatrix<f64>) -> MathResult<DMatrix<f64>> {
    let n = m.nrows();
    if n != m.ncols() {
        return Err(MathError::invalid_input(
            "Matrix must be square for inversion",
        ));
    }

    // Augmented [M | I], worked in place.
    let mut aug = DMatrix::zeros(n, 2 * n);
    for i in 0..n {
        for j in 0..n {
            aug[(i, j)] = m[(i, j)];
        }
        aug[(i, n + i)] = 1.0;
    }

    for col in 0..n {
        // Partial pivoting: pick the largest magnitude in this column among
        // the rows not yet used as pivots.
        let mut pivot_row = col;
        let mut pivot_mag = aug[(col, col)].abs();
        for row in col + 1..n {
            let mag = aug[(row, col)].abs();
            if mag > pivot_mag {
                pivot_row = row;
                pivot_mag = mag;
            }
        }

        if pivot_mag < PIVOT_TOLERANCE {
            return Err(MathError::SingularMatrix {
                column: col,
                tolerance: PIVOT_TOLERANCE,
            });
        }

        if pivot_row != col {
            aug.swap_rows(pivot_row, col);
        }

        // Normalize the pivot row.
        let pivot = aug[(col, col)];
        for j in 0..2 * n {
            aug[(col, j)] /= pivot;
        }

        // Eliminate the column from every other row.
        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = aug[(row, col)];
            if factor == 0.0 {
                continue;
            }
            for j in 0..2 * n {
                aug[(row, j)] -= factor * aug[(col, j)];
            }
        }
    }

    let mut inv = DMatrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            inv[(i, j)] = aug[(i, n + j)];
        }
    }

    Ok(inv)
}
