//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Derivative magnitude below which the Newton step is considered unstable.
pub const DERIVATIVE_FLOOR: f64 = 1e-12;

/// Bounded Newton-Raphson root finding.
///
/// Uses the iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)` with three guards:
///
/// - a derivative with magnitude below [`DERIVATIVE_FLOOR`] aborts the solve
///   (the step would be numerically unstable);
/// - if `config.bounds = Some((min, max))`, an iterate leaving `(min, max]`
///   aborts the solve as divergent;
/// - convergence requires both `|step| < config.tolerance` and
///   `|f(x)| < config.residual_tolerance`.
///
/// When the iteration budget is exhausted, the last iterate is accepted only
/// if its residual still passes `residual_tolerance`.
///
/// # Example
///
/// ```rust
/// use tangency_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);
        let dfx = df(x);

        if dfx.abs() < DERIVATIVE_FLOOR {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let step = fx / dfx;
        x -= step;

        if let Some((min, max)) = config.bounds {
            if x <= min || x > max {
                return Err(MathError::Diverged { value: x, min, max });
            }
        }

        let residual = f(x);
        if step.abs() < config.tolerance && residual.abs() < config.residual_tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual,
            });
        }
    }

    // Budget exhausted: accept only if the residual already qualifies.
    let residual = f(x);
    if residual.abs() < config.residual_tolerance {
        return Ok(SolverResult {
            root: x,
            iterations: config.max_iterations,
            residual,
        });
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        residual.abs(),
    ))
}
