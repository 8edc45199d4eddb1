//! # Tangency Frontier
//!
//! Mean-variance efficient frontier optimizer.
//!
//! Given expected returns μ and a covariance matrix Σ, this crate computes
//! the efficient frontier: the set of portfolios offering the lowest standard
//! deviation for each level of expected return.
//!
//! ## Two paths, one result
//!
//! - **Analytical** (preferred): when Σ is invertible and the frontier
//!   discriminant is well-conditioned, the classic Lagrangian solution yields
//!   two-fund decomposition vectors `g` and `h` such that the minimizing
//!   weights for any target return `m` are `g + h·m`. The frontier is then
//!   sampled in closed form.
//! - **Weight sweep** (fallback): when Σ is numerically singular (perfectly
//!   correlated assets) or the discriminant collapses (no variation in μ),
//!   candidate weight vectors are swept or sampled, and the envelope is
//!   approximated by keeping the minimum-risk candidate in each return bin.
//!   No inversion is required on this path.
//!
//! The returned [`FrontierSolution`] records which path produced it, so a
//! caller rendering hover detail knows whether to recompute weights via
//! `g + h·m` or to look up the nearest sampled point.
//!
//! ## Units
//!
//! Returns and standard deviations are fractional (0.05 = 5%), both on input
//! and output. Percentage conversion belongs to the presentation layer.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: identical inputs recompute identical results, with
//!   no cross-call caching (the n>3 random sweep is reproducible via
//!   [`SweepConfig::with_seed`])
//! - **Degrade explicitly**: degenerate inputs produce a typed error the
//!   caller renders as a warning, never a silently empty chart

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod config;
pub mod error;
pub mod optimizer;
pub mod types;

pub use config::SweepConfig;
pub use error::{FrontierError, FrontierResult};
pub use optimizer::efficient_frontier;
pub use types::{FrontierCoefficients, FrontierSolution, PortfolioPoint};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::SweepConfig;
    pub use crate::error::{FrontierError, FrontierResult};
    pub use crate::optimizer::efficient_frontier;
    pub use crate::types::{FrontierCoefficients, FrontierSolution, PortfolioPoint};
}
