//! # Tangency Math
//!
//! Numerical kernel for the Tangency portfolio analytics engine.
//!
//! This crate provides:
//!
//! - **Linear Algebra**: Dense matrix operations and Gauss-Jordan inversion
//!   with partial pivoting
//! - **Solvers**: Bounded Newton-Raphson root finding
//!
//! ## Design Philosophy
//!
//! - **Explicit failure**: singular matrices and non-convergent iterations are
//!   reported as typed errors, never as sentinel values or panics
//! - **Numerical Stability**: partial pivoting and derivative floors guard the
//!   near-degenerate inputs that realistic covariance data produces
//! - **Small on purpose**: only the operations the frontier and IRR engines
//!   need, not a general-purpose linear algebra surface

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod linear_algebra;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::linear_algebra::{apply, dot, invert, multiply};
    pub use crate::solvers::{newton_raphson, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
