//! Error types for frontier optimization.

use tangency_math::MathError;
use thiserror::Error;

/// Result type for frontier operations.
pub type FrontierResult<T> = Result<T, FrontierError>;

/// Errors that can occur during frontier optimization.
#[derive(Error, Debug, Clone)]
pub enum FrontierError {
    /// Input cannot produce a frontier (non-positive variance, shape
    /// mismatch, non-finite entries). The caller should render this as a
    /// warning instead of a chart.
    #[error("Degenerate input: {reason}")]
    DegenerateInput {
        /// Description of the degenerate input.
        reason: String,
    },

    /// Fewer than two assets were supplied.
    #[error("Too few assets: need at least 2, got {actual}")]
    TooFewAssets {
        /// Number of assets supplied.
        actual: usize,
    },

    /// A kernel operation failed outside the handled fallback path.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl FrontierError {
    /// Creates a degenerate input error.
    #[must_use]
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FrontierError::degenerate("asset 1 has non-positive variance");
        assert!(err.to_string().contains("non-positive variance"));

        let err = FrontierError::TooFewAssets { actual: 1 };
        assert!(err.to_string().contains("got 1"));
    }
}
