//! Sampling configuration for the frontier optimizer.

/// Number of target-return samples on the analytical path.
pub const DEFAULT_SAMPLES: usize = 200;

/// Steps per weight axis for the n=2 sweep and n=3 grid.
pub const DEFAULT_GRID_STEPS: usize = 101;

/// Random candidate draws for the n>3 sweep.
pub const DEFAULT_RANDOM_CANDIDATES: usize = 5000;

/// Equal-width return bins used to thin sweep candidates.
pub const DEFAULT_RETURN_BINS: usize = 50;

/// Configuration for frontier sampling.
///
/// Defaults reproduce the standard chart resolution; tests pin `seed` so the
/// n>3 random sweep is deterministic.
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Target-return samples on the analytical path.
    pub samples: usize,
    /// Steps per weight axis for the low-dimension sweeps.
    pub grid_steps: usize,
    /// Random candidate draws for n>3 assets.
    pub random_candidates: usize,
    /// Equal-width return bins for envelope thinning.
    pub return_bins: usize,
    /// Seed for the random sweep; `None` draws entropy.
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            grid_steps: DEFAULT_GRID_STEPS,
            random_candidates: DEFAULT_RANDOM_CANDIDATES,
            return_bins: DEFAULT_RETURN_BINS,
            seed: None,
        }
    }
}

impl SweepConfig {
    /// Sets the number of analytical target-return samples.
    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Sets the steps per weight axis for the grid sweeps.
    #[must_use]
    pub fn with_grid_steps(mut self, grid_steps: usize) -> Self {
        self.grid_steps = grid_steps;
        self
    }

    /// Sets the number of random candidates for n>3 assets.
    #[must_use]
    pub fn with_random_candidates(mut self, random_candidates: usize) -> Self {
        self.random_candidates = random_candidates;
        self
    }

    /// Sets the number of return bins for envelope thinning.
    #[must_use]
    pub fn with_return_bins(mut self, return_bins: usize) -> Self {
        self.return_bins = return_bins;
        self
    }

    /// Pins the random sweep to a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
