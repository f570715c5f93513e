//! Hill climbing configuration.

/// Configuration for steepest-descent hill climbing.
///
/// # Examples
///
/// ```
/// use hospital_placement::hill_climb::HillClimbConfig;
///
/// let config = HillClimbConfig::default()
///     .with_max_iterations(20)
///     .with_seed(42)
///     .with_logging(true);
/// assert_eq!(config.max_iterations, Some(20));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbConfig {
    /// Iteration cap. `None` runs until a local optimum.
    pub max_iterations: Option<usize>,

    /// Whether to forward search events to `tracing`.
    pub logging: bool,

    /// Whether to cost the neighborhood in parallel using rayon.
    ///
    /// Only has an effect with the `parallel` feature. Results are identical
    /// either way.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl HillClimbConfig {
    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Removes the iteration cap.
    pub fn unbounded(mut self) -> Self {
        self.max_iterations = None;
        self
    }

    pub fn with_logging(mut self, logging: bool) -> Self {
        self.logging = logging;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
