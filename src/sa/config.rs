//! SA configuration.

use crate::error::{PlacementError, Result};

/// Configuration for simulated annealing.
///
/// The temperature at step `t` is `initial_temperature / (t + 1)`.
///
/// # Examples
///
/// ```
/// use hospital_placement::sa::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(10.0)
///     .with_max_steps(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingConfig {
    /// Temperature at step 0. Must be positive and finite.
    pub initial_temperature: f64,

    /// Number of steps. The run never stops early.
    pub max_steps: usize,

    /// Whether to forward search events to `tracing`.
    pub logging: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10.0,
            max_steps: 100,
            logging: false,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_logging(mut self, logging: bool) -> Self {
        self.logging = logging;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(PlacementError::invalid(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if self.max_steps == 0 {
            return Err(PlacementError::invalid("max_steps must be at least 1"));
        }
        Ok(())
    }
}
