//! Random-restart configuration.

use crate::error::{PlacementError, Result};

/// Configuration for random-restart hill climbing.
///
/// # Examples
///
/// ```
/// use hospital_placement::restart::RestartConfig;
///
/// let config = RestartConfig::default().with_restarts(10).with_seed(7);
/// assert_eq!(config.restarts, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartConfig {
    /// Number of independent hill climbing runs.
    pub restarts: usize,

    /// Whether to forward search events to `tracing`.
    pub logging: bool,

    /// Passed through to each hill climbing run.
    pub parallel: bool,

    /// Master seed. Each run gets its own seed drawn from it.
    pub seed: Option<u64>,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            restarts: 20,
            logging: false,
            parallel: false,
            seed: None,
        }
    }
}

impl RestartConfig {
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
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

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.restarts == 0 {
            return Err(PlacementError::invalid("restarts must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RestartConfig::default();
        assert_eq!(config.restarts, 20);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_restarts() {
        let config = RestartConfig::default().with_restarts(0);
        assert!(matches!(
            config.validate(),
            Err(PlacementError::InvalidConfiguration(_))
        ));
    }
}
