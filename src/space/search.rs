//! In-place search entry points on [`Space`].
//!
//! Thin wrappers over the runners that store the resulting placement in
//! [`Space::hospitals`]. Use the runners directly to keep the space
//! untouched or to observe events.

use super::grid::Space;
use super::placement::Placement;
use crate::error::Result;
use crate::hill_climb::{HillClimbConfig, HillClimbResult, HillClimbRunner};
use crate::restart::{RestartConfig, RestartResult, RestartRunner};
use crate::sa::{AnnealingConfig, AnnealingResult, AnnealingRunner};

impl Space {
    /// Hill climbs from a fresh random placement and stores the result.
    ///
    /// `max_iterations` of `None` runs until a local optimum.
    pub fn hill_climb(
        &mut self,
        max_iterations: Option<usize>,
        enable_logging: bool,
    ) -> Result<&Placement> {
        let config = HillClimbConfig {
            max_iterations,
            logging: enable_logging,
            ..HillClimbConfig::default()
        };
        self.hill_climb_with(&config)?;
        Ok(self.hospitals())
    }

    /// Hill climbs with an explicit config and stores the result.
    pub fn hill_climb_with(&mut self, config: &HillClimbConfig) -> Result<HillClimbResult> {
        let result = HillClimbRunner::run(self, config)?;
        self.set_hospitals(result.placement.clone());
        Ok(result)
    }

    /// Runs `restarts` hill climbs and stores the cheapest placement.
    pub fn random_restart_hill_climb(
        &mut self,
        restarts: usize,
        enable_logging: bool,
    ) -> Result<&Placement> {
        let config = RestartConfig::default()
            .with_restarts(restarts)
            .with_logging(enable_logging);
        self.random_restart_with(&config)?;
        Ok(self.hospitals())
    }

    /// Random restarts with an explicit config; stores the best placement.
    pub fn random_restart_with(&mut self, config: &RestartConfig) -> Result<RestartResult> {
        let result = RestartRunner::run(self, config)?;
        self.set_hospitals(result.placement.clone());
        Ok(result)
    }

    /// Anneals for `max_steps` steps and stores the final placement.
    ///
    /// Returns the final cost.
    pub fn simulated_annealing(
        &mut self,
        initial_temperature: f64,
        max_steps: usize,
        enable_logging: bool,
    ) -> Result<u64> {
        let config = AnnealingConfig::default()
            .with_initial_temperature(initial_temperature)
            .with_max_steps(max_steps)
            .with_logging(enable_logging);
        Ok(self.simulated_annealing_with(&config)?.cost)
    }

    /// Annealing with an explicit config; stores the final placement.
    pub fn simulated_annealing_with(
        &mut self,
        config: &AnnealingConfig,
    ) -> Result<AnnealingResult> {
        let result = AnnealingRunner::run(self, config)?;
        self.set_hospitals(result.placement.clone());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::PlacementError;
    use crate::hill_climb::HillClimbConfig;
    use crate::restart::RestartConfig;
    use crate::sa::AnnealingConfig;
    use crate::space::Space;

    fn two_houses() -> Space {
        let mut space = Space::new(5, 5, 2).unwrap();
        space.add_house(1, 1);
        space.add_house(3, 3);
        space
    }

    #[test]
    fn test_hill_climb_stores_result() {
        let mut space = two_houses();
        assert!(space.hospitals().is_empty());

        let result = space
            .hill_climb_with(&HillClimbConfig::default().with_seed(1))
            .unwrap();
        assert_eq!(space.hospitals(), &result.placement);
        assert_eq!(space.current_cost().unwrap(), result.cost);
        assert!(space
            .hospitals()
            .iter()
            .all(|h| !space.houses().contains(h)));
    }

    #[test]
    fn test_unseeded_wrappers() {
        let mut space = two_houses();

        let placement = space.hill_climb(Some(20), false).unwrap().clone();
        assert!(!placement.is_empty());

        space.random_restart_hill_climb(3, false).unwrap();
        assert!(!space.hospitals().is_empty());

        let cost = space.simulated_annealing(10.0, 50, false).unwrap();
        assert_eq!(space.current_cost().unwrap(), cost);
    }

    #[test]
    fn test_restart_and_annealing_store_results() {
        let mut space = two_houses();
        let restart = space
            .random_restart_with(&RestartConfig::default().with_restarts(5).with_seed(2))
            .unwrap();
        assert_eq!(space.hospitals(), &restart.placement);

        let annealed = space
            .simulated_annealing_with(&AnnealingConfig::default().with_seed(2))
            .unwrap();
        assert_eq!(space.hospitals(), &annealed.placement);
    }

    #[test]
    fn test_failed_search_keeps_previous_hospitals() {
        let mut space = two_houses();
        space
            .hill_climb_with(&HillClimbConfig::default().with_seed(4))
            .unwrap();
        let before = space.hospitals().clone();

        let err = space.simulated_annealing(-1.0, 10, false).unwrap_err();
        assert!(matches!(err, PlacementError::InvalidConfiguration(_)));
        assert_eq!(space.hospitals(), &before);
    }
}
