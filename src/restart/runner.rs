//! Random-restart execution loop.

use super::config::RestartConfig;
use crate::error::{PlacementError, Result};
use crate::hill_climb::{HillClimbConfig, HillClimbRunner};
use crate::observer::{EventKind, EventSink, NoopObserver, SearchObserver};
use crate::random::rng_from;
use crate::space::{Placement, Space};
use rand::Rng;

/// Result of a random-restart run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartResult {
    /// The cheapest placement over all runs.
    pub placement: Placement,

    /// Cost of `placement`.
    pub cost: u64,

    /// Index of the first run that reached `cost`.
    pub best_run: usize,

    /// Final cost of every run, in order.
    pub run_costs: Vec<u64>,

    /// Seed each run was started with. Replaying a seed through
    /// [`HillClimbRunner`] reproduces that run.
    pub run_seeds: Vec<u64>,

    /// Neighborhood scans summed over all runs.
    pub total_iterations: usize,
}

/// Executes random-restart hill climbing.
pub struct RestartRunner;

impl RestartRunner {
    /// Runs `config.restarts` independent hill climbs and keeps the best.
    ///
    /// # Errors
    ///
    /// [`PlacementError::InvalidConfiguration`] if `restarts` is zero, or
    /// any error raised by a hill climbing run.
    pub fn run(space: &Space, config: &RestartConfig) -> Result<RestartResult> {
        Self::run_with_observer(space, config, &mut NoopObserver)
    }

    /// Runs random restarts, reporting each finished run to `observer`.
    ///
    /// The event step is the run index; the cost is that run's final cost.
    pub fn run_with_observer<O: SearchObserver + ?Sized>(
        space: &Space,
        config: &RestartConfig,
        observer: &mut O,
    ) -> Result<RestartResult> {
        config.validate()?;

        let mut rng = rng_from(config.seed);
        let mut sink = EventSink::new(observer, config.logging, "random_restart");

        let mut best: Option<(Placement, u64, usize)> = None;
        let mut run_costs = Vec::with_capacity(config.restarts);
        let mut run_seeds = Vec::with_capacity(config.restarts);
        let mut total_iterations = 0usize;

        tracing::debug!(restarts = config.restarts, "random restart started");

        for run in 0..config.restarts {
            let seed: u64 = rng.random();
            let hc_config = HillClimbConfig::default()
                .unbounded()
                .with_parallel(config.parallel)
                .with_seed(seed);
            let result = HillClimbRunner::run(space, &hc_config)?;

            run_costs.push(result.cost);
            run_seeds.push(seed);
            total_iterations += result.iterations;

            if best.as_ref().is_none_or(|&(_, cost, _)| result.cost < cost) {
                sink.emit(run, result.cost, EventKind::NewBest);
                best = Some((result.placement, result.cost, run));
            } else {
                sink.emit(run, result.cost, EventKind::RestartFinished);
            }
        }

        let (placement, cost, best_run) =
            best.ok_or_else(|| PlacementError::invalid("restarts must be at least 1"))?;

        tracing::debug!(cost, best_run, total_iterations, "random restart finished");

        Ok(RestartResult {
            placement,
            cost,
            best_run,
            run_costs,
            run_seeds,
            total_iterations,
        })
    }
}
