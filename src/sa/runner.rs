//! SA execution loop.

use super::config::AnnealingConfig;
use crate::error::{PlacementError, Result};
use crate::observer::{EventKind, EventSink, NoopObserver, SearchObserver};
use crate::random::rng_from;
use crate::space::{Coord, Placement, Space};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Result of a simulated annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingResult {
    /// The placement current after the last step.
    pub placement: Placement,

    /// Cost of `placement`.
    pub cost: u64,

    /// Lowest cost held at any step. May be below `cost`.
    pub best_cost: u64,

    /// Steps executed. Always equals `max_steps`.
    pub steps: usize,

    /// Temperature used at the last step.
    pub final_temperature: f64,

    /// Moves accepted because they were strictly cheaper.
    pub improving_moves: usize,

    /// Moves accepted although they were not cheaper.
    pub accepted_worse: usize,

    /// Moves rejected.
    pub rejected_moves: usize,

    /// Current cost before the first step and after every step.
    pub cost_history: Vec<u64>,
}

/// Outcome of the acceptance test for one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The move is strictly cheaper.
    Improve,
    /// The move is not cheaper but passed the random draw.
    AcceptWorse,
    Reject,
}

/// Temperature at `step`: `initial / (step + 1)`.
pub fn temperature(initial: f64, step: usize) -> f64 {
    initial / (step as f64 + 1.0)
}

/// Probability of taking a non-improving move: `exp(-1 / temperature)`.
///
/// Depends only on the temperature, not on how much worse the move is.
pub fn acceptance_probability(temperature: f64) -> f64 {
    (-1.0 / temperature).exp()
}

/// Acceptance test for moving from `current_cost` to `candidate_cost`.
///
/// Strictly cheaper candidates are accepted without drawing from `rng`.
pub fn decide<R: Rng>(
    current_cost: u64,
    candidate_cost: u64,
    temperature: f64,
    rng: &mut R,
) -> Decision {
    if candidate_cost < current_cost {
        Decision::Improve
    } else if rng.random::<f64>() < acceptance_probability(temperature) {
        Decision::AcceptWorse
    } else {
        Decision::Reject
    }
}

/// Executes simulated annealing.
pub struct AnnealingRunner;

impl AnnealingRunner {
    /// Runs exactly `config.max_steps` annealing steps.
    ///
    /// # Errors
    ///
    /// - [`PlacementError::InvalidConfiguration`] for a bad config
    /// - [`PlacementError::ExhaustedCandidates`] if fewer cells are free than
    ///   hospitals requested, or a chosen hospital has no free neighbor
    pub fn run(space: &Space, config: &AnnealingConfig) -> Result<AnnealingResult> {
        Self::run_with_observer(space, config, &mut NoopObserver)
    }

    /// Runs annealing, reporting every step to `observer`.
    pub fn run_with_observer<O: SearchObserver + ?Sized>(
        space: &Space,
        config: &AnnealingConfig,
        observer: &mut O,
    ) -> Result<AnnealingResult> {
        config.validate()?;

        let mut rng = rng_from(config.seed);
        let mut sink = EventSink::new(observer, config.logging, "simulated_annealing");

        let mut current = space.random_placement(&mut rng)?;
        let mut current_cost = space.cost(&current)?;
        let mut best_cost = current_cost;

        let mut improving_moves = 0usize;
        let mut accepted_worse = 0usize;
        let mut rejected_moves = 0usize;
        let mut final_temperature = config.initial_temperature;

        let mut cost_history = Vec::with_capacity(config.max_steps + 1);
        cost_history.push(current_cost);

        tracing::debug!(
            initial_temperature = config.initial_temperature,
            max_steps = config.max_steps,
            cost = current_cost,
            "simulated annealing started"
        );

        for step in 0..config.max_steps {
            let t = temperature(config.initial_temperature, step);
            final_temperature = t;

            let (hospital, cell) = random_move(space, &current, &mut rng)?;
            let candidate = current.swapped(hospital, cell);
            let candidate_cost = space.cost(&candidate)?;

            let kind = match decide(current_cost, candidate_cost, t, &mut rng) {
                Decision::Improve => {
                    improving_moves += 1;
                    EventKind::Improved
                }
                Decision::AcceptWorse => {
                    accepted_worse += 1;
                    EventKind::AcceptedWorse
                }
                Decision::Reject => {
                    rejected_moves += 1;
                    EventKind::Rejected
                }
            };

            if kind == EventKind::Rejected {
                sink.emit(step, candidate_cost, kind);
            } else {
                current = candidate;
                current_cost = candidate_cost;
                best_cost = best_cost.min(current_cost);
                sink.emit(step, current_cost, kind);
            }
            cost_history.push(current_cost);
        }

        tracing::info!(cost = current_cost, "simulated annealing final cost");

        Ok(AnnealingResult {
            placement: current,
            cost: current_cost,
            best_cost,
            steps: config.max_steps,
            final_temperature,
            improving_moves,
            accepted_worse,
            rejected_moves,
            cost_history,
        })
    }
}

/// Picks a hospital uniformly, then one of its free neighbors uniformly.
fn random_move<R: Rng>(space: &Space, current: &Placement, rng: &mut R) -> Result<(Coord, Coord)> {
    let hospitals = current.to_vec();
    let &hospital = hospitals.choose(rng).ok_or(PlacementError::EmptyPlacement)?;

    let neighbours: Vec<Coord> = space.neighbors_of(hospital, current).into_iter().collect();
    let &cell = neighbours
        .choose(rng)
        .ok_or_else(|| PlacementError::exhausted(format!("a move of hospital {hospital}")))?;

    Ok((hospital, cell))
}
