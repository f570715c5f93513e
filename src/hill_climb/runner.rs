//! Hill climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Draw a random initial placement
//! 2. At each iteration:
//!    a. Cost every placement reachable by moving one hospital to one of
//!    its free neighbor cells
//!    b. Collect all moves reaching the minimum cost
//!    c. If that minimum is not strictly below the current cost, stop
//!    d. Otherwise move to one of the collected placements at random
//! 3. Terminate at a local optimum, a plateau, or the iteration cap

use super::config::HillClimbConfig;
use crate::error::Result;
use crate::observer::{EventKind, EventSink, NoopObserver, SearchObserver};
use crate::random::rng_from;
use crate::space::{Placement, Space};
use rand::Rng;

/// Why a hill climbing run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// Every move is worse, or no move exists.
    LocalOptimum,
    /// The best move ties the current cost.
    Plateau,
    /// `max_iterations` was reached.
    IterationLimit,
}

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbResult {
    /// The final placement.
    pub placement: Placement,

    /// Cost of the final placement.
    pub cost: u64,

    /// Cost of the random initial placement.
    pub initial_cost: u64,

    /// Number of neighborhood scans performed.
    pub iterations: usize,

    /// Current cost after every accepted move, starting with the initial cost.
    pub cost_history: Vec<u64>,

    pub stop_reason: StopReason,
}

/// Outcome of costing one full single-swap neighborhood.
#[derive(Debug, Clone, Default)]
pub struct NeighbourhoodScan {
    /// Lowest cost among all moves. `None` when no move exists.
    pub best_cost: Option<u64>,

    /// Every placement reaching `best_cost`, in generation order.
    pub best_neighbours: Vec<Placement>,

    /// Number of moves costed.
    pub evaluated: usize,
}

impl NeighbourhoodScan {
    /// True if no move strictly improves on `current_cost`.
    pub fn is_local_optimum(&self, current_cost: u64) -> bool {
        self.best_cost.is_none_or(|best| best >= current_cost)
    }
}

/// Costs every single-swap move of `placement`.
///
/// Moves are generated hospital by hospital in placement order, and for
/// each hospital over its free neighbors in coordinate order. Ties are
/// collected, not broken.
pub fn scan_neighbourhood(
    space: &Space,
    placement: &Placement,
    parallel: bool,
) -> Result<NeighbourhoodScan> {
    let moves: Vec<Placement> = placement
        .iter()
        .flat_map(|&hospital| {
            space
                .neighbors_of(hospital, placement)
                .into_iter()
                .map(move |cell| placement.swapped(hospital, cell))
        })
        .collect();

    let costs = evaluate(space, &moves, parallel)?;

    let mut scan = NeighbourhoodScan {
        evaluated: moves.len(),
        ..NeighbourhoodScan::default()
    };
    for (candidate, cost) in moves.into_iter().zip(costs) {
        match scan.best_cost {
            Some(best) if cost > best => {}
            Some(best) if cost == best => scan.best_neighbours.push(candidate),
            _ => {
                scan.best_cost = Some(cost);
                scan.best_neighbours = vec![candidate];
            }
        }
    }
    Ok(scan)
}

#[cfg(feature = "parallel")]
fn evaluate(space: &Space, moves: &[Placement], parallel: bool) -> Result<Vec<u64>> {
    use rayon::prelude::*;

    if parallel {
        moves.par_iter().map(|p| space.cost(p)).collect()
    } else {
        moves.iter().map(|p| space.cost(p)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate(space: &Space, moves: &[Placement], _parallel: bool) -> Result<Vec<u64>> {
    moves.iter().map(|p| space.cost(p)).collect()
}

/// Executes steepest-descent hill climbing.
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Runs hill climbing on `space`.
    ///
    /// # Errors
    ///
    /// [`PlacementError::ExhaustedCandidates`](crate::PlacementError) if fewer
    /// cells are free of houses than hospitals requested.
    pub fn run(space: &Space, config: &HillClimbConfig) -> Result<HillClimbResult> {
        Self::run_with_observer(space, config, &mut NoopObserver)
    }

    /// Runs hill climbing, reporting every step to `observer`.
    pub fn run_with_observer<O: SearchObserver + ?Sized>(
        space: &Space,
        config: &HillClimbConfig,
        observer: &mut O,
    ) -> Result<HillClimbResult> {
        let mut rng = rng_from(config.seed);
        let mut sink = EventSink::new(observer, config.logging, "hill_climb");

        let mut current = space.random_placement(&mut rng)?;
        let mut current_cost = space.cost(&current)?;
        let initial_cost = current_cost;
        let mut cost_history = vec![current_cost];
        let mut iterations = 0usize;

        tracing::debug!(
            hospitals = current.len(),
            cost = current_cost,
            max_iterations = ?config.max_iterations,
            "hill climbing started"
        );

        let stop_reason = loop {
            if config.max_iterations.is_some_and(|max| iterations >= max) {
                break StopReason::IterationLimit;
            }
            let step = iterations;
            iterations += 1;

            let mut scan = scan_neighbourhood(space, &current, config.parallel)?;
            match scan.best_cost {
                Some(best) if best < current_cost => {
                    let pick = rng.random_range(0..scan.best_neighbours.len());
                    current = scan.best_neighbours.swap_remove(pick);
                    current_cost = best;
                    cost_history.push(current_cost);
                    sink.emit(step, current_cost, EventKind::Improved);
                }
                Some(best) if best == current_cost => {
                    sink.emit(step, current_cost, EventKind::Plateau);
                    break StopReason::Plateau;
                }
                _ => {
                    sink.emit(step, current_cost, EventKind::LocalOptimum);
                    break StopReason::LocalOptimum;
                }
            }
        };

        tracing::debug!(
            iterations,
            cost = current_cost,
            ?stop_reason,
            "hill climbing finished"
        );

        Ok(HillClimbResult {
            placement: current,
            cost: current_cost,
            initial_cost,
            iterations,
            cost_history,
            stop_reason,
        })
    }
}
