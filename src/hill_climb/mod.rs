//! Steepest-descent hill climbing.
//!
//! Each iteration costs every single-swap move (one hospital to one of its
//! free neighbor cells) and moves to a uniformly chosen member of the set
//! of cheapest moves. The search stops as soon as the cheapest move is not
//! strictly better than the current placement, so it never walks along a
//! plateau.

mod config;
mod runner;

pub use config::HillClimbConfig;
pub use runner::{
    scan_neighbourhood, HillClimbResult, HillClimbRunner, NeighbourhoodScan, StopReason,
};
