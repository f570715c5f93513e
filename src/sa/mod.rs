//! Simulated Annealing (SA).
//!
//! A single-placement trajectory search. Each step moves one random
//! hospital to one of its free neighbor cells. Improving moves are always
//! taken. Any other move is taken with probability `exp(-1 / T)` where
//! `T = T0 / (step + 1)`, regardless of how much worse it is.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::AnnealingConfig;
pub use runner::{
    acceptance_probability, decide, temperature, AnnealingResult, AnnealingRunner, Decision,
};
