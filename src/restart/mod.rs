//! Random-restart hill climbing.
//!
//! Runs unbounded hill climbing several times from independent random
//! placements and keeps the cheapest result. A later run only replaces the
//! best when it is strictly cheaper.

mod config;
mod runner;

pub use config::RestartConfig;
pub use runner::{RestartResult, RestartRunner};
