//! Hospital placement on a grid by local search.
//!
//! A [`Space`] holds fixed houses on a bounded integer grid. The searches
//! choose cells for a fixed number of hospitals so that the sum, over all
//! houses, of the Manhattan distance to the nearest hospital is small:
//!
//! - **Hill climbing** ([`hill_climb`]): steepest descent over single-swap
//!   moves with random tie-breaking, stopping at the first plateau.
//! - **Random restart** ([`restart`]): repeated hill climbs from fresh random
//!   placements, keeping the cheapest.
//! - **Simulated annealing** ([`sa`]): random single-swap moves with a
//!   `T0 / (t + 1)` temperature.
//!
//! Runners borrow the space immutably and return their placement; the
//! methods on [`Space`] store it back for callers that want the in-place
//! style. Steps are reported through [`observer::SearchObserver`].
//!
//! # Examples
//!
//! ```
//! use hospital_placement::hill_climb::{HillClimbConfig, HillClimbRunner};
//! use hospital_placement::Space;
//!
//! let mut space = Space::new(10, 8, 2).unwrap();
//! for (x, y) in [(1, 1), (2, 6), (7, 3), (8, 7)] {
//!     space.add_house(x, y);
//! }
//!
//! let result = HillClimbRunner::run(&space, &HillClimbConfig::default().with_seed(42)).unwrap();
//! assert_eq!(space.cost(&result.placement).unwrap(), result.cost);
//! ```

pub mod error;
pub mod hill_climb;
pub mod observer;
pub mod random;
pub mod restart;
pub mod sa;
pub mod space;

pub use error::{PlacementError, Result};
pub use space::{Coord, Placement, Space};
