//! Grid model: coordinates, placements and the [`Space`] aggregate.
//!
//! - [`Coord`]: a grid cell with Manhattan distance
//! - [`Placement`]: an ordered set of hospital cells
//! - [`Space`]: dimensions, houses, current hospitals, cost evaluation

mod coord;
mod grid;
mod placement;
mod search;

pub use coord::Coord;
pub use grid::Space;
pub use placement::Placement;
