//! The grid model: dimensions, houses and the current hospitals.

use super::coord::Coord;
use super::placement::Placement;
use crate::error::{PlacementError, Result};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// A bounded grid holding fixed houses and a hospital placement.
///
/// Search runners borrow a `Space` immutably and return new placements.
/// The in-place search methods (see [`Space::hill_climb`]) store their
/// result back into [`Space::hospitals`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Space {
    width: i32,
    height: i32,
    num_hospitals: usize,
    houses: BTreeSet<Coord>,
    hospitals: Placement,
}

impl Space {
    /// Creates an empty grid.
    ///
    /// # Errors
    ///
    /// [`PlacementError::InvalidConfiguration`] if either dimension is not
    /// positive or `num_hospitals` is zero.
    pub fn new(width: i32, height: i32, num_hospitals: usize) -> Result<Self> {
        if width <= 0 {
            return Err(PlacementError::invalid(format!(
                "width must be positive, got {width}"
            )));
        }
        if height <= 0 {
            return Err(PlacementError::invalid(format!(
                "height must be positive, got {height}"
            )));
        }
        if num_hospitals == 0 {
            return Err(PlacementError::invalid("num_hospitals must be at least 1"));
        }
        Ok(Self {
            width,
            height,
            num_hospitals,
            houses: BTreeSet::new(),
            hospitals: Placement::new(),
        })
    }

    /// Adds a house at `(x, y)` if `0 < x < width` and `0 < y < height`.
    ///
    /// Row and column zero are rejected along with everything outside the
    /// grid. A cell currently holding a hospital is rejected too, so houses
    /// and hospitals stay disjoint. Rejected coordinates are dropped
    /// silently; the return value reports whether the house was added.
    pub fn add_house(&mut self, x: i32, y: i32) -> bool {
        let cell = Coord::new(x, y);
        if 0 < x && x < self.width && 0 < y && y < self.height && !self.hospitals.contains(&cell)
        {
            self.houses.insert(cell)
        } else {
            false
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn num_hospitals(&self) -> usize {
        self.num_hospitals
    }

    pub fn houses(&self) -> &BTreeSet<Coord> {
        &self.houses
    }

    /// The current hospitals. Empty until a search has been stored.
    pub fn hospitals(&self) -> &Placement {
        &self.hospitals
    }

    pub(crate) fn set_hospitals(&mut self, placement: Placement) {
        self.hospitals = placement;
    }

    pub fn in_bounds(&self, cell: Coord) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// All cells holding neither a house nor a current hospital.
    pub fn candidate_cells(&self) -> BTreeSet<Coord> {
        self.free_cells(&self.hospitals)
    }

    /// All cells holding neither a house nor a hospital of `placement`.
    pub fn free_cells(&self, placement: &Placement) -> BTreeSet<Coord> {
        (0..self.width)
            .flat_map(|x| (0..self.height).map(move |y| Coord::new(x, y)))
            .filter(|c| !self.houses.contains(c) && !placement.contains(c))
            .collect()
    }

    /// The in-grid cells of the 3x3 block around `(x, y)`, minus houses and
    /// current hospitals.
    pub fn neighbors(&self, x: i32, y: i32) -> BTreeSet<Coord> {
        self.neighbors_of(Coord::new(x, y), &self.hospitals)
    }

    /// The in-grid cells of the 3x3 block around `cell`, minus houses and
    /// the hospitals of `placement`.
    ///
    /// The block includes `cell` itself before exclusion, so the result
    /// never contains `cell` when `cell` is one of the hospitals.
    pub fn neighbors_of(&self, cell: Coord, placement: &Placement) -> BTreeSet<Coord> {
        let mut out = BTreeSet::new();
        for dx in [1, 0, -1] {
            for dy in [1, 0, -1] {
                let n = Coord::new(cell.x + dx, cell.y + dy);
                if self.in_bounds(n) && !self.houses.contains(&n) && !placement.contains(&n) {
                    out.insert(n);
                }
            }
        }
        out
    }

    /// Sum over houses of the Manhattan distance to the nearest hospital.
    ///
    /// # Errors
    ///
    /// [`PlacementError::EmptyPlacement`] if `placement` has no hospitals.
    pub fn cost(&self, placement: &Placement) -> Result<u64> {
        if placement.is_empty() {
            return Err(PlacementError::EmptyPlacement);
        }
        self.houses
            .iter()
            .map(|&house| {
                placement
                    .iter()
                    .map(|&h| h.manhattan(house))
                    .min()
                    .ok_or(PlacementError::EmptyPlacement)
            })
            .sum()
    }

    /// Cost of the stored hospitals.
    pub fn current_cost(&self) -> Result<u64> {
        self.cost(&self.hospitals)
    }

    /// Draws `num_hospitals` independent uniform picks from the cells free of
    /// houses.
    ///
    /// Picks are made with replacement: two picks may land on the same cell,
    /// in which case the placement holds fewer than `num_hospitals` cells.
    ///
    /// # Errors
    ///
    /// [`PlacementError::ExhaustedCandidates`] if fewer cells are free than
    /// hospitals requested.
    pub(crate) fn random_placement<R: Rng>(&self, rng: &mut R) -> Result<Placement> {
        let pool: Vec<Coord> = self.free_cells(&Placement::new()).into_iter().collect();
        if pool.len() < self.num_hospitals {
            return Err(PlacementError::exhausted(format!(
                "{} initial hospitals ({} free cells)",
                self.num_hospitals,
                pool.len()
            )));
        }
        (0..self.num_hospitals)
            .map(|_| {
                pool.choose(rng)
                    .copied()
                    .ok_or_else(|| PlacementError::exhausted("initial hospital"))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn space_with(width: i32, height: i32, n: usize, houses: &[(i32, i32)]) -> Space {
        let mut space = Space::new(width, height, n).unwrap();
        for &(x, y) in houses {
            space.add_house(x, y);
        }
        space
    }

    fn placement(cells: &[(i32, i32)]) -> Placement {
        cells.iter().map(|&c| Coord::from(c)).collect()
    }

    #[test]
    fn test_new_rejects_bad_config() {
        assert!(matches!(
            Space::new(0, 5, 1),
            Err(PlacementError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Space::new(5, -1, 1),
            Err(PlacementError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Space::new(5, 5, 0),
            Err(PlacementError::InvalidConfiguration(_))
        ));
        assert!(Space::new(1, 1, 1).is_ok());
    }

    #[test]
    fn test_add_house_strict_interior() {
        let mut space = Space::new(5, 5, 1).unwrap();
        assert!(!space.add_house(0, 5));
        assert!(!space.add_house(5, 0));
        assert!(!space.add_house(0, 2));
        assert!(!space.add_house(2, 0));
        assert!(!space.add_house(4, 5));
        assert!(!space.add_house(-1, 2));
        assert!(space.houses().is_empty());

        assert!(space.add_house(1, 1));
        assert!(space.add_house(4, 4));
        assert!(!space.add_house(1, 1), "duplicate house");
        assert_eq!(space.houses().len(), 2);
    }

    #[test]
    fn test_add_house_skips_hospital_cell() {
        let mut space = Space::new(5, 5, 1).unwrap();
        space.set_hospitals(placement(&[(2, 2)]));
        assert!(!space.add_house(2, 2));
        assert!(space.houses().is_empty());
        assert!(space.add_house(2, 3));
    }

    #[test]
    fn test_candidate_cells_excludes_occupied() {
        let mut space = space_with(3, 3, 1, &[(1, 1)]);
        space.set_hospitals(placement(&[(0, 0)]));

        let candidates = space.candidate_cells();
        assert_eq!(candidates.len(), 7);
        assert!(!candidates.contains(&Coord::new(1, 1)));
        assert!(!candidates.contains(&Coord::new(0, 0)));
    }

    #[test]
    fn test_neighbors_corner_clipped() {
        let mut space = Space::new(4, 4, 1).unwrap();
        space.set_hospitals(placement(&[(0, 0)]));

        let n = space.neighbors(0, 0);
        let expected: BTreeSet<Coord> = [(0, 1), (1, 0), (1, 1)]
            .into_iter()
            .map(Coord::from)
            .collect();
        assert_eq!(n, expected);
    }

    #[test]
    fn test_neighbors_excludes_houses_and_hospitals() {
        let mut space = space_with(5, 5, 2, &[(1, 1), (3, 3)]);
        space.set_hospitals(placement(&[(2, 2), (2, 3)]));

        let n = space.neighbors(2, 2);
        assert_eq!(n.len(), 5);
        for c in [(2, 2), (2, 3), (1, 1), (3, 3)] {
            assert!(!n.contains(&Coord::from(c)), "{c:?} should be excluded");
        }
    }

    #[test]
    fn test_cost_examples() {
        let space = space_with(5, 5, 2, &[(1, 1), (3, 3)]);
        assert_eq!(space.cost(&placement(&[(2, 2)])).unwrap(), 4);
        assert_eq!(space.cost(&placement(&[(1, 2), (3, 2)])).unwrap(), 2);
        assert_eq!(space.cost(&placement(&[(1, 1), (3, 3)])).unwrap(), 0);
    }

    #[test]
    fn test_cost_empty_placement_errors_without_houses() {
        let space = Space::new(5, 5, 1).unwrap();
        assert_eq!(
            space.cost(&Placement::new()),
            Err(PlacementError::EmptyPlacement)
        );
    }

    #[test]
    fn test_cost_empty_placement_errors() {
        let space = space_with(5, 5, 1, &[(1, 1)]);
        assert_eq!(
            space.cost(&Placement::new()),
            Err(PlacementError::EmptyPlacement)
        );
        assert_eq!(space.current_cost(), Err(PlacementError::EmptyPlacement));
    }

    #[test]
    fn test_cost_without_houses_is_zero() {
        let space = Space::new(5, 5, 1).unwrap();
        assert_eq!(space.cost(&placement(&[(0, 0)])).unwrap(), 0);
    }

    #[test]
    fn test_random_placement_avoids_houses() {
        let space = space_with(4, 4, 3, &[(1, 1), (2, 2), (3, 3)]);
        let mut rng = create_rng(11);
        for _ in 0..50 {
            let p = space.random_placement(&mut rng).unwrap();
            assert!(!p.is_empty() && p.len() <= 3);
            for c in &p {
                assert!(space.in_bounds(*c));
                assert!(!space.houses().contains(c));
            }
        }
    }

    #[test]
    fn test_random_placement_more_hospitals_than_free_cells() {
        let space = Space::new(1, 2, 3).unwrap();
        let mut rng = create_rng(5);
        assert!(matches!(
            space.random_placement(&mut rng),
            Err(PlacementError::ExhaustedCandidates { .. })
        ));
    }

    #[test]
    fn test_random_placement_samples_with_replacement() {
        // Four picks from four free cells are all distinct only 4!/4^4 of
        // the time, so some draws must collide.
        let space = Space::new(2, 2, 4).unwrap();
        let mut rng = create_rng(5);
        let sizes: Vec<usize> = (0..50)
            .map(|_| space.random_placement(&mut rng).unwrap().len())
            .collect();
        assert!(sizes.iter().all(|&n| (1..=4).contains(&n)));
        assert!(sizes.iter().any(|&n| n < 4));
    }

    #[test]
    fn test_random_placement_exhausted() {
        let mut rng = create_rng(0);
        let dense = Space {
            width: 1,
            height: 1,
            num_hospitals: 1,
            houses: [Coord::new(0, 0)].into_iter().collect(),
            hospitals: Placement::new(),
        };
        assert!(matches!(
            dense.random_placement(&mut rng),
            Err(PlacementError::ExhaustedCandidates { .. })
        ));
    }
}
