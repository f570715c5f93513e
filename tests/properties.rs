//! Property tests for the cost function, the neighbor rule and hill
//! climbing termination.

use hospital_placement::hill_climb::{scan_neighbourhood, HillClimbConfig, HillClimbRunner};
use hospital_placement::{Coord, Placement, Space};
use proptest::prelude::*;

fn build_space(width: i32, height: i32, n: usize, houses: &[(i32, i32)]) -> Space {
    let mut space = Space::new(width, height, n).unwrap();
    for &(x, y) in houses {
        space.add_house(x, y);
    }
    space
}

fn cells(max: i32, len: usize) -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((0..max, 0..max), 0..len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cost_zero_iff_every_house_covered(
        houses in cells(8, 10),
        hospitals in prop::collection::vec((0i32..8, 0i32..8), 1..6),
    ) {
        let space = build_space(8, 8, hospitals.len(), &houses);
        let placement: Placement = hospitals.iter().map(|&c| Coord::from(c)).collect();

        let cost = space.cost(&placement).unwrap();
        let covered = space.houses().iter().all(|h| placement.contains(h));
        prop_assert_eq!(cost == 0, covered);

        let nearest_sum: u64 = space
            .houses()
            .iter()
            .map(|&h| placement.iter().map(|&p| p.manhattan(h)).min().unwrap())
            .sum();
        prop_assert_eq!(cost, nearest_sum);
    }

    #[test]
    fn neighbors_stay_free_and_local(
        width in 1i32..9,
        height in 1i32..9,
        houses in cells(9, 12),
        hospitals in prop::collection::vec((0i32..9, 0i32..9), 1..5),
    ) {
        let space = build_space(width, height, hospitals.len(), &houses);
        let placement: Placement = hospitals
            .iter()
            .map(|&c| Coord::from(c))
            .filter(|c| space.in_bounds(*c) && !space.houses().contains(c))
            .collect();
        prop_assume!(!placement.is_empty());

        for &origin in &placement {
            for n in space.neighbors_of(origin, &placement) {
                prop_assert!(n != origin);
                prop_assert!(space.in_bounds(n));
                prop_assert!(!space.houses().contains(&n));
                prop_assert!(!placement.contains(&n));
                prop_assert!((n.x - origin.x).abs() <= 1 && (n.y - origin.y).abs() <= 1);
            }
        }
    }

    #[test]
    fn hill_climb_ends_at_local_optimum(
        houses in cells(7, 8),
        n in 1usize..4,
        seed in any::<u64>(),
    ) {
        let space = build_space(7, 7, n, &houses);
        let config = HillClimbConfig::default().with_seed(seed);
        let result = HillClimbRunner::run(&space, &config).unwrap();

        let scan = scan_neighbourhood(&space, &result.placement, false).unwrap();
        prop_assert!(scan.is_local_optimum(result.cost));
        prop_assert!(result.cost <= result.initial_cost);
        prop_assert!(result.placement.len() <= n);
        for h in &result.placement {
            prop_assert!(!space.houses().contains(h));
        }
    }
}
