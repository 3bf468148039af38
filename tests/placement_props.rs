use battleship_sim::{place_fleet, standard_grid, Cell, FLEET, TOTAL_FLEET_HP};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_occupies_exactly_seventeen_cells(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = place_fleet(standard_grid(), &mut rng);
        let occupied = board
            .iter()
            .filter(|(_, cell)| matches!(cell, Cell::Ship(_)))
            .count();
        prop_assert_eq!(occupied, TOTAL_FLEET_HP as usize);
    }

    #[test]
    fn every_ship_covers_its_full_length(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = place_fleet(standard_grid(), &mut rng);
        for kind in FLEET {
            let cells = board
                .iter()
                .filter(|&(_, cell)| cell == Cell::Ship(kind))
                .count();
            prop_assert_eq!(cells, kind.length(), "{} misplaced", kind.name());
        }
    }
}
