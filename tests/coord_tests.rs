use battleship_sim::{standard_grid, Coord, GameError, Grid};
use proptest::prelude::*;

#[test]
fn labels_format_upper_case() {
    let grid = standard_grid();
    assert_eq!(grid.label(Coord::new(0, 0)).unwrap(), "A1");
    assert_eq!(grid.label(Coord::new(4, 4)).unwrap(), "E5");
    assert_eq!(grid.label(Coord::new(9, 9)).unwrap(), "J10");
    assert!(grid.label(Coord::new(10, 0)).is_err());
}

#[test]
fn parsing_is_case_insensitive() {
    let grid = standard_grid();
    assert_eq!(grid.parse_label("e5").unwrap(), Coord::new(4, 4));
    assert_eq!(grid.parse_label("E5").unwrap(), Coord::new(4, 4));
    assert_eq!(grid.parse_label("j10").unwrap(), Coord::new(9, 9));
}

#[test]
fn malformed_labels_are_rejected() {
    let grid = standard_grid();
    for label in ["", "E", "11", "K1", "A0", "A11", "5A", "E5x", "??"] {
        assert!(
            matches!(
                grid.parse_label(label),
                Err(GameError::InvalidCoordinate(_))
            ),
            "{label:?} should be rejected"
        );
    }
}

#[test]
fn index_is_row_major_and_bounds_checked() {
    let grid = standard_grid();
    assert_eq!(grid.index(Coord::new(0, 0)).unwrap(), 0);
    assert_eq!(grid.index(Coord::new(4, 4)).unwrap(), 44);
    assert_eq!(grid.index(Coord::new(9, 9)).unwrap(), 99);
    assert!(grid.index(Coord::new(10, 0)).is_err());
    assert!(grid.index(Coord::new(0, 10)).is_err());
    assert!(grid.coord(100).is_err());
}

#[test]
fn rectangular_grids_index_by_row() {
    let grid = Grid::new(4, 7);
    assert_eq!(grid.cell_count(), 28);
    assert_eq!(grid.index(Coord::new(1, 0)).unwrap(), 7);
    assert_eq!(grid.parse_label("D7").unwrap(), Coord::new(3, 6));
    assert!(grid.parse_label("E1").is_err());
    assert!(grid.parse_label("A8").is_err());
}

proptest! {
    #[test]
    fn label_round_trip(x in 0..10usize, y in 0..10usize) {
        let grid = standard_grid();
        let coord = Coord::new(x, y);
        let label = grid.label(coord).unwrap();
        prop_assert_eq!(grid.parse_label(&label).unwrap(), coord);
    }

    #[test]
    fn index_round_trip(idx in 0..100usize) {
        let grid = standard_grid();
        let coord = grid.coord(idx).unwrap();
        prop_assert_eq!(grid.index(coord).unwrap(), idx);
    }
}
