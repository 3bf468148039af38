use crate::coord::Grid;
use crate::ship::ShipKind;

pub const SIZE_X: usize = 10;
pub const SIZE_Y: usize = 10;
pub const NUM_SHIPS: usize = 5;

/// Fleet in placement order.
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::PatrolBoat,
    ShipKind::Submarine,
    ShipKind::Destroyer,
    ShipKind::Battleship,
    ShipKind::Carrier,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_FLEET_HP: u32 = 17;

/// The standard 10x10 grid.
pub const fn standard_grid() -> Grid {
    Grid::new(SIZE_X, SIZE_Y)
}
