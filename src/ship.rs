//! Fleet definitions: the five classic ship kinds and their orientations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Member of the classic five-ship fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipKind {
    PatrolBoat,
    Submarine,
    Destroyer,
    Battleship,
    Carrier,
}

impl ShipKind {
    /// Ship's display name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::PatrolBoat => "Patrol Boat",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Battleship => "Battleship",
            ShipKind::Carrier => "Carrier",
        }
    }

    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::PatrolBoat => 2,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 3,
            ShipKind::Battleship => 4,
            ShipKind::Carrier => 5,
        }
    }

    /// Digit marker used on defence boards.
    pub const fn marker(self) -> char {
        match self {
            ShipKind::PatrolBoat => '1',
            ShipKind::Submarine => '2',
            ShipKind::Destroyer => '3',
            ShipKind::Battleship => '4',
            ShipKind::Carrier => '5',
        }
    }

    /// Ordinal used to index per-kind arrays.
    pub const fn index(self) -> usize {
        match self {
            ShipKind::PatrolBoat => 0,
            ShipKind::Submarine => 1,
            ShipKind::Destroyer => 2,
            ShipKind::Battleship => 3,
            ShipKind::Carrier => 4,
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
