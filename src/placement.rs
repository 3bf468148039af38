//! Randomized fleet placement.

use rand::Rng;

use crate::board::Board;
use crate::config::FLEET;
use crate::coord::{Coord, Grid};
use crate::ship::{Orientation, ShipKind};

/// Place the standard fleet onto a fresh board, one ship at a time in fixed
/// order, resampling anchors until each ship lands without overlap. Ships may
/// touch but never share a cell.
pub fn place_fleet<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Board {
    let mut board = Board::new(grid);
    for kind in FLEET {
        place_ship(&mut board, kind, rng);
    }
    board
}

fn place_ship<R: Rng + ?Sized>(board: &mut Board, kind: ShipKind, rng: &mut R) {
    let grid = board.grid();
    let len = kind.length();
    // Anchors are sampled in-bounds for the chosen orientation, so the only
    // possible rejection is overlap. Termination is probabilistic: at most 17
    // of 100 cells are ever occupied.
    loop {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_x, max_y) = match orientation {
            Orientation::Horizontal => (grid.size_x(), grid.size_y() + 1 - len),
            Orientation::Vertical => (grid.size_x() + 1 - len, grid.size_y()),
        };
        let anchor = Coord::new(rng.random_range(0..max_x), rng.random_range(0..max_y));
        if board.place_ship(kind, anchor, orientation).is_ok() {
            log::debug!("placed {} at {anchor}", kind.name());
            return;
        }
    }
}
