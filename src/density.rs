//! Placement-count densities behind the probability strategy. Every function
//! operates on an offence-view board, whose cells are only ever empty, miss
//! or hit.

use crate::board::{ship_span, Board, Cell};
use crate::coord::{Coord, Grid};
use crate::ship::{Orientation, ShipKind};

/// Visit every in-bounds placement of every surviving ship kind.
fn for_each_placement<F: FnMut(&[Coord])>(grid: Grid, alive: &[ShipKind], mut visit: F) {
    for &kind in alive {
        let len = kind.length();
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => {
                    (grid.size_x(), (grid.size_y() + 1).saturating_sub(len))
                }
                Orientation::Vertical => ((grid.size_x() + 1).saturating_sub(len), grid.size_y()),
            };
            for x in 0..max_x {
                for y in 0..max_y {
                    visit(&ship_span(Coord::new(x, y), len, orientation));
                }
            }
        }
    }
}

/// Hunting mode: count, for every surviving ship kind, the placements that
/// cross only empty cells, crediting every covered cell.
pub fn hunting_density(board: &Board, alive: &[ShipKind]) -> Vec<u32> {
    let grid = board.grid();
    let mut density = vec![0u32; grid.cell_count()];
    for_each_placement(grid, alive, |span| {
        if span.iter().any(|&c| board.at(c) != Cell::Empty) {
            return;
        }
        for &c in span {
            density[grid.offset(c)] += 1;
        }
    });
    density
}

/// Targeting mode: count placements consistent with the unresolved hits.
/// A span may never cross a miss, may cross a hit only if that hit is still
/// active, and must cover at least one active hit. Only still-empty cells
/// are credited.
pub fn targeting_density(board: &Board, alive: &[ShipKind], active_hits: &[Coord]) -> Vec<u32> {
    let grid = board.grid();
    let mut density = vec![0u32; grid.cell_count()];
    for_each_placement(grid, alive, |span| {
        let mut covers_active = false;
        for &c in span {
            match board.at(c) {
                Cell::Empty => {}
                Cell::Hit if active_hits.contains(&c) => covers_active = true,
                _ => return,
            }
        }
        if !covers_active {
            return;
        }
        for &c in span {
            if board.at(c) == Cell::Empty {
                density[grid.offset(c)] += 1;
            }
        }
    });
    density
}

/// Highest-density cell that is still empty. Earlier row-major cells win
/// ties, so a given board always yields the same shot.
pub fn best_cell(board: &Board, density: &[u32]) -> Option<Coord> {
    let mut best: Option<(Coord, u32)> = None;
    for ((coord, cell), &d) in board.iter().zip(density) {
        if cell != Cell::Empty {
            continue;
        }
        match best {
            Some((_, best_d)) if d <= best_d => {}
            _ => best = Some((coord, d)),
        }
    }
    best.map(|(coord, _)| coord)
}
