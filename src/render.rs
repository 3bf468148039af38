//! Render sinks: where the game loop pushes board snapshots and progress
//! text. Fire-and-forget; sinks never feed anything back.

use crate::board::Board;
use crate::coord::{Coord, Grid};

/// Rendering surface fed after every applied turn.
pub trait RenderSink {
    fn draw_board(&mut self, board: &Board);
    fn message(&mut self, text: &str);
}

/// Prints boards and messages to stdout.
pub struct ConsoleRender;

impl RenderSink for ConsoleRender {
    fn draw_board(&mut self, board: &Board) {
        println!("{board}");
    }

    fn message(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Swallows everything. Batch simulations render nowhere.
pub struct NullRender;

impl RenderSink for NullRender {
    fn draw_board(&mut self, _board: &Board) {}

    fn message(&mut self, _text: &str) {}
}

/// Print a density matrix with the same headers as the board rendering.
pub fn print_density(grid: Grid, density: &[u32]) {
    print!("  ");
    for y in 0..grid.size_y() {
        print!(" {:>3}", y + 1);
    }
    println!();
    for x in 0..grid.size_x() {
        print!("{} ", (b'A' + x as u8) as char);
        for y in 0..grid.size_y() {
            print!(" {:>3}", density[grid.offset(Coord::new(x, y))]);
        }
        println!();
    }
}
