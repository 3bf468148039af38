//! Input sources feeding the interactive loop.

use std::io::{self, BufRead, StdinLock, Write};

use crate::coord::{Coord, Grid};

/// One poll of an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A well-formed, in-bounds shot.
    Shot(Coord),
    /// Malformed or out-of-range input; no shot this cycle.
    Invalid,
    /// The player asked to leave, or the stream ended.
    Quit,
}

/// Yields shots for the interactive game.
pub trait InputSource {
    fn poll(&mut self, grid: &Grid) -> InputEvent;
}

/// Line-oriented input over any reader. `q`, `quit` and end-of-input quit
/// the game.
pub struct LineInput<R> {
    reader: R,
}

impl LineInput<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            reader: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> LineInput<R> {
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn poll(&mut self, grid: &Grid) -> InputEvent {
        let last = Coord::new(grid.size_x() - 1, grid.size_y() - 1);
        print!("A1~{last} (q quits) > ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => return InputEvent::Quit,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return InputEvent::Quit;
        }
        match grid.parse_label(line) {
            Ok(coord) => InputEvent::Shot(coord),
            Err(err) => {
                log::warn!("{err}");
                InputEvent::Invalid
            }
        }
    }
}
