//! Authoritative per-side game state: boards, shot logs, health counters and
//! win detection.

use crate::board::{Board, Cell};
use crate::common::{GameError, ShotResult};
use crate::config::{FLEET, NUM_SHIPS, TOTAL_FLEET_HP};
use crate::coord::{Coord, Grid};
use crate::ship::ShipKind;

/// Game state for one side. The defence board is the ground truth the
/// opponent shoots at; the offence board is this side's view of the enemy,
/// built purely from its own shot results.
#[derive(Debug, Clone)]
pub struct GameStatus {
    grid: Grid,
    turn: u32,
    defence_board: Board,
    offence_board: Board,
    defence_shot_log: Vec<Coord>,
    offence_shot_log: Vec<Coord>,
    /// Turn number and kind of every enemy ship this side has sunk.
    offence_sink_log: Vec<(u32, ShipKind)>,
    defence_ships_hp: [u32; NUM_SHIPS],
    offence_ships_alive: Vec<ShipKind>,
    defence_hp_sum: u32,
    offence_hp_sum: u32,
    game_over: bool,
    offence_win: bool,
    defence_win: bool,
}

impl GameStatus {
    pub fn new(grid: Grid) -> Self {
        let mut defence_ships_hp = [0u32; NUM_SHIPS];
        for kind in FLEET {
            defence_ships_hp[kind.index()] = kind.length() as u32;
        }
        Self {
            grid,
            turn: 1,
            defence_board: Board::new(grid),
            offence_board: Board::new(grid),
            defence_shot_log: Vec::new(),
            offence_shot_log: Vec::new(),
            offence_sink_log: Vec::new(),
            defence_ships_hp,
            offence_ships_alive: FLEET.to_vec(),
            defence_hp_sum: TOTAL_FLEET_HP,
            offence_hp_sum: TOTAL_FLEET_HP,
            game_over: false,
            offence_win: false,
            defence_win: false,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Offence turn counter, starting at 1.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn offence_board(&self) -> &Board {
        &self.offence_board
    }

    pub fn defence_board(&self) -> &Board {
        &self.defence_board
    }

    pub fn offence_shots(&self) -> &[Coord] {
        &self.offence_shot_log
    }

    pub fn defence_shots(&self) -> &[Coord] {
        &self.defence_shot_log
    }

    pub fn sink_log(&self) -> &[(u32, ShipKind)] {
        &self.offence_sink_log
    }

    /// Enemy ships this side has not yet sunk.
    pub fn offence_ships_alive(&self) -> &[ShipKind] {
        &self.offence_ships_alive
    }

    pub fn defence_ship_hp(&self, kind: ShipKind) -> u32 {
        self.defence_ships_hp[kind.index()]
    }

    pub fn offence_hp_sum(&self) -> u32 {
        self.offence_hp_sum
    }

    pub fn defence_hp_sum(&self) -> u32 {
        self.defence_hp_sum
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn offence_win(&self) -> bool {
        self.offence_win
    }

    pub fn defence_win(&self) -> bool {
        self.defence_win
    }

    /// Install the ground-truth ship layout.
    ///
    /// The layout hook is deliberately permissive; placement validity is
    /// [`place_fleet`](crate::place_fleet)'s responsibility. Only a board
    /// over a different grid is rejected, since every later index would lie.
    pub fn set_defence_board(&mut self, board: Board) -> Result<(), GameError> {
        if board.grid() != self.grid || !Self::verify_board(&board) {
            return Err(GameError::InvalidShipPlacement);
        }
        self.defence_board = board;
        Ok(())
    }

    // Hook for future layout validation.
    fn verify_board(_board: &Board) -> bool {
        true
    }

    /// Apply an incoming shot to the defence board. Duplicates fail with
    /// [`GameError::InvalidShot`] and mutate nothing.
    pub fn apply_defence_shot(&mut self, shot: Coord) -> Result<ShotResult, GameError> {
        match self.defence_board.cell(shot)? {
            Cell::Miss | Cell::Hit => Err(GameError::InvalidShot(shot)),
            Cell::Empty => {
                self.defence_shot_log.push(shot);
                self.defence_board.set(shot, Cell::Miss);
                Ok(ShotResult::Miss)
            }
            Cell::Ship(kind) => {
                assert!(
                    self.defence_ships_hp[kind.index()] > 0,
                    "hit on an already drained ship"
                );
                self.defence_shot_log.push(shot);
                self.defence_board.set(shot, Cell::Hit);
                self.defence_ships_hp[kind.index()] -= 1;
                self.defence_hp_sum -= 1;
                let sunk = self.defence_ships_hp[kind.index()] == 0;
                if self.defence_hp_sum == 0 {
                    // the attacking side has drained this board
                    self.offence_win = true;
                    self.defence_win = false;
                    self.game_over = true;
                }
                Ok(if sunk {
                    ShotResult::Sunk(kind)
                } else {
                    ShotResult::Hit
                })
            }
        }
    }

    /// Record the result of this side's own shot on the offence board.
    ///
    /// Recording a coordinate that is already resolved there is a caller bug
    /// and panics.
    pub fn record_offence_shot(&mut self, shot: Coord, result: ShotResult) -> Result<(), GameError> {
        let cell = self.offence_board.cell(shot)?;
        assert!(!cell.is_resolved(), "offence shot at {shot} recorded twice");
        self.offence_shot_log.push(shot);
        match result {
            ShotResult::Miss => self.offence_board.set(shot, Cell::Miss),
            ShotResult::Hit | ShotResult::Sunk(_) => {
                self.offence_board.set(shot, Cell::Hit);
                assert!(self.offence_hp_sum > 0, "hit recorded past a drained fleet");
                self.offence_hp_sum -= 1;
                if let ShotResult::Sunk(kind) = result {
                    self.offence_sink_log.push((self.turn, kind));
                    self.offence_ships_alive.retain(|&k| k != kind);
                    log::debug!("turn {}: sank the enemy {}", self.turn, kind.name());
                }
                if self.offence_hp_sum == 0 {
                    assert!(
                        self.offence_ships_alive.is_empty(),
                        "fleet drained with ships still afloat"
                    );
                    self.offence_win = true;
                    self.defence_win = false;
                    self.game_over = true;
                }
            }
        }
        self.turn += 1;
        Ok(())
    }

    /// Most recent offence shot and its result, reporting `Sunk` only when
    /// the sink was recorded on that exact turn. `None` before any shot.
    pub fn last_shot(&self) -> Option<(Coord, ShotResult)> {
        let shot = *self.offence_shot_log.last()?;
        let result = match self.offence_board.at(shot) {
            Cell::Miss => ShotResult::Miss,
            Cell::Hit => match self.offence_sink_log.last() {
                Some(&(turn, kind)) if turn == self.turn - 1 => ShotResult::Sunk(kind),
                _ => ShotResult::Hit,
            },
            _ => unreachable!("logged shot without a resolved marker"),
        };
        Some((shot, result))
    }

    /// In-bounds orthogonal neighbors of `shot` in fixed {+x, -x, +y, -y}
    /// order.
    pub fn surrounding_coords(&self, shot: Coord) -> Vec<Coord> {
        self.grid.orthogonal_neighbors(shot)
    }
}
