//! Pluggable shot-selection policies, from blind traversal to probability
//! density targeting.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::common::ShotResult;
use crate::config::FLEET;
use crate::coord::{Coord, Grid};
use crate::density::{best_cell, hunting_density, targeting_density};
use crate::ship::ShipKind;
use crate::status::GameStatus;

/// Shot-selection policy. Reset at the start of every game, then consulted
/// once per turn with the attacker's latest view of the game.
pub trait Strategy {
    fn name(&self) -> &'static str;

    /// Forget all per-game state.
    fn reset(&mut self, rng: &mut SmallRng);

    /// Pick the next shot. Only called while the game is live.
    fn shoot(&mut self, status: &GameStatus, rng: &mut SmallRng) -> Coord;
}

/// Ordered pool of coordinates not yet fired upon.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    coords: Vec<Coord>,
}

impl CandidatePool {
    /// Every grid coordinate in row-major order.
    pub fn full(grid: Grid) -> Self {
        Self {
            coords: grid.coords().collect(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut SmallRng) {
        self.coords.shuffle(rng);
    }

    pub fn pop_front(&mut self) -> Option<Coord> {
        if self.coords.is_empty() {
            None
        } else {
            Some(self.coords.remove(0))
        }
    }

    pub fn remove(&mut self, coord: Coord) {
        self.coords.retain(|&c| c != coord);
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

/// Fixed left-to-right, top-to-bottom traversal, no repeats.
pub struct SequentialStrategy {
    grid: Grid,
    pool: CandidatePool,
}

impl SequentialStrategy {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            pool: CandidatePool::full(grid),
        }
    }
}

impl Strategy for SequentialStrategy {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn reset(&mut self, _rng: &mut SmallRng) {
        self.pool = CandidatePool::full(self.grid);
    }

    fn shoot(&mut self, _status: &GameStatus, _rng: &mut SmallRng) -> Coord {
        self.pool.pop_front().expect("candidate pool exhausted")
    }
}

/// Sequential's candidate list, shuffled once per game.
pub struct RandomStrategy {
    grid: Grid,
    pool: CandidatePool,
}

impl RandomStrategy {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            pool: CandidatePool::full(grid),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn reset(&mut self, rng: &mut SmallRng) {
        self.pool = CandidatePool::full(self.grid);
        self.pool.shuffle(rng);
    }

    fn shoot(&mut self, _status: &GameStatus, _rng: &mut SmallRng) -> Coord {
        self.pool.pop_front().expect("candidate pool exhausted")
    }
}

/// Random exploration plus a FIFO queue of cells adjacent to unresolved
/// hits. The queue always outranks the pool.
pub struct HuntAndTargetStrategy {
    grid: Grid,
    pool: CandidatePool,
    targets: VecDeque<Coord>,
}

impl HuntAndTargetStrategy {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            pool: CandidatePool::full(grid),
            targets: VecDeque::new(),
        }
    }
}

impl Strategy for HuntAndTargetStrategy {
    fn name(&self) -> &'static str {
        "hunt-and-target"
    }

    fn reset(&mut self, rng: &mut SmallRng) {
        self.pool = CandidatePool::full(self.grid);
        self.pool.shuffle(rng);
        self.targets.clear();
    }

    fn shoot(&mut self, status: &GameStatus, _rng: &mut SmallRng) -> Coord {
        if let Some((shot, result)) = status.last_shot() {
            if result.is_hit() {
                for neighbor in status.surrounding_coords(shot) {
                    if self.pool.contains(neighbor) && !self.targets.contains(&neighbor) {
                        self.targets.push_back(neighbor);
                    }
                }
            }
        }
        match self.targets.pop_front() {
            Some(coord) => {
                self.pool.remove(coord);
                coord
            }
            None => self.pool.pop_front().expect("candidate pool exhausted"),
        }
    }
}

/// Scores every empty cell by counting placements of surviving ships that
/// stay consistent with the known hits and misses, then fires at the peak.
pub struct ProbabilityStrategy {
    alive: Vec<ShipKind>,
    /// Hits not yet attributed to a sunk ship.
    active_hits: Vec<Coord>,
    /// Ships sunk while their hits were still active.
    sunk_pending: Vec<ShipKind>,
    shots_seen: usize,
}

impl ProbabilityStrategy {
    pub fn new() -> Self {
        Self {
            alive: FLEET.to_vec(),
            active_hits: Vec::new(),
            sunk_pending: Vec::new(),
            shots_seen: 0,
        }
    }

    /// Fold the newest recorded shot into the hit bookkeeping. Safe to call
    /// more than once per turn; already-seen shots are skipped.
    fn observe(&mut self, status: &GameStatus) {
        if status.offence_shots().len() == self.shots_seen {
            return;
        }
        self.shots_seen = status.offence_shots().len();
        let Some((shot, result)) = status.last_shot() else {
            return;
        };
        match result {
            ShotResult::Miss => {}
            ShotResult::Hit => self.active_hits.push(shot),
            ShotResult::Sunk(kind) => {
                self.active_hits.push(shot);
                self.alive.retain(|&k| k != kind);
                self.sunk_pending.push(kind);
                let resolved: usize = self.sunk_pending.iter().map(|k| k.length()).sum();
                if resolved == self.active_hits.len() {
                    // every unresolved hit is accounted for by a sunk ship
                    self.active_hits.clear();
                    self.sunk_pending.clear();
                }
            }
        }
    }
}

impl Default for ProbabilityStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for ProbabilityStrategy {
    fn name(&self) -> &'static str {
        "probability"
    }

    fn reset(&mut self, _rng: &mut SmallRng) {
        self.alive = FLEET.to_vec();
        self.active_hits.clear();
        self.sunk_pending.clear();
        self.shots_seen = 0;
    }

    fn shoot(&mut self, status: &GameStatus, _rng: &mut SmallRng) -> Coord {
        self.observe(status);
        let board = status.offence_board();
        let density = if self.active_hits.is_empty() {
            hunting_density(board, &self.alive)
        } else {
            targeting_density(board, &self.alive, &self.active_hits)
        };
        best_cell(board, &density).expect("no unresolved cell left to shoot")
    }
}

/// Look up a strategy by its command-line name.
pub fn strategy_by_name(name: &str, grid: Grid) -> Option<Box<dyn Strategy>> {
    match name {
        "sequential" => Some(Box::new(SequentialStrategy::new(grid))),
        "random" => Some(Box::new(RandomStrategy::new(grid))),
        "hunt" | "hunt-and-target" => Some(Box::new(HuntAndTargetStrategy::new(grid))),
        "probability" => Some(Box::new(ProbabilityStrategy::new())),
        _ => None,
    }
}
