//! Gym-style environment adapter over the core engine: discrete cell-index
//! actions, observation of the attacker's own board, scalar rewards.

use rand::rngs::SmallRng;

use crate::board::Cell;
use crate::common::GameError;
use crate::coord::{Coord, Grid};
use crate::placement::place_fleet;
use crate::status::GameStatus;

/// Episodes truncate after this many steps when the fleet is not yet sunk.
pub const MAX_EPISODE_STEPS: u32 = 100;

/// Attacker's view of the board: -1 miss, 0 unknown, 1 hit.
pub type Observation = Vec<Vec<i8>>;

/// Everything `step` reports back to the agent.
#[derive(Debug, Clone)]
pub struct Step {
    pub observation: Observation,
    pub reward: i32,
    pub terminated: bool,
    pub truncated: bool,
    /// Rejected actions so far this episode.
    pub invalid_shots: u32,
}

/// Single-agent environment firing row-major cell indices at a randomly
/// placed enemy fleet. All state lives in memory for exactly one episode.
pub struct BattleshipEnv {
    grid: Grid,
    rng: SmallRng,
    offence: GameStatus,
    defence: GameStatus,
    steps: u32,
    invalid_shots: u32,
}

impl BattleshipEnv {
    pub fn new(grid: Grid, rng: SmallRng) -> Result<Self, GameError> {
        let mut env = Self {
            grid,
            rng,
            offence: GameStatus::new(grid),
            defence: GameStatus::new(grid),
            steps: 0,
            invalid_shots: 0,
        };
        env.reset()?;
        Ok(env)
    }

    /// Number of discrete actions, one per cell.
    pub fn action_count(&self) -> usize {
        self.grid.cell_count()
    }

    /// Start a fresh episode against a newly placed fleet.
    pub fn reset(&mut self) -> Result<Observation, GameError> {
        self.offence = GameStatus::new(self.grid);
        self.defence = GameStatus::new(self.grid);
        self.defence
            .set_defence_board(place_fleet(self.grid, &mut self.rng))?;
        self.steps = 0;
        self.invalid_shots = 0;
        Ok(self.observation())
    }

    /// Fire at the cell with row-major index `action`. A duplicate or
    /// out-of-range action is rejected with reward -1; it consumes no game
    /// turn but still counts as an episode step.
    pub fn step(&mut self, action: usize) -> Result<Step, GameError> {
        let reward = match self.grid.coord(action) {
            Err(_) => {
                self.invalid_shots += 1;
                -1
            }
            Ok(shot) => match self.defence.apply_defence_shot(shot) {
                Err(GameError::InvalidShot(_)) => {
                    self.invalid_shots += 1;
                    -1
                }
                Err(err) => return Err(err),
                Ok(result) => {
                    self.offence.record_offence_shot(shot, result)?;
                    if result.is_hit() {
                        1
                    } else {
                        0
                    }
                }
            },
        };
        self.steps += 1;
        let terminated = self.offence.game_over();
        let truncated = !terminated && self.steps >= MAX_EPISODE_STEPS;
        Ok(Step {
            observation: self.observation(),
            reward: if terminated { reward + 1000 } else { reward },
            terminated,
            truncated,
            invalid_shots: self.invalid_shots,
        })
    }

    /// Project the offence board into the {-1, 0, 1} observation grid.
    pub fn observation(&self) -> Observation {
        let board = self.offence.offence_board();
        (0..self.grid.size_x())
            .map(|x| {
                (0..self.grid.size_y())
                    .map(|y| match board.at(Coord::new(x, y)) {
                        Cell::Miss => -1,
                        Cell::Hit => 1,
                        _ => 0,
                    })
                    .collect()
            })
            .collect()
    }
}
