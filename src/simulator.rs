//! The game loop: one offence-only game against a randomly placed fleet, or
//! a batch of them.

use std::thread;
use std::time::Duration;

use rand::rngs::SmallRng;
use serde::Serialize;

use crate::common::GameError;
use crate::coord::Grid;
use crate::placement::place_fleet;
use crate::render::RenderSink;
use crate::status::GameStatus;
use crate::strategy::Strategy;

/// Result of one completed game.
#[derive(Debug, Clone, Copy)]
pub struct GameOutcome {
    /// Offence shots it took to finish the game.
    pub turns: u32,
    pub win: bool,
}

/// Aggregate results over a batch of games. This is the only state shared
/// between games, and it is appended to strictly between them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimulationStats {
    pub games: u32,
    pub wins: u32,
    pub total_turns: u64,
    pub min_turns: u32,
    pub max_turns: u32,
}

impl SimulationStats {
    pub fn record(&mut self, outcome: GameOutcome) {
        if self.games == 0 || outcome.turns < self.min_turns {
            self.min_turns = outcome.turns;
        }
        if outcome.turns > self.max_turns {
            self.max_turns = outcome.turns;
        }
        self.games += 1;
        if outcome.win {
            self.wins += 1;
        }
        self.total_turns += u64::from(outcome.turns);
    }

    pub fn mean_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / f64::from(self.games)
        }
    }
}

/// Drives games of one strategy against a randomly placed NPC fleet.
pub struct Simulator<R> {
    grid: Grid,
    render: R,
    shot_delay: Option<Duration>,
}

impl<R: RenderSink> Simulator<R> {
    pub fn new(grid: Grid, render: R) -> Self {
        Self {
            grid,
            render,
            shot_delay: None,
        }
    }

    /// Sleep this long after every applied shot, for watchable games.
    pub fn with_shot_delay(mut self, delay: Duration) -> Self {
        self.shot_delay = Some(delay);
        self
    }

    /// Run a single game to completion and report the turns taken.
    pub fn run_game(
        &mut self,
        strategy: &mut dyn Strategy,
        rng: &mut SmallRng,
    ) -> Result<GameOutcome, GameError> {
        let mut offence = GameStatus::new(self.grid);
        let mut defence = GameStatus::new(self.grid);
        defence.set_defence_board(place_fleet(self.grid, rng))?;
        strategy.reset(rng);

        while !offence.game_over() {
            let shot = strategy.shoot(&offence, rng);
            let result = match defence.apply_defence_shot(shot) {
                Ok(result) => result,
                Err(GameError::InvalidShipPlacement) => {
                    return Err(GameError::InvalidShipPlacement)
                }
                Err(err) => {
                    // a rejected shot consumes no turn; ask the strategy again
                    log::warn!("{err}");
                    continue;
                }
            };
            offence.record_offence_shot(shot, result)?;
            self.render.draw_board(offence.offence_board());
            self.render.message(&format!("{shot}: {result}"));
            if let Some(delay) = self.shot_delay {
                thread::sleep(delay);
            }
        }

        let outcome = GameOutcome {
            turns: offence.offence_shots().len() as u32,
            win: offence.offence_win(),
        };
        log::info!("{} finished in {} turns", strategy.name(), outcome.turns);
        Ok(outcome)
    }

    /// Run `games` games back to back and fold the outcomes together.
    pub fn run_many(
        &mut self,
        strategy: &mut dyn Strategy,
        games: u32,
        rng: &mut SmallRng,
    ) -> Result<SimulationStats, GameError> {
        let mut stats = SimulationStats::default();
        for _ in 0..games {
            stats.record(self.run_game(strategy, rng)?);
        }
        Ok(stats)
    }
}
