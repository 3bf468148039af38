//! Single-player Battleship: the game-state engine, randomized fleet
//! placement, pluggable targeting strategies and a gym-style environment
//! adapter around them.

mod board;
mod common;
mod config;
mod coord;
mod density;
mod env;
mod input;
mod logging;
mod placement;
mod render;
mod ship;
mod simulator;
mod status;
mod strategy;

pub use board::{Board, Cell};
pub use common::{GameError, ShotResult};
pub use config::{standard_grid, FLEET, NUM_SHIPS, SIZE_X, SIZE_Y, TOTAL_FLEET_HP};
pub use coord::{Coord, Grid};
pub use density::{best_cell, hunting_density, targeting_density};
pub use env::{BattleshipEnv, Observation, Step, MAX_EPISODE_STEPS};
pub use input::{InputEvent, InputSource, LineInput};
pub use logging::init_logging;
pub use placement::place_fleet;
pub use render::{print_density, ConsoleRender, NullRender, RenderSink};
pub use ship::{Orientation, ShipKind};
pub use simulator::{GameOutcome, SimulationStats, Simulator};
pub use status::GameStatus;
pub use strategy::{
    strategy_by_name, CandidatePool, HuntAndTargetStrategy, ProbabilityStrategy, RandomStrategy,
    SequentialStrategy, Strategy,
};
