use std::fmt;
use std::time::Duration;

use battleship_sim::{
    hunting_density, init_logging, place_fleet, print_density, standard_grid, ConsoleRender,
    GameError, GameStatus, Grid, HuntAndTargetStrategy, InputEvent, InputSource, LineInput,
    NullRender, ProbabilityStrategy, RandomStrategy, SequentialStrategy, Simulator, Strategy,
};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Single-player Battleship simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Sequential,
    Random,
    HuntAndTarget,
    Probability,
}

impl StrategyArg {
    fn build(self, grid: Grid) -> Box<dyn Strategy> {
        match self {
            StrategyArg::Sequential => Box::new(SequentialStrategy::new(grid)),
            StrategyArg::Random => Box::new(RandomStrategy::new(grid)),
            StrategyArg::HuntAndTarget => Box::new(HuntAndTargetStrategy::new(grid)),
            StrategyArg::Probability => Box::new(ProbabilityStrategy::new()),
        }
    }
}

impl fmt::Display for StrategyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyArg::Sequential => f.write_str("sequential"),
            StrategyArg::Random => f.write_str("random"),
            StrategyArg::HuntAndTarget => f.write_str("hunt-and-target"),
            StrategyArg::Probability => f.write_str("probability"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game yourself over stdin.
    Play {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the placement-density hint before each shot")]
        hint: bool,
    },
    /// Watch one AI game turn by turn.
    Watch {
        #[arg(long, value_enum, default_value_t = StrategyArg::Probability)]
        strategy: StrategyArg,
        #[arg(long, help = "Fix RNG seed for a reproducible game")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 200, help = "Delay between shots in milliseconds")]
        delay_ms: u64,
    },
    /// Run a batch of games and print summary statistics.
    Sim {
        #[arg(long, value_enum, default_value_t = StrategyArg::Probability)]
        strategy: StrategyArg,
        #[arg(long, default_value_t = 1000)]
        games: u32,
        #[arg(long, help = "Fix RNG seed for a reproducible batch")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed, hint } => play(seed, hint),
        Commands::Watch {
            strategy,
            seed,
            delay_ms,
        } => watch(strategy, seed, delay_ms),
        Commands::Sim {
            strategy,
            games,
            seed,
        } => sim(strategy, games, seed),
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => {
            let mut entropy = rand::rng();
            SmallRng::from_rng(&mut entropy)
        }
    }
}

fn play(seed: Option<u64>, hint: bool) -> anyhow::Result<()> {
    let grid = standard_grid();
    let mut rng = make_rng(seed);
    let mut offence = GameStatus::new(grid);
    let mut defence = GameStatus::new(grid);
    defence.set_defence_board(place_fleet(grid, &mut rng))?;
    let mut input = LineInput::stdin();

    println!("The enemy fleet is in position. Call your shots.");
    while !offence.game_over() {
        println!("{}", offence.offence_board());
        if hint {
            let density = hunting_density(offence.offence_board(), offence.offence_ships_alive());
            print_density(grid, &density);
        }
        match input.poll(&grid) {
            InputEvent::Quit => {
                println!("Leaving the game.");
                return Ok(());
            }
            InputEvent::Invalid => continue,
            InputEvent::Shot(shot) => match defence.apply_defence_shot(shot) {
                Ok(result) => {
                    offence.record_offence_shot(shot, result)?;
                    println!("{shot}: {result}");
                }
                Err(err @ GameError::InvalidShot(_)) => println!("{err}"),
                Err(err) => return Err(err.into()),
            },
        }
    }
    println!("{}", offence.offence_board());
    println!(
        "You sank the whole fleet in {} shots.",
        offence.offence_shots().len()
    );
    Ok(())
}

fn watch(strategy: StrategyArg, seed: Option<u64>, delay_ms: u64) -> anyhow::Result<()> {
    let grid = standard_grid();
    let mut rng = make_rng(seed);
    let mut strategy = strategy.build(grid);
    let mut simulator =
        Simulator::new(grid, ConsoleRender).with_shot_delay(Duration::from_millis(delay_ms));
    let outcome = simulator.run_game(strategy.as_mut(), &mut rng)?;
    println!("{} sank the fleet in {} turns", strategy.name(), outcome.turns);
    Ok(())
}

fn sim(strategy: StrategyArg, games: u32, seed: Option<u64>) -> anyhow::Result<()> {
    let grid = standard_grid();
    let mut rng = make_rng(seed);
    let mut strategy = strategy.build(grid);
    let mut simulator = Simulator::new(grid, NullRender);
    let stats = simulator.run_many(strategy.as_mut(), games, &mut rng)?;
    println!("strategy:   {}", strategy.name());
    println!("games:      {}", stats.games);
    println!("wins:       {}", stats.wins);
    println!("mean turns: {:.2}", stats.mean_turns());
    println!("min turns:  {}", stats.min_turns);
    println!("max turns:  {}", stats.max_turns);
    Ok(())
}
