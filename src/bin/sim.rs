use battleship_sim::{init_logging, standard_grid, strategy_by_name, NullRender, Simulator};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!(
            "Usage: {} <sequential|random|hunt|probability> <games> [seed]",
            args[0]
        );
        std::process::exit(1);
    }
    let grid = standard_grid();
    let mut strategy = strategy_by_name(&args[1], grid)
        .ok_or_else(|| anyhow::anyhow!("unknown strategy: {}", args[1]))?;
    let games: u32 = args[2].parse()?;
    let mut rng = match args.get(3) {
        Some(seed) => SmallRng::seed_from_u64(seed.parse()?),
        None => {
            let mut entropy = rand::rng();
            SmallRng::from_rng(&mut entropy)
        }
    };

    let mut simulator = Simulator::new(grid, NullRender);
    let stats = simulator.run_many(strategy.as_mut(), games, &mut rng)?;

    let mut report = serde_json::to_value(&stats)?;
    report["strategy"] = json!(strategy.name());
    report["mean_turns"] = json!(stats.mean_turns());
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
