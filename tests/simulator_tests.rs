use battleship_sim::{
    standard_grid, strategy_by_name, NullRender, SimulationStats, Simulator, TOTAL_FLEET_HP,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn every_strategy_sinks_the_fleet_within_the_board() {
    let grid = standard_grid();
    for (i, name) in ["sequential", "random", "hunt", "probability"]
        .iter()
        .enumerate()
    {
        let mut rng = SmallRng::seed_from_u64(40 + i as u64);
        let mut strategy = strategy_by_name(name, grid).unwrap();
        let mut simulator = Simulator::new(grid, NullRender);
        let outcome = simulator.run_game(strategy.as_mut(), &mut rng).unwrap();
        assert!(outcome.win, "{name} should sink the fleet");
        assert!(
            outcome.turns >= TOTAL_FLEET_HP && outcome.turns <= grid.cell_count() as u32,
            "{name} took {} turns",
            outcome.turns
        );
    }
}

#[test]
fn batches_fold_into_stats() {
    let grid = standard_grid();
    let mut rng = SmallRng::seed_from_u64(123);
    let mut strategy = strategy_by_name("probability", grid).unwrap();
    let mut simulator = Simulator::new(grid, NullRender);
    let stats = simulator.run_many(strategy.as_mut(), 5, &mut rng).unwrap();
    assert_eq!(stats.games, 5);
    assert_eq!(stats.wins, 5);
    assert!(stats.min_turns >= TOTAL_FLEET_HP);
    assert!(stats.min_turns <= stats.max_turns);
    assert!(stats.max_turns <= grid.cell_count() as u32);
    assert!(stats.mean_turns() >= f64::from(stats.min_turns));
    assert!(stats.mean_turns() <= f64::from(stats.max_turns));
}

#[test]
fn probability_beats_sequential_on_average() {
    let grid = standard_grid();
    let run = |name: &str, seed: u64| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut strategy = strategy_by_name(name, grid).unwrap();
        Simulator::new(grid, NullRender)
            .run_many(strategy.as_mut(), 10, &mut rng)
            .unwrap()
            .mean_turns()
    };
    assert!(run("probability", 77) < run("sequential", 77));
}

#[test]
fn empty_stats_report_zero_mean() {
    let stats = SimulationStats::default();
    assert_eq!(stats.games, 0);
    assert_eq!(stats.mean_turns(), 0.0);
}
