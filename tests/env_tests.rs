use battleship_sim::{standard_grid, BattleshipEnv, MAX_EPISODE_STEPS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn reset_observation_is_all_unknown() {
    let mut env = BattleshipEnv::new(standard_grid(), SmallRng::seed_from_u64(1)).unwrap();
    let obs = env.reset().unwrap();
    assert_eq!(obs.len(), 10);
    assert!(obs
        .iter()
        .all(|row| row.len() == 10 && row.iter().all(|&v| v == 0)));
    assert_eq!(env.action_count(), 100);
}

#[test]
fn steps_report_hits_and_misses_in_the_observation() {
    let mut env = BattleshipEnv::new(standard_grid(), SmallRng::seed_from_u64(2)).unwrap();
    let step = env.step(0).unwrap();
    match step.reward {
        0 => assert_eq!(step.observation[0][0], -1),
        1 => assert_eq!(step.observation[0][0], 1),
        other => panic!("unexpected reward {other} for a fresh cell"),
    }
    assert!(!step.terminated);
    assert!(!step.truncated);
}

#[test]
fn duplicate_actions_are_rejected_without_consuming_a_turn() {
    let mut env = BattleshipEnv::new(standard_grid(), SmallRng::seed_from_u64(3)).unwrap();
    let first = env.step(0).unwrap();
    let dup = env.step(0).unwrap();
    assert_eq!(dup.reward, -1);
    assert_eq!(dup.invalid_shots, 1);
    assert_eq!(dup.observation, first.observation);

    let out_of_range = env.step(500).unwrap();
    assert_eq!(out_of_range.reward, -1);
    assert_eq!(out_of_range.invalid_shots, 2);
}

#[test]
fn hammering_one_cell_truncates_the_episode() {
    let mut env = BattleshipEnv::new(standard_grid(), SmallRng::seed_from_u64(4)).unwrap();
    let mut last = env.step(0).unwrap();
    for _ in 1..MAX_EPISODE_STEPS {
        last = env.step(0).unwrap();
    }
    assert!(last.truncated);
    assert!(!last.terminated);
    // the first step resolved cell 0, every later one was rejected
    assert_eq!(last.invalid_shots, MAX_EPISODE_STEPS - 1);
}

#[test]
fn exhaustive_sweep_terminates_with_the_win_bonus() {
    let mut env = BattleshipEnv::new(standard_grid(), SmallRng::seed_from_u64(5)).unwrap();
    let mut terminal = None;
    for action in 0..env.action_count() {
        let step = env.step(action).unwrap();
        if step.terminated {
            terminal = Some(step);
            break;
        }
    }
    let step = terminal.expect("sweeping every cell must sink the fleet");
    assert_eq!(step.reward, 1001); // the winning hit plus the terminal bonus
    assert_eq!(step.invalid_shots, 0);
    assert_eq!(
        step.observation
            .iter()
            .flatten()
            .filter(|&&v| v == 1)
            .count(),
        17
    );
}

#[test]
fn reset_starts_a_fresh_episode() {
    let mut env = BattleshipEnv::new(standard_grid(), SmallRng::seed_from_u64(6)).unwrap();
    env.step(0).unwrap();
    env.step(0).unwrap();
    let obs = env.reset().unwrap();
    assert!(obs.iter().flatten().all(|&v| v == 0));
    let step = env.step(0).unwrap();
    assert_eq!(step.invalid_shots, 0);
}
