//! End-to-end simulation scenarios
//!
//! Exercises both engines through their public contract: construction
//! validation, trajectory recording, invariants, and degeneracy handling.

use trust_game_sim::config::{GameConfig, PopulationConfig};
use trust_game_sim::{AgentSimulator, ReplicatorSimulator, SimError};

fn game(y1: f64, y2: f64, y3: f64, tv: f64, r1: f64, r2: f64, iters: u64) -> GameConfig {
    GameConfig {
        y1,
        y2,
        y3,
        trusted_value: tv,
        r1,
        r2,
        iters,
    }
}

#[test]
fn test_agent_engine_single_generation_scenario() {
    let config = game(0.5, 0.25, 0.25, 10.0, 2.0, 1.0, 1);
    let population = PopulationConfig {
        pop_size: 20,
        seed: 42,
    };

    let mut sim = AgentSimulator::new(&config, &population).unwrap();
    let initial = sim.composition();
    assert_eq!((initial.x1, initial.x2, initial.x3), (10, 5, 5));

    sim.run().unwrap();

    // Snapshot-before-step: the single recorded entry is the initial state.
    let history = sim.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history.planned_iters(), 1);
    let first = history.snapshots()[0];
    assert_eq!((first.y1, first.y2, first.y3), (0.5, 0.25, 0.25));

    // One reproduction later the population size is unchanged.
    let after = sim.composition();
    assert_eq!(after.total(), 20);
    assert_eq!(after.pop_size, 20);
}

#[test]
fn test_agent_engine_population_invariant_over_many_generations() {
    let config = game(0.5, 0.25, 0.25, 10.0, 2.0, 1.0, 30);
    let population = PopulationConfig {
        pop_size: 100,
        seed: 42,
    };

    let mut sim = AgentSimulator::new(&config, &population).unwrap();
    sim.run().unwrap();

    let history = sim.history();
    assert_eq!(history.len(), 30);
    for snapshot in history.iter() {
        assert!(
            (snapshot.sum() - 1.0).abs() < 1e-9,
            "recorded fractions must sum to 1, got {}",
            snapshot.sum()
        );
    }
    assert_eq!(sim.composition().total(), 100);
}

#[test]
fn test_agent_engine_rejects_bad_proportions() {
    let population = PopulationConfig {
        pop_size: 20,
        seed: 42,
    };

    let bad_sum = game(0.6, 0.25, 0.25, 10.0, 2.0, 1.0, 1);
    assert!(matches!(
        AgentSimulator::new(&bad_sum, &population),
        Err(SimError::ProportionSum { .. })
    ));

    let uneven = game(0.5, 0.25, 0.25, 10.0, 2.0, 1.0, 1);
    let odd_population = PopulationConfig {
        pop_size: 21,
        seed: 42,
    };
    assert!(matches!(
        AgentSimulator::new(&uneven, &odd_population),
        Err(SimError::FractionalCount { .. })
    ));
}

#[test]
fn test_agent_engine_rejects_negative_proportions() {
    // -0.5 + 0.75 + 0.75 sums to exactly 1 and maps to whole counts, so
    // without a sign check the negative count would saturate to zero and the
    // engine would quietly run 30 agents instead of the configured 20.
    let config = game(-0.5, 0.75, 0.75, 10.0, 2.0, 1.0, 1);
    let population = PopulationConfig {
        pop_size: 20,
        seed: 42,
    };
    assert!(matches!(
        AgentSimulator::new(&config, &population),
        Err(SimError::NegativeProportion { .. })
    ));
}

#[test]
fn test_replicator_rejects_negative_proportions() {
    let config = game(-0.5, 0.75, 0.75, 1.0, 1.0, 1.0, 10);
    assert!(matches!(
        ReplicatorSimulator::new(&config, 0.01),
        Err(SimError::NegativeProportion { .. })
    ));
}

#[test]
fn test_agent_engine_boundary_all_citizens() {
    let config = game(1.0, 0.0, 0.0, 10.0, 2.0, 1.0, 5);
    let population = PopulationConfig {
        pop_size: 20,
        seed: 42,
    };

    let mut sim = AgentSimulator::new(&config, &population).unwrap();
    assert_eq!(sim.run(), Err(SimError::NoGovernors));
}

#[test]
fn test_replicator_hundred_step_scenario() {
    let config = game(0.34, 0.33, 0.33, 1.0, 1.0, 1.0, 100);
    let mut sim = ReplicatorSimulator::new(&config, 0.01).unwrap();
    sim.run().unwrap();

    let history = sim.history();
    assert_eq!(history.len(), 100);
    assert_eq!(history.planned_iters(), 100);
    assert!((sim.fractions().sum() - 1.0).abs() < 1e-9);

    // First snapshot is the initial composition.
    let first = history.snapshots()[0];
    assert_eq!((first.y1, first.y2, first.y3), (0.34, 0.33, 0.33));
}

#[test]
fn test_replicator_sum_invariant_every_step() {
    let config = game(0.5, 0.25, 0.25, 10.0, 2.0, 1.0, 200);
    let mut sim = ReplicatorSimulator::new(&config, 0.01).unwrap();
    sim.run().unwrap();

    for snapshot in sim.history().iter() {
        assert!((snapshot.sum() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_replicator_rejects_out_of_tolerance_proportions() {
    let config = game(0.34, 0.33, 0.34, 1.0, 1.0, 1.0, 10);
    assert!(matches!(
        ReplicatorSimulator::new(&config, 0.01),
        Err(SimError::ProportionSum { .. })
    ));
}

#[test]
fn test_replicator_boundary_citizen_saturation() {
    let config = game(1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 10);
    let mut sim = ReplicatorSimulator::new(&config, 0.01).unwrap();
    assert_eq!(sim.run(), Err(SimError::CitizenSaturation { y1: 1.0 }));
    // The pre-step snapshot was still recorded before the halt.
    assert_eq!(sim.history().len(), 1);
}
