//! Agent Population Engine
//!
//! Discrete, finite-population formulation of the trust game. Agents live as
//! entities in a `bevy_ecs` world; each generation runs a chained schedule of
//! systems: record the pre-step composition, evaluate every agent's fitness,
//! reproduce, then recount the realized roles.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::components::agent::{Fitness, Role};
use crate::components::composition::Composition;
use crate::config::{GameConfig, PopulationConfig};
use crate::error::SimError;
use crate::output::history::{CompositionSnapshot, History};
use crate::systems::{
    evaluate_fitness, recount_composition, record_history, reproduce, EngineStatus, GameParams,
};
use crate::SimRng;

/// Discrete-population simulator for the N-player trust game.
pub struct AgentSimulator {
    world: World,
    schedule: Schedule,
    iters: u64,
}

impl AgentSimulator {
    /// Build a simulator with a validated initial population.
    ///
    /// Fails when the proportions do not sum to exactly 1, when any
    /// proportion is negative, or when any proportion does not map to a
    /// whole number of agents.
    pub fn new(game: &GameConfig, population: &PopulationConfig) -> Result<Self, SimError> {
        let sum = game.y1 + game.y2 + game.y3;
        if sum != 1.0 {
            return Err(SimError::ProportionSum {
                y1: game.y1,
                y2: game.y2,
                y3: game.y3,
                sum,
            });
        }

        let x1 = whole_count(game.y1, population.pop_size)?;
        let x2 = whole_count(game.y2, population.pop_size)?;
        let x3 = whole_count(game.y3, population.pop_size)?;

        let mut world = World::new();
        for _ in 0..x1 {
            world.spawn((Role::Citizen, Fitness::default()));
        }
        for _ in 0..x2 {
            world.spawn((Role::TrustworthyGovernor, Fitness::default()));
        }
        for _ in 0..x3 {
            world.spawn((Role::UntrustworthyGovernor, Fitness::default()));
        }

        world.insert_resource(GameParams {
            trusted_value: game.trusted_value,
            r1: game.r1,
            r2: game.r2,
        });
        world.insert_resource(Composition::new(x1, x2, x3));
        world.insert_resource(History::new(game.iters));
        world.insert_resource(SimRng(SmallRng::seed_from_u64(population.seed)));
        world.insert_resource(EngineStatus::default());

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                record_history,
                evaluate_fitness,
                reproduce,
                recount_composition,
            )
                .chain(),
        );

        Ok(Self {
            world,
            schedule,
            iters: game.iters,
        })
    }

    /// Run the configured number of generations.
    ///
    /// The trajectory accumulates one snapshot per generation. A degeneracy
    /// raised mid-generation halts the run and is returned; the history up to
    /// and including that generation's pre-step snapshot is preserved.
    pub fn run(&mut self) -> Result<(), SimError> {
        for generation in 0..self.iters {
            self.schedule.run(&mut self.world);
            if let Some(error) = self.world.resource::<EngineStatus>().error.clone() {
                tracing::debug!(generation, %error, "agent run halted");
                return Err(error);
            }
        }
        tracing::debug!(generations = self.iters, "agent run complete");
        Ok(())
    }

    /// Current role counts.
    pub fn composition(&self) -> Composition {
        *self.world.resource::<Composition>()
    }

    /// Current population fractions.
    pub fn fractions(&self) -> CompositionSnapshot {
        self.composition().fractions()
    }

    /// Recorded trajectory, one snapshot per completed generation.
    pub fn history(&self) -> &History {
        self.world.resource::<History>()
    }
}

/// Convert a proportion into a whole agent count.
///
/// The proportion must be non-negative (a negative count would otherwise
/// saturate to zero in the cast and silently resize the population). The
/// product must be integral within 1e-9; it is then rounded, so binary float
/// representations like `0.1 * 30` still yield the intended count.
fn whole_count(proportion: f64, pop_size: u32) -> Result<u32, SimError> {
    if proportion < 0.0 {
        return Err(SimError::NegativeProportion { proportion });
    }
    let exact = proportion * f64::from(pop_size);
    if (exact - exact.round()).abs() > 1e-9 {
        return Err(SimError::FractionalCount {
            proportion,
            pop_size,
        });
    }
    Ok(exact.round() as u32)
}
