//! Fitness Evaluation
//!
//! The role-dependent payoff of one round of the trust game, and the system
//! that writes it into every agent before reproduction.
//!
//! With `x1` citizens and `x2 + x3` governors staking `tv`:
//!   citizen:                `tv * (r1 * x2 / (x2 + x3) - 1)`
//!   trustworthy governor:   `tv * r1 * x1 / (x2 + x3)`
//!   untrustworthy governor: `tv * r2 * x1 / (x2 + x3)`

use bevy_ecs::prelude::*;

use crate::components::agent::{Fitness, Role};
use crate::components::composition::Composition;
use crate::error::SimError;
use crate::systems::EngineStatus;

/// Immutable game constants, fixed for the lifetime of a run.
#[derive(Resource, Debug, Clone, Copy)]
pub struct GameParams {
    /// Amount a citizen stakes each round.
    pub trusted_value: f64,
    /// Payoff multiplier applied by trustworthy governors.
    pub r1: f64,
    /// Payoff multiplier applied by untrustworthy governors.
    pub r2: f64,
}

/// Payoff for one role given the current composition. Pure.
///
/// A population without governors leaves every formula dividing by zero and
/// is reported as [`SimError::NoGovernors`] rather than producing NaN.
pub fn payoff(
    role: Role,
    x1: u32,
    x2: u32,
    x3: u32,
    tv: f64,
    r1: f64,
    r2: f64,
) -> Result<f64, SimError> {
    if x2 + x3 == 0 {
        return Err(SimError::NoGovernors);
    }
    let governors = f64::from(x2 + x3);
    let citizens = f64::from(x1);
    let trustworthy = f64::from(x2);

    Ok(match role {
        Role::Citizen => tv * (r1 * trustworthy / governors - 1.0),
        Role::TrustworthyGovernor => tv * r1 * citizens / governors,
        Role::UntrustworthyGovernor => tv * r2 * citizens / governors,
    })
}

/// System: recompute every agent's fitness from the shared composition.
///
/// No agent is added or removed; only the `Fitness` component mutates.
pub fn evaluate_fitness(
    params: Res<GameParams>,
    composition: Res<Composition>,
    mut status: ResMut<EngineStatus>,
    mut agents: Query<(&Role, &mut Fitness)>,
) {
    if status.halted() {
        return;
    }

    for (role, mut fitness) in &mut agents {
        match payoff(
            *role,
            composition.x1,
            composition.x2,
            composition.x3,
            params.trusted_value,
            params.r1,
            params.r2,
        ) {
            Ok(value) => fitness.0 = value,
            Err(err) => {
                status.fail(err);
                return;
            }
        }
    }
}
