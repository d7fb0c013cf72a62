//! Reproduction
//!
//! Produces the next generation from the current one. Every agent has exactly
//! one child, so the population size never changes; what selection decides is
//! whether the child keeps the parent's role. The child reproduces
//! true-to-type when an independent uniform draw lands at or below the
//! parent's share of the total fitness, and otherwise takes a role drawn
//! uniformly from the two other roles.

use bevy_ecs::prelude::*;
use rand::Rng;

use crate::components::agent::{Fitness, Role};
use crate::components::composition::Composition;
use crate::error::SimError;
use crate::output::history::History;
use crate::systems::EngineStatus;
use crate::SimRng;

/// Compute the child roles for one generation.
///
/// Reads all parent fitness values as a consistent snapshot; parents are
/// processed independently, so ordering does not affect the outcome beyond
/// the RNG stream. A non-positive fitness total leaves the reproduction
/// probabilities undefined and is reported as an error.
pub fn next_generation<R: Rng>(
    parents: &[(Role, f64)],
    rng: &mut R,
) -> Result<Vec<Role>, SimError> {
    let total: f64 = parents.iter().map(|(_, fitness)| fitness).sum();
    if total <= 0.0 {
        return Err(SimError::NonPositiveFitness { total });
    }

    let mut children = Vec::with_capacity(parents.len());
    for &(role, fitness) in parents {
        let probability = fitness / total;
        let draw: f64 = rng.gen();
        if draw <= probability {
            children.push(role);
        } else {
            children.push(role.mutated(rng));
        }
    }
    Ok(children)
}

/// System: replace the whole population with the next generation.
///
/// Parents are despawned and children spawned with zeroed fitness; the
/// composition recount runs afterwards on the realized child roles.
pub fn reproduce(
    mut commands: Commands,
    mut rng: ResMut<SimRng>,
    mut status: ResMut<EngineStatus>,
    parents: Query<(Entity, &Role, &Fitness)>,
) {
    if status.halted() {
        return;
    }

    let snapshot: Vec<(Role, f64)> = parents
        .iter()
        .map(|(_, role, fitness)| (*role, fitness.0))
        .collect();

    let children = match next_generation(&snapshot, &mut rng.0) {
        Ok(children) => children,
        Err(err) => {
            status.fail(err);
            return;
        }
    };

    for (entity, _, _) in &parents {
        commands.entity(entity).despawn();
    }
    for role in children {
        commands.spawn((role, Fitness::default()));
    }
}

/// System: recompute composition counts from the realized roles.
pub fn recount_composition(
    mut composition: ResMut<Composition>,
    status: Res<EngineStatus>,
    agents: Query<&Role>,
) {
    if status.halted() {
        return;
    }

    let (mut x1, mut x2, mut x3) = (0, 0, 0);
    for role in &agents {
        match role {
            Role::Citizen => x1 += 1,
            Role::TrustworthyGovernor => x2 += 1,
            Role::UntrustworthyGovernor => x3 += 1,
        }
    }
    composition.x1 = x1;
    composition.x2 = x2;
    composition.x3 = x3;
}

/// System: append the pre-step composition to the trajectory.
///
/// Runs first in the generation chain, so the trajectory holds one snapshot
/// per generation and the first snapshot equals the initial fractions.
pub fn record_history(
    composition: Res<Composition>,
    status: Res<EngineStatus>,
    mut history: ResMut<History>,
) {
    if status.halted() {
        return;
    }
    history.push(composition.fractions());
}
