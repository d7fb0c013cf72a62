//! Agent Components
//!
//! Each agent is an entity carrying a fixed `Role` and a `Fitness` scalar
//! that is recomputed every generation. A role is set when the agent is
//! spawned and never mutates in place; reproduction spawns new agents.

use bevy_ecs::prelude::*;
use rand::Rng;

/// The three strategies of the N-player trust game.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Stakes the trusted value with a governor each round.
    Citizen,
    /// Returns the citizen's stake multiplied by R1.
    TrustworthyGovernor,
    /// Keeps the stake, multiplied by R2, for itself.
    UntrustworthyGovernor,
}

impl Role {
    /// The two roles other than this one, in declaration order.
    pub const fn others(self) -> [Role; 2] {
        match self {
            Role::Citizen => [Role::TrustworthyGovernor, Role::UntrustworthyGovernor],
            Role::TrustworthyGovernor => [Role::Citizen, Role::UntrustworthyGovernor],
            Role::UntrustworthyGovernor => [Role::Citizen, Role::TrustworthyGovernor],
        }
    }

    /// Draw a mutated child role: uniform over the two other roles.
    pub fn mutated<R: Rng>(self, rng: &mut R) -> Role {
        let others = self.others();
        others[rng.gen_range(0..others.len())]
    }

    /// Human-readable label for output and logging.
    pub fn label(self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::TrustworthyGovernor => "trustworthy governor",
            Role::UntrustworthyGovernor => "untrustworthy governor",
        }
    }
}

/// Payoff an agent earned in the current generation.
///
/// Zero until the first fitness evaluation runs.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Fitness(pub f64);
