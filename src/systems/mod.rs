//! Per-generation systems for the agent population engine.

use bevy_ecs::prelude::*;

use crate::error::SimError;

pub mod fitness;
pub mod reproduction;

pub use fitness::{evaluate_fitness, payoff, GameParams};
pub use reproduction::{recount_composition, record_history, reproduce};

/// Resource carrying a degeneracy raised inside a system.
///
/// Systems cannot return `Result`, so the first error is parked here; every
/// system no-ops once it is set, and the run loop surfaces it after the
/// generation's schedule finishes.
#[derive(Resource, Debug, Default)]
pub struct EngineStatus {
    pub error: Option<SimError>,
}

impl EngineStatus {
    pub fn halted(&self) -> bool {
        self.error.is_some()
    }

    /// Record an error; the first one wins.
    pub fn fail(&mut self, error: SimError) {
        if self.error.is_none() {
            tracing::warn!(%error, "simulation degenerated");
            self.error = Some(error);
        }
    }
}
