//! N-Player Trust Game Simulation Engine Library
//!
//! Models the evolution of strategy proportions among three roles (citizens,
//! trustworthy governors, untrustworthy governors) in two complementary ways:
//! a discrete agent population with fitness-proportional reproduction
//! ([`AgentSimulator`]) and a continuous mean-field approximation driven by
//! the replicator equations ([`ReplicatorSimulator`]).

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod meanfield;
pub mod output;
pub mod systems;

pub use components::agent::{Fitness, Role};
pub use components::composition::Composition;
pub use engine::AgentSimulator;
pub use error::SimError;
pub use meanfield::ReplicatorSimulator;
pub use output::history::{CompositionSnapshot, History};

/// Seeded random number generator resource
#[derive(Resource)]
pub struct SimRng(pub SmallRng);
