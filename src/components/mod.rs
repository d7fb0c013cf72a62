//! Simulation components and shared resources.

pub mod agent;
pub mod composition;

pub use agent::{Fitness, Role};
pub use composition::Composition;
