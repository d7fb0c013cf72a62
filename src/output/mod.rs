//! Trajectory recording and export for the plotting collaborator.

pub mod history;
pub mod simplex;

pub use history::{write_history, CompositionSnapshot, History};
pub use simplex::simplex_point;
