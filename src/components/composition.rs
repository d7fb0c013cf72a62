//! Population Composition
//!
//! Role counts for the discrete engine. Recomputed from the realized set of
//! agents after every reproduction step; the counts always sum to the fixed
//! population size.

use bevy_ecs::prelude::*;

use crate::components::agent::Role;
use crate::output::history::CompositionSnapshot;

/// Counts of each role in the current generation.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    /// Citizens.
    pub x1: u32,
    /// Trustworthy governors.
    pub x2: u32,
    /// Untrustworthy governors.
    pub x3: u32,
    /// Total population size, invariant across generations.
    pub pop_size: u32,
}

impl Composition {
    pub fn new(x1: u32, x2: u32, x3: u32) -> Self {
        Self {
            x1,
            x2,
            x3,
            pop_size: x1 + x2 + x3,
        }
    }

    /// Count for a single role.
    pub fn count(&self, role: Role) -> u32 {
        match role {
            Role::Citizen => self.x1,
            Role::TrustworthyGovernor => self.x2,
            Role::UntrustworthyGovernor => self.x3,
        }
    }

    /// Number of governors of either kind.
    pub fn governors(&self) -> u32 {
        self.x2 + self.x3
    }

    /// Sum of the stored counts (equals `pop_size` when the invariant holds).
    pub fn total(&self) -> u32 {
        self.x1 + self.x2 + self.x3
    }

    /// Population fractions `(y1, y2, y3)`.
    pub fn fractions(&self) -> CompositionSnapshot {
        let pop = f64::from(self.pop_size);
        CompositionSnapshot {
            y1: f64::from(self.x1) / pop,
            y2: f64::from(self.x2) / pop,
            y3: f64::from(self.x3) / pop,
        }
    }
}
