//! Trajectory History
//!
//! Append-only sequence of population-composition snapshots, one per
//! recorded step, in chronological order. Both engines record
//! snapshot-before-step, so a completed run holds exactly `iters` entries.
//! The recorder applies no transformation of its own; an external plotter
//! consumes the exported JSON.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Population fractions at one recorded step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositionSnapshot {
    /// Fraction of citizens.
    pub y1: f64,
    /// Fraction of trustworthy governors.
    pub y2: f64,
    /// Fraction of untrustworthy governors.
    pub y3: f64,
}

impl CompositionSnapshot {
    pub fn new(y1: f64, y2: f64, y3: f64) -> Self {
        Self { y1, y2, y3 }
    }

    /// Sum of the fractions; 1 within floating tolerance for valid states.
    pub fn sum(&self) -> f64 {
        self.y1 + self.y2 + self.y3
    }
}

/// Recorded trajectory of a simulation run.
#[derive(Resource, Debug, Clone, Serialize)]
pub struct History {
    /// Iteration count the run was configured with.
    iters: u64,
    snapshots: Vec<CompositionSnapshot>,
}

impl History {
    /// Create an empty history for a run of `iters` steps.
    pub fn new(iters: u64) -> Self {
        Self {
            iters,
            snapshots: Vec::with_capacity(iters as usize),
        }
    }

    /// Append a snapshot. Chronological, append-only.
    pub fn push(&mut self, snapshot: CompositionSnapshot) {
        self.snapshots.push(snapshot);
    }

    /// The configured iteration count (not the recorded length).
    pub fn planned_iters(&self) -> u64 {
        self.iters
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[CompositionSnapshot] {
        &self.snapshots
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompositionSnapshot> {
        self.snapshots.iter()
    }

    pub fn last(&self) -> Option<&CompositionSnapshot> {
        self.snapshots.last()
    }
}

/// Write a trajectory as pretty-printed JSON for the plotting collaborator.
pub fn write_history(path: impl AsRef<Path>, history: &History) -> io::Result<()> {
    let json = serde_json::to_string_pretty(history)?;
    fs::write(path, json)
}
