//! Simplex Projection
//!
//! Maps a three-fraction composition onto 2D coordinates inside a unit
//! equilateral triangle, for plotting replicator trajectories. The citizen
//! vertex sits at (1, 0), the trustworthy-governor vertex at the origin, and
//! the untrustworthy-governor vertex at the apex (0.5, sqrt(3)/2).

use crate::output::history::CompositionSnapshot;

/// Height of the unit equilateral triangle.
const APEX_HEIGHT: f64 = 0.866_025_403_784_438_6; // sqrt(3) / 2

/// Project a composition onto the 2-simplex triangle.
pub fn simplex_point(snapshot: &CompositionSnapshot) -> (f64, f64) {
    (
        snapshot.y1 + 0.5 * snapshot.y3,
        APEX_HEIGHT * snapshot.y3,
    )
}
