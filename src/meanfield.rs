//! Mean-Field Replicator Engine
//!
//! Continuous analogue of the agent population: the three role fractions are
//! evolved by explicit Euler integration of the replicator equations derived
//! from the expected payoff differences between roles, with a renormalization
//! after each step to hold the sum-to-one invariant against first-order
//! integration error.

use crate::config::GameConfig;
use crate::error::SimError;
use crate::output::history::{CompositionSnapshot, History};

/// Tolerance for the initial-proportion sum check.
pub const PROPORTION_TOLERANCE: f64 = 1e-10;

/// `1 - y1` below this is treated as citizen saturation.
const SATURATION_EPS: f64 = 1e-12;

/// Mean-field simulator for the N-player trust game.
#[derive(Debug, Clone)]
pub struct ReplicatorSimulator {
    y1: f64,
    y2: f64,
    y3: f64,
    trusted_value: f64,
    r1: f64,
    r2: f64,
    dt: f64,
    iters: u64,
    history: History,
}

impl ReplicatorSimulator {
    /// Build a simulator with validated initial fractions.
    ///
    /// Fails when any proportion is negative or when the proportions do not
    /// sum to 1 within [`PROPORTION_TOLERANCE`].
    pub fn new(game: &GameConfig, dt: f64) -> Result<Self, SimError> {
        for proportion in [game.y1, game.y2, game.y3] {
            if proportion < 0.0 {
                return Err(SimError::NegativeProportion { proportion });
            }
        }
        let sum = game.y1 + game.y2 + game.y3;
        if (sum - 1.0).abs() > PROPORTION_TOLERANCE {
            return Err(SimError::ProportionSum {
                y1: game.y1,
                y2: game.y2,
                y3: game.y3,
                sum,
            });
        }

        Ok(Self {
            y1: game.y1,
            y2: game.y2,
            y3: game.y3,
            trusted_value: game.trusted_value,
            r1: game.r1,
            r2: game.r2,
            dt,
            iters: game.iters,
            history: History::new(game.iters),
        })
    }

    /// One explicit Euler update of the replicator system.
    ///
    /// The derivatives divide by `1 - y1`; a saturated citizen fraction is a
    /// domain error rather than an Inf/NaN propagation. After the advance the
    /// fractions are divided by their sum, compensating for first-order
    /// integration drift.
    pub fn step(&mut self) -> Result<(), SimError> {
        let denom = 1.0 - self.y1;
        if denom.abs() < SATURATION_EPS {
            return Err(SimError::CitizenSaturation { y1: self.y1 });
        }

        // Shared pressure term: y2 (1 - 2 R1) + y3 (1 - R2).
        let pressure = self.y2 * (1.0 - 2.0 * self.r1) + self.y3 * (1.0 - self.r2);
        let scale = self.y1 * self.trusted_value / denom;

        let d_y1 = self.y1 * scale * pressure + scale * (self.y2 * (self.r1 - 1.0) - self.y3);
        let d_y2 = self.y2 * scale * (pressure + self.r1);
        let d_y3 = self.y3 * scale * (pressure + self.r2);

        self.y1 += d_y1 * self.dt;
        self.y2 += d_y2 * self.dt;
        self.y3 += d_y3 * self.dt;

        let total = self.y1 + self.y2 + self.y3;
        if total <= 0.0 {
            return Err(SimError::VanishingTotal { total });
        }
        self.y1 /= total;
        self.y2 /= total;
        self.y3 /= total;

        Ok(())
    }

    /// Run the configured number of integration steps, recording the
    /// pre-step composition each time (trajectory length equals `iters`).
    pub fn run(&mut self) -> Result<(), SimError> {
        for step in 0..self.iters {
            self.history.push(self.fractions());
            if let Err(error) = self.step() {
                tracing::debug!(step, %error, "replicator run halted");
                return Err(error);
            }
        }
        tracing::debug!(steps = self.iters, "replicator run complete");
        Ok(())
    }

    /// Current population fractions.
    pub fn fractions(&self) -> CompositionSnapshot {
        CompositionSnapshot::new(self.y1, self.y2, self.y3)
    }

    /// Recorded trajectory, one snapshot per completed step.
    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(y1: f64, y2: f64, y3: f64, iters: u64) -> GameConfig {
        GameConfig {
            y1,
            y2,
            y3,
            trusted_value: 1.0,
            r1: 1.0,
            r2: 1.0,
            iters,
        }
    }

    #[test]
    fn test_proportions_must_sum_to_one_within_tolerance() {
        let result = ReplicatorSimulator::new(&game(0.4, 0.3, 0.2, 10), 0.01);
        assert!(matches!(result, Err(SimError::ProportionSum { .. })));

        // 0.34 + 0.33 + 0.33 is not exactly 1.0 in binary, but well inside
        // the tolerance.
        assert!(ReplicatorSimulator::new(&game(0.34, 0.33, 0.33, 10), 0.01).is_ok());
    }

    #[test]
    fn test_negative_proportion_is_rejected() {
        // Sums to 1, so only the sign check catches it.
        let result = ReplicatorSimulator::new(&game(-0.5, 0.75, 0.75, 10), 0.01);
        assert_eq!(
            result.err(),
            Some(SimError::NegativeProportion { proportion: -0.5 })
        );
    }

    #[test]
    fn test_step_renormalizes_to_one() {
        let mut sim = ReplicatorSimulator::new(&game(0.4, 0.4, 0.2, 10), 0.05).unwrap();
        for _ in 0..50 {
            sim.step().unwrap();
            assert!((sim.fractions().sum() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_citizen_saturation_is_a_domain_error() {
        let mut sim = ReplicatorSimulator::new(&game(1.0, 0.0, 0.0, 10), 0.01).unwrap();
        assert_eq!(
            sim.step(),
            Err(SimError::CitizenSaturation { y1: 1.0 })
        );
    }

    #[test]
    fn test_step_is_deterministic() {
        let mut a = ReplicatorSimulator::new(&game(0.34, 0.33, 0.33, 10), 0.01).unwrap();
        let mut b = a.clone();
        for _ in 0..20 {
            a.step().unwrap();
            b.step().unwrap();
        }
        assert_eq!(a.fractions(), b.fractions());
    }
}
