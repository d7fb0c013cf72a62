//! Simulation Errors
//!
//! Typed errors for invalid configurations and the numerical degeneracies the
//! trust game can run into (vanishing governor population, citizen
//! saturation, non-positive total fitness).

use thiserror::Error;

/// Errors surfaced by both simulation engines.
///
/// Construction errors are recoverable by supplying corrected parameters;
/// runtime degeneracies halt the run at the generation or step that raised
/// them, leaving the trajectory recorded up to that point intact.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Initial proportions must cover the whole population.
    #[error("initial proportions y1={y1}, y2={y2}, y3={y3} sum to {sum}, expected 1")]
    ProportionSum { y1: f64, y2: f64, y3: f64, sum: f64 },

    /// Proportions are population fractions and cannot be negative.
    #[error("proportion {proportion} is negative; population fractions must be non-negative")]
    NegativeProportion { proportion: f64 },

    /// Each proportion must map to a whole number of agents.
    #[error("proportion {proportion} does not divide evenly into population size {pop_size}")]
    FractionalCount { proportion: f64, pop_size: u32 },

    /// No governors remain, so every payoff divides by zero.
    #[error("no governors remain in the population; payoffs are undefined")]
    NoGovernors,

    /// Reproduction probabilities are fitness / total, undefined here.
    #[error("total fitness {total} is not positive; reproduction probabilities are undefined")]
    NonPositiveFitness { total: f64 },

    /// The replicator derivatives divide by `1 - y1`.
    #[error("citizen fraction {y1} saturates the population; replicator derivatives are singular")]
    CitizenSaturation { y1: f64 },

    /// Renormalization divides by the fraction sum.
    #[error("population fractions sum to {total}; cannot renormalize")]
    VanishingTotal { total: f64 },
}
