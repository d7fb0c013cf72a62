//! Configuration System
//!
//! Loads game parameters from tuning.toml for easy adjustment without
//! recompiling. CLI flags override whatever the file provides.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Timestep the replicator engine falls back to when none is configured.
pub const DEFAULT_DT: f64 = 0.01;

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub population: PopulationConfig,
    pub replicator: ReplicatorConfig,
}

/// Trust game parameters shared by both engines
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Initial fraction of citizens
    pub y1: f64,
    /// Initial fraction of trustworthy governors
    pub y2: f64,
    /// Initial fraction of untrustworthy governors
    pub y3: f64,
    /// Trusted value; how much a citizen stakes per round
    pub trusted_value: f64,
    /// Multiplier applied by trustworthy governors
    pub r1: f64,
    /// Multiplier applied by untrustworthy governors
    pub r2: f64,
    /// Number of generations / integration steps to run
    pub iters: u64,
}

/// Discrete engine parameters
#[derive(Debug, Clone, Deserialize)]
pub struct PopulationConfig {
    /// Total number of agents
    pub pop_size: u32,
    /// Random seed for reproducibility
    pub seed: u64,
}

/// Mean-field engine parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ReplicatorConfig {
    /// Euler integration timestep
    pub dt: f64,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_TUNING_PATH).unwrap_or_else(|e| {
            eprintln!("Warning: Could not load tuning.toml: {}. Using defaults.", e);
            Self::default()
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig {
                y1: 0.5,
                y2: 0.25,
                y3: 0.25,
                trusted_value: 10.0,
                r1: 2.0,
                r2: 1.0,
                iters: 100,
            },
            population: PopulationConfig {
                pop_size: 100,
                seed: 42,
            },
            replicator: ReplicatorConfig { dt: DEFAULT_DT },
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
