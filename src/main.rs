//! N-Player Trust Game Simulator
//!
//! CLI driver around the simulation library: parses arguments, runs the
//! chosen engine, and writes the trajectory as JSON for an external plotter.

use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use trust_game_sim::config::{Config, DEFAULT_TUNING_PATH};
use trust_game_sim::output::{simplex_point, write_history, History};
use trust_game_sim::{AgentSimulator, ReplicatorSimulator, SimError};

/// Which formulation of the trust game to run
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum EngineKind {
    /// Discrete agent population with fitness-proportional reproduction
    Agents,
    /// Mean-field replicator dynamics (Euler integration)
    Replicator,
}

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "trust_sim")]
#[command(about = "Simulates the N-player trust game")]
struct Args {
    /// Simulation engine to run
    #[arg(long, value_enum, default_value_t = EngineKind::Agents)]
    engine: EngineKind,

    /// Proportion of citizens
    #[arg(long)]
    y1: Option<f64>,

    /// Proportion of trustworthy governors
    #[arg(long)]
    y2: Option<f64>,

    /// Proportion of untrustworthy governors
    #[arg(long)]
    y3: Option<f64>,

    /// Population size (agents engine)
    #[arg(long)]
    pop_size: Option<u32>,

    /// Trusted value; how much a citizen pays
    #[arg(long)]
    tv: Option<f64>,

    /// Constant for trustworthy governors
    #[arg(long)]
    r1: Option<f64>,

    /// Constant for untrustworthy governors
    #[arg(long)]
    r2: Option<f64>,

    /// Number of rounds in the simulation
    #[arg(long)]
    iters: Option<u64>,

    /// Timestep for the replicator differential equations
    #[arg(long)]
    dt: Option<f64>,

    /// Random seed for reproducibility (agents engine)
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the recorded trajectory
    #[arg(long, default_value = "output/history.json")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut config = Config::load_or_default();
    apply_overrides(&mut config, &args);

    println!("N-Player Trust Game Simulator");
    println!("=============================");
    println!("Engine: {:?}", args.engine);
    println!(
        "Proportions: y1={} y2={} y3={}",
        config.game.y1, config.game.y2, config.game.y3
    );
    println!(
        "tv={} R1={} R2={} iters={}",
        config.game.trusted_value, config.game.r1, config.game.r2, config.game.iters
    );
    match args.engine {
        EngineKind::Agents => println!(
            "Population: {} agents, seed {}",
            config.population.pop_size, config.population.seed
        ),
        EngineKind::Replicator => println!("Timestep: dt={}", config.replicator.dt),
    }
    println!("Tuning file: {}", DEFAULT_TUNING_PATH);
    println!();

    let result = match args.engine {
        EngineKind::Agents => run_agents(&config),
        EngineKind::Replicator => run_replicator(&config),
    };

    let history = match result {
        Ok(history) => history,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(dir) = args.output.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Warning: Could not create output directory: {}", e);
        }
    }
    match write_history(&args.output, &history) {
        Ok(()) => println!("Wrote trajectory to {}", args.output.display()),
        Err(e) => {
            eprintln!("Could not write trajectory: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// Run the discrete engine and report its final composition.
fn run_agents(config: &Config) -> Result<History, SimError> {
    let mut sim = AgentSimulator::new(&config.game, &config.population)?;
    println!("Starting agent simulation...");
    sim.run()?;

    let comp = sim.composition();
    println!(
        "Final composition: {} citizens, {} trustworthy, {} untrustworthy (of {})",
        comp.x1, comp.x2, comp.x3, comp.pop_size
    );
    Ok(sim.history().clone())
}

/// Run the mean-field engine and report its final point on the simplex.
fn run_replicator(config: &Config) -> Result<History, SimError> {
    let mut sim = ReplicatorSimulator::new(&config.game, config.replicator.dt)?;
    println!("Starting replicator integration...");
    sim.run()?;

    let fractions = sim.fractions();
    let (sx, sy) = simplex_point(&fractions);
    println!(
        "Final fractions: y1={:.4} y2={:.4} y3={:.4} (simplex point {:.4}, {:.4})",
        fractions.y1, fractions.y2, fractions.y3, sx, sy
    );
    Ok(sim.history().clone())
}

/// CLI flags take precedence over the tuning file.
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(y1) = args.y1 {
        config.game.y1 = y1;
    }
    if let Some(y2) = args.y2 {
        config.game.y2 = y2;
    }
    if let Some(y3) = args.y3 {
        config.game.y3 = y3;
    }
    if let Some(tv) = args.tv {
        config.game.trusted_value = tv;
    }
    if let Some(r1) = args.r1 {
        config.game.r1 = r1;
    }
    if let Some(r2) = args.r2 {
        config.game.r2 = r2;
    }
    if let Some(iters) = args.iters {
        config.game.iters = iters;
    }
    if let Some(pop_size) = args.pop_size {
        config.population.pop_size = pop_size;
    }
    if let Some(seed) = args.seed {
        config.population.seed = seed;
    }
    if let Some(dt) = args.dt {
        config.replicator.dt = dt;
    }
}
