//! Command-line runner for the Monte Carlo classroom estimators.
//!
//! Runs one estimator to completion and prints its report as JSON on
//! stdout, in the same shape the visualizers consume. Logs go to stderr.
//!
//! # Startup Sequence
//!
//! 1. Parse the command line
//! 2. Load configuration from `--config` (default `montecarlo-config.yaml`,
//!    or `MONTECARLO_CONFIG`), falling back to defaults
//! 3. Initialize structured logging (tracing)
//! 4. Build the random source from the configured seed
//! 5. Run the estimator and print the report

mod args;
mod error;

use std::path::Path;

use clap::Parser;
use montecarlo_core::{
    EngineSettings, MonteCarloConfig, RandomSource, SeededSource, estimate_pi,
    simulate_random_walk,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Simulation};
use crate::error::CliError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, validation, or output serialization
/// fails. Argument errors are reported by clap, which exits the process.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Parse the command line.
    let cli = Cli::parse();

    // 2. Load configuration.
    let config = load_config(&cli.config)?;

    // 3. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(
        path = %cli.config.display(),
        seed = config.rng.seed,
        point_subset_target = config.sampling.point_subset_target,
        step_cap = config.walk.step_cap,
        yield_stride = config.scheduler.yield_stride,
        "Configuration loaded"
    );

    // 4. Build the random source.
    let settings = config.engine_settings()?;
    let mut source = SeededSource::from_optional_seed(config.rng.seed);

    // 5. Run and print.
    let simulation = cli
        .command
        .into_simulation(config.sampling.path_reservoir_capacity);
    let json = run(&simulation, &settings, &mut source).await?;
    println!("{json}");

    Ok(())
}

/// Run `simulation` and render its report as pretty-printed JSON.
async fn run<S: RandomSource + ?Sized>(
    simulation: &Simulation,
    settings: &EngineSettings,
    source: &mut S,
) -> Result<String, CliError> {
    let json = match simulation {
        Simulation::Pi(params) => {
            let estimate = estimate_pi(params, settings, source).await?;
            serde_json::to_string_pretty(&estimate)?
        }
        Simulation::Ruin(params) => {
            let report = simulate_random_walk(params, settings, source).await?;
            serde_json::to_string_pretty(&report)?
        }
    };
    Ok(json)
}

/// Load configuration from `path`.
///
/// Falls back to defaults when no file exists. Environment overrides apply
/// either way, and an unparseable override is an error.
fn load_config(path: &Path) -> Result<MonteCarloConfig, CliError> {
    if path.exists() {
        Ok(MonteCarloConfig::from_file(path)?)
    } else {
        let mut config = MonteCarloConfig::default();
        config.apply_env_overrides()?;
        Ok(config)
    }
}
