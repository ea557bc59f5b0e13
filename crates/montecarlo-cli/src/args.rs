//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use montecarlo_core::{PiParams, WalkParams};

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "montecarlo-config.yaml";

/// Monte Carlo classroom estimators.
#[derive(Parser, Debug)]
#[command(name = "montecarlo-cli")]
#[command(about = "Run a Monte Carlo estimator and print its report as JSON")]
#[command(version)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, env = "MONTECARLO_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Estimator to run
    #[command(subcommand)]
    pub command: Command,
}

/// A simulation request as typed on the command line.
///
/// Domain checks are left to the estimators; clap only checks that each
/// value parses.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Estimate π by point sampling
    Pi {
        /// Number of points to draw
        iterations: u64,
    },

    /// Simulate gambler's ruin
    #[command(allow_negative_numbers = true)]
    Ruin {
        /// Starting bankroll
        initial_funds: f64,
        /// Bankroll that ends a trial as a win
        goal: f64,
        /// Probability of winning a single bet
        win_probability: f64,
        /// Stake per bet
        bet_amount: f64,
        /// Number of independent trials
        num_simulations: u64,
        /// Trials kept in the report (defaults to `sampling.path_reservoir_capacity`)
        sample_capacity: Option<usize>,
    },
}

/// Engine parameters resolved from a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Simulation {
    /// Point sampling.
    Pi(PiParams),
    /// Gambler's ruin.
    Ruin(WalkParams),
}

impl Command {
    /// Resolve into engine parameters, filling an omitted `sample_capacity`
    /// with `default_capacity`.
    pub const fn into_simulation(self, default_capacity: usize) -> Simulation {
        match self {
            Self::Pi { iterations } => Simulation::Pi(PiParams::new(iterations)),
            Self::Ruin {
                initial_funds,
                goal,
                win_probability,
                bet_amount,
                num_simulations,
                sample_capacity,
            } => {
                let capacity = match sample_capacity {
                    Some(capacity) => capacity,
                    None => default_capacity,
                };
                Simulation::Ruin(
                    WalkParams::new(
                        initial_funds,
                        goal,
                        win_probability,
                        bet_amount,
                        num_simulations,
                    )
                    .with_sample_capacity(capacity),
                )
            }
        }
    }
}
