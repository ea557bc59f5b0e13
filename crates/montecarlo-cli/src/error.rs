//! Error types for the command-line runner.
//!
//! [`CliError`] wraps every failure mode between loading configuration and
//! printing the report, giving `main` a single type to propagate with `?`.
//! Argument errors never reach it; clap reports them and exits.

/// Top-level error for the runner binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: montecarlo_core::ConfigError,
    },

    /// The estimator rejected its parameters.
    #[error("simulation error: {source}")]
    Simulation {
        /// The underlying simulation error.
        #[from]
        source: montecarlo_core::SimError,
    },

    /// The report could not be serialized.
    #[error("output error: {source}")]
    Output {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
