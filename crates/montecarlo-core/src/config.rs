//! Configuration loading and typed config structures for the engine.
//!
//! The canonical configuration lives in `montecarlo-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror the
//! YAML structure and a loader that reads the file. Every field has a
//! default, so an empty file (or no file) yields the classroom settings.
//!
//! The engine never reads configuration on its own: callers turn a
//! [`MonteCarloConfig`] into [`EngineSettings`] and pass them explicitly on
//! every call.

use std::path::Path;

use serde::Deserialize;

use crate::sampler::{PathReservoir, StrideSelector};
use crate::scheduler::YieldScheduler;
use crate::walk::DEFAULT_STEP_CAP;

/// Environment variable overriding `rng.seed`.
pub const SEED_ENV_VAR: &str = "MONTECARLO_SEED";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value is outside its domain or could not be interpreted.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level engine configuration.
///
/// Mirrors the structure of `montecarlo-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MonteCarloConfig {
    /// Display-subset sizing.
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Random-walk limits.
    #[serde(default)]
    pub walk: WalkConfig,

    /// Cooperative yielding.
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    /// Random source seeding.
    #[serde(default)]
    pub rng: RngConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MonteCarloConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `MONTECARLO_SEED` overrides `rng.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if `MONTECARLO_SEED` is not a `u64`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse_yaml(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if `MONTECARLO_SEED` is not a `u64`.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::parse_yaml(yaml)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn parse_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // A blank document means "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply environment variable overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `MONTECARLO_SEED` is set but is
    /// not a `u64`. A reproducible run was requested, so it is never
    /// silently replaced by an entropy seed.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = std::env::var(SEED_ENV_VAR) {
            self.rng.apply_seed_override(&value)?;
        }
        Ok(())
    }

    /// Validate the tunables and produce per-call engine settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the replacement probability is
    /// not a finite value in `[0, 1]`.
    pub fn engine_settings(&self) -> Result<EngineSettings, ConfigError> {
        let p = self.sampling.replacement_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Invalid {
                reason: format!("sampling.replacement_probability must be in [0, 1], got {p}"),
            });
        }
        Ok(EngineSettings {
            point_subset_target: self.sampling.point_subset_target,
            replacement_probability: p,
            step_cap: self.walk.step_cap,
            yield_stride: self.scheduler.yield_stride,
        })
    }
}

/// Tunables shared by the estimators, passed explicitly on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    /// Target size of the point subset.
    pub point_subset_target: u64,
    /// Probability that a trial offered to a full reservoir replaces a slot.
    pub replacement_probability: f64,
    /// Maximum steps per random walk.
    pub step_cap: u64,
    /// Iterations between cooperative yields (0 disables yielding).
    pub yield_stride: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            point_subset_target: StrideSelector::DEFAULT_TARGET,
            replacement_probability: PathReservoir::<()>::DEFAULT_REPLACEMENT_PROBABILITY,
            step_cap: DEFAULT_STEP_CAP,
            yield_stride: YieldScheduler::DEFAULT_STRIDE,
        }
    }
}

/// Display-subset sizing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SamplingConfig {
    /// Target number of points returned by point sampling.
    #[serde(default = "default_point_subset_target")]
    pub point_subset_target: u64,

    /// Default number of trials returned by the random walk.
    #[serde(default = "default_path_reservoir_capacity")]
    pub path_reservoir_capacity: usize,

    /// Probability that a trial replaces a slot in a full reservoir.
    #[serde(default = "default_replacement_probability")]
    pub replacement_probability: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            point_subset_target: default_point_subset_target(),
            path_reservoir_capacity: default_path_reservoir_capacity(),
            replacement_probability: default_replacement_probability(),
        }
    }
}

/// Random-walk limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WalkConfig {
    /// Hard cap on bets per trial.
    #[serde(default = "default_step_cap")]
    pub step_cap: u64,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            step_cap: default_step_cap(),
        }
    }
}

/// Cooperative yielding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchedulerConfig {
    /// Iterations between yields.
    #[serde(default = "default_yield_stride")]
    pub yield_stride: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            yield_stride: default_yield_stride(),
        }
    }
}

/// Random source seeding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RngConfig {
    /// Fixed seed for reproducible runs. Entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RngConfig {
    /// Replace the seed with `value` parsed as a `u64`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] and leaves the seed untouched if
    /// `value` does not parse.
    pub fn apply_seed_override(&mut self, value: &str) -> Result<(), ConfigError> {
        let seed = value
            .trim()
            .parse::<u64>()
            .map_err(|err| ConfigError::Invalid {
                reason: format!("{SEED_ENV_VAR} must be an unsigned integer, got `{value}`: {err}"),
            })?;
        self.seed = Some(seed);
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_point_subset_target() -> u64 {
    StrideSelector::DEFAULT_TARGET
}

const fn default_path_reservoir_capacity() -> usize {
    PathReservoir::<()>::DEFAULT_CAPACITY
}

const fn default_replacement_probability() -> f64 {
    PathReservoir::<()>::DEFAULT_REPLACEMENT_PROBABILITY
}

const fn default_step_cap() -> u64 {
    DEFAULT_STEP_CAP
}

const fn default_yield_stride() -> u64 {
    YieldScheduler::DEFAULT_STRIDE
}

fn default_log_level() -> String {
    "info".to_owned()
}
