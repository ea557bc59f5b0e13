//! Monte Carlo estimators for the classroom probability simulations.
//!
//! This crate owns the simulation and statistics engine behind the π and
//! gambler's-ruin visualizers. Presentation is out of scope: the engine takes
//! explicit parameters, runs to completion, and returns one final record
//! from `montecarlo-types`.
//!
//! # Modules
//!
//! - [`pi`] -- Point-sampling estimator ([`estimate_pi`]).
//! - [`walk`] -- Random-walk estimator ([`simulate_random_walk`]) and the
//!   single-trial state machine ([`simulate_trial`]).
//! - [`sampler`] -- Bounded display subsets: [`StrideSelector`] and
//!   [`PathReservoir`].
//! - [`scheduler`] -- [`YieldScheduler`], cooperative yielding for long loops.
//! - [`stats`] -- Streaming mean and sample variance.
//! - [`rng`] -- [`RandomSource`] trait, seeded and scripted sources.
//! - [`params`] -- Per-call parameters and validation.
//! - [`config`] -- Configuration loading from `montecarlo-config.yaml`.
//! - [`error`] -- [`SimError`].
//!
//! # Usage
//!
//! ```
//! use montecarlo_core::{EngineSettings, PiParams, SeededSource, estimate_pi};
//!
//! # tokio::runtime::Builder::new_current_thread().build().map(|rt| rt.block_on(async {
//! let mut source = SeededSource::from_seed(42);
//! let estimate = estimate_pi(&PiParams::new(10_000), &EngineSettings::default(), &mut source)
//!     .await;
//! assert!(estimate.is_ok_and(|e| e.points_inside <= e.points_total));
//! # })).ok();
//! ```
//!
//! [`estimate_pi`]: pi::estimate_pi
//! [`simulate_random_walk`]: walk::simulate_random_walk
//! [`simulate_trial`]: walk::simulate_trial
//! [`StrideSelector`]: sampler::StrideSelector
//! [`PathReservoir`]: sampler::PathReservoir
//! [`YieldScheduler`]: scheduler::YieldScheduler
//! [`RandomSource`]: rng::RandomSource
//! [`SimError`]: error::SimError

pub mod config;
pub mod error;
pub mod params;
pub mod pi;
pub mod rng;
pub mod sampler;
pub mod scheduler;
pub mod stats;
pub mod walk;

// Re-export primary types at crate root.
pub use config::{ConfigError, EngineSettings, MonteCarloConfig};
pub use error::SimError;
pub use params::{PiParams, WalkParams};
pub use pi::estimate_pi;
pub use rng::{RandomSource, ScriptedSource, SeededSource};
pub use walk::{simulate_random_walk, simulate_trial};
