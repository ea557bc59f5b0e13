//! Random-walk (gambler's ruin) estimator.
//!
//! A single trial is a bounded 1D walk: starting from the initial funds, each
//! bet adds or subtracts `bet_amount` until the funds reach `0` (ruin), reach
//! `goal` (win), or the walk has taken `step_cap` steps.
//!
//! # Terminal conditions
//!
//! The walk continues while `0 < funds < goal` and `steps < step_cap`. The
//! outcome is decided by the final funds alone: `won == (funds >= goal)`. A
//! walk stopped by the cap therefore counts as a loss, and is also tallied
//! in [`WalkReport::capped_count`].
//!
//! The cap guarantees termination for unfavourable odds over wide spans,
//! where the expected walk length is unbounded in practice.

use montecarlo_types::{LogInsights, TrialResult, WalkReport};
use tracing::{info, warn};

use crate::config::EngineSettings;
use crate::error::SimError;
use crate::params::WalkParams;
use crate::rng::RandomSource;
use crate::sampler::PathReservoir;
use crate::scheduler::YieldScheduler;
use crate::stats::{self, RunningStats};

/// Maximum number of bets in a single trial.
pub const DEFAULT_STEP_CAP: u64 = 1000;

/// Simulate one walk.
///
/// Draws one uniform per bet from `source`. The returned path holds
/// `steps + 1` entries, starting at `params.initial_funds`.
pub fn simulate_trial<S: RandomSource + ?Sized>(
    params: &WalkParams,
    step_cap: u64,
    source: &mut S,
) -> TrialResult {
    let mut funds = params.initial_funds;
    let mut steps: u64 = 0;
    let mut path = vec![funds];

    while funds > 0.0 && funds < params.goal && steps < step_cap {
        if source.uniform() < params.win_probability {
            funds += params.bet_amount;
        } else {
            funds -= params.bet_amount;
        }
        path.push(funds);
        steps = steps.saturating_add(1);
    }

    TrialResult {
        won: funds >= params.goal,
        steps,
        path,
    }
}

/// Run `num_simulations` walks and aggregate their outcomes.
///
/// Trials are simulated sequentially from `source`; after each trial the
/// reservoir may consume draws from the same source to decide whether the
/// trial replaces a displayed sample. Only the reservoir's trials are kept
/// in memory.
///
/// # Errors
///
/// Returns [`SimError::InvalidParameter`] naming the first parameter outside
/// its domain.
#[allow(clippy::cast_precision_loss)]
pub async fn simulate_random_walk<S: RandomSource + ?Sized>(
    params: &WalkParams,
    settings: &EngineSettings,
    source: &mut S,
) -> Result<WalkReport, SimError> {
    if let Err(err) = params.validate() {
        warn!(error = %err, "Rejected random-walk parameters");
        return Err(err);
    }

    info!(
        initial_funds = params.initial_funds,
        goal = params.goal,
        win_probability = params.win_probability,
        bet_amount = params.bet_amount,
        num_simulations = params.num_simulations,
        sample_capacity = params.sample_capacity,
        step_cap = settings.step_cap,
        "Random walk started"
    );

    let mut reservoir = PathReservoir::new(params.sample_capacity, settings.replacement_probability);
    let mut scheduler = YieldScheduler::new(settings.yield_stride);
    let mut step_stats = RunningStats::new();
    let mut win_count: u64 = 0;
    let mut capped_count: u64 = 0;

    for _ in 0..params.num_simulations {
        let trial = simulate_trial(params, settings.step_cap, source);

        if trial.won {
            win_count = win_count.saturating_add(1);
        } else if trial.final_funds().is_some_and(|funds| funds > 0.0) {
            capped_count = capped_count.saturating_add(1);
        }
        step_stats.push(trial.steps as f64);
        reservoir.offer(trial, source);

        scheduler.tick().await;
    }

    let num_simulations = params.num_simulations;
    let report = WalkReport {
        win_count,
        bankruptcy_count: num_simulations.saturating_sub(win_count),
        capped_count,
        average_steps: step_stats.mean(),
        step_variance: step_stats.sample_variance(),
        win_ratio: stats::ratio(win_count, num_simulations),
        sample: reservoir.into_inner(),
        insights: LogInsights::new(params.initial_funds, params.goal),
    };

    info!(
        win_count = report.win_count,
        bankruptcy_count = report.bankruptcy_count,
        capped_count = report.capped_count,
        win_ratio = report.win_ratio,
        average_steps = report.average_steps,
        yields = scheduler.yields(),
        "Random walk finished"
    );

    Ok(report)
}
