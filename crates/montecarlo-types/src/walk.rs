//! Records produced by the random-walk (gambler's ruin) estimator.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Outcome of one simulated walk.
///
/// `path` always starts at the initial funds and has exactly `steps + 1`
/// entries. Once produced, a trial is moved into the aggregator and never
/// mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct TrialResult {
    /// Whether the walk finished at or above the goal.
    pub won: bool,
    /// Number of bets placed.
    #[ts(type = "number")]
    pub steps: u64,
    /// Funds after each bet, starting with the initial funds.
    pub path: Vec<f64>,
}

impl TrialResult {
    /// Funds at the end of the walk.
    pub fn final_funds(&self) -> Option<f64> {
        self.path.last().copied()
    }
}

/// Log-scaled descriptors of the run's fund scale.
///
/// Both use `ln(1 + x)` so zero funds stay finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct LogInsights {
    /// `ln(1 + initial_funds)`.
    pub log_start: f64,
    /// `ln(1 + goal)`.
    pub log_goal: f64,
}

impl LogInsights {
    /// Compute the insights for a starting fund level and goal.
    pub fn new(initial_funds: f64, goal: f64) -> Self {
        Self {
            log_start: initial_funds.ln_1p(),
            log_goal: goal.ln_1p(),
        }
    }
}

/// Final report of a random-walk run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct WalkReport {
    /// Trials that reached the goal.
    #[ts(type = "number")]
    pub win_count: u64,
    /// Trials that did not reach the goal (`num_simulations - win_count`).
    #[ts(type = "number")]
    pub bankruptcy_count: u64,
    /// Trials stopped by the step cap before hitting either barrier.
    #[ts(type = "number")]
    pub capped_count: u64,
    /// Mean number of steps per trial.
    pub average_steps: f64,
    /// Sample variance (`n - 1` denominator) of steps per trial. `NaN`
    /// (serialized as `null`) for a single trial.
    pub step_variance: f64,
    /// `win_count / num_simulations`.
    pub win_ratio: f64,
    /// Bounded reservoir of representative trials.
    pub sample: Vec<TrialResult>,
    /// Log-scaled descriptors of the fund scale.
    pub insights: LogInsights,
}
