//! Streaming first- and second-moment estimators.
//!
//! [`RunningStats`] uses Welford's update so the mean and variance of
//! per-trial step counts are available without storing every trial.

/// Running mean and variance over a stream of samples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    /// Sum of squared deviations from the running mean.
    m2: f64,
}

impl RunningStats {
    /// Create an empty accumulator.
    pub const fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Add one sample.
    #[allow(clippy::cast_precision_loss)]
    pub fn push(&mut self, value: f64) {
        self.count = self.count.saturating_add(1);
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// Number of samples seen.
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Arithmetic mean. `NaN` when empty.
    pub fn mean(&self) -> f64 {
        if self.count == 0 { f64::NAN } else { self.mean }
    }

    /// Sample variance with an `n - 1` denominator. `NaN` below two samples.
    #[allow(clippy::cast_precision_loss)]
    pub fn sample_variance(&self) -> f64 {
        match self.count.checked_sub(1) {
            Some(dof) if dof > 0 => self.m2 / dof as f64,
            _ => f64::NAN,
        }
    }
}

/// `numerator / denominator` as a float, 0 when the denominator is 0.
#[allow(clippy::cast_precision_loss)]
pub fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
