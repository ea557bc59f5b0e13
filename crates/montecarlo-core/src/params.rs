//! Per-call simulation parameters and their validation.
//!
//! Parameters are immutable inputs. Each estimator validates its parameter
//! set synchronously before drawing a single random number, so an invalid
//! call never does partial work.

use crate::error::SimError;

/// Parameters of a point-sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiParams {
    /// Number of points to draw. Must be at least 1.
    pub iterations: u64,
}

impl PiParams {
    /// Create a parameter set for `iterations` points.
    pub const fn new(iterations: u64) -> Self {
        Self { iterations }
    }

    /// Check the parameter domain.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if `iterations` is zero.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.iterations == 0 {
            return Err(SimError::invalid("iterations", "must be at least 1"));
        }
        Ok(())
    }
}

/// Parameters of a gambler's-ruin run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkParams {
    /// Starting funds. Non-negative.
    pub initial_funds: f64,
    /// Upper absorbing barrier. Strictly greater than `initial_funds`.
    pub goal: f64,
    /// Probability of winning a single bet, in `(0, 1)`.
    pub win_probability: f64,
    /// Amount won or lost per bet. Strictly positive.
    pub bet_amount: f64,
    /// Number of independent walks. Must be at least 1.
    pub num_simulations: u64,
    /// Capacity of the trial reservoir returned for display.
    pub sample_capacity: usize,
}

impl WalkParams {
    /// Default number of trials kept for display.
    pub const DEFAULT_SAMPLE_CAPACITY: usize = 5;

    /// Create a parameter set with the default sample capacity.
    pub const fn new(
        initial_funds: f64,
        goal: f64,
        win_probability: f64,
        bet_amount: f64,
        num_simulations: u64,
    ) -> Self {
        Self {
            initial_funds,
            goal,
            win_probability,
            bet_amount,
            num_simulations,
            sample_capacity: Self::DEFAULT_SAMPLE_CAPACITY,
        }
    }

    /// Override the reservoir capacity.
    #[must_use]
    pub const fn with_sample_capacity(mut self, sample_capacity: usize) -> Self {
        self.sample_capacity = sample_capacity;
        self
    }

    /// Check every field against its domain, in declaration order.
    ///
    /// Edge cases such as zero initial funds or a bet larger than the
    /// remaining distance to the goal are legal; the walk's terminal
    /// conditions handle them.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.initial_funds.is_finite() {
            return Err(SimError::invalid("initial_funds", "must be a finite number"));
        }
        if self.initial_funds < 0.0 {
            return Err(SimError::invalid(
                "initial_funds",
                format!("must be non-negative, got {}", self.initial_funds),
            ));
        }
        if !self.goal.is_finite() {
            return Err(SimError::invalid("goal", "must be a finite number"));
        }
        if self.goal <= self.initial_funds {
            return Err(SimError::invalid(
                "goal",
                format!(
                    "must be greater than initial funds ({}), got {}",
                    self.initial_funds, self.goal
                ),
            ));
        }
        if !(self.win_probability > 0.0 && self.win_probability < 1.0) {
            return Err(SimError::invalid(
                "win_probability",
                format!("must lie strictly between 0 and 1, got {}", self.win_probability),
            ));
        }
        if !self.bet_amount.is_finite() || self.bet_amount <= 0.0 {
            return Err(SimError::invalid(
                "bet_amount",
                format!("must be a positive finite number, got {}", self.bet_amount),
            ));
        }
        if self.num_simulations == 0 {
            return Err(SimError::invalid("num_simulations", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classroom_defaults() -> WalkParams {
        WalkParams::new(50.0, 100.0, 0.5, 1.0, 1000)
    }

    #[test]
    fn zero_iterations_rejected() {
        let err = PiParams::new(0).validate();
        assert_eq!(err.map_err(|e| e.field()), Err("iterations"));
        assert!(PiParams::new(1).validate().is_ok());
    }

    #[test]
    fn classroom_defaults_are_valid() {
        assert!(classroom_defaults().validate().is_ok());
        assert_eq!(classroom_defaults().sample_capacity, 5);
    }

    #[test]
    fn goal_below_initial_funds_names_goal() {
        let params = WalkParams::new(50.0, 10.0, 0.5, 1.0, 10);
        assert_eq!(params.validate().map_err(|e| e.field()), Err("goal"));
    }

    #[test]
    fn goal_equal_to_initial_funds_rejected() {
        let params = WalkParams::new(50.0, 50.0, 0.5, 1.0, 10);
        assert_eq!(params.validate().map_err(|e| e.field()), Err("goal"));
    }

    #[test]
    fn probability_bounds_are_exclusive() {
        for p in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let params = WalkParams {
                win_probability: p,
                ..classroom_defaults()
            };
            assert_eq!(
                params.validate().map_err(|e| e.field()),
                Err("win_probability"),
                "p = {p}"
            );
        }
    }

    #[test]
    fn non_positive_bet_rejected() {
        for bet in [0.0, -1.0, f64::INFINITY] {
            let params = WalkParams {
                bet_amount: bet,
                ..classroom_defaults()
            };
            assert_eq!(params.validate().map_err(|e| e.field()), Err("bet_amount"));
        }
    }

    #[test]
    fn zero_simulations_rejected() {
        let params = WalkParams {
            num_simulations: 0,
            ..classroom_defaults()
        };
        assert_eq!(
            params.validate().map_err(|e| e.field()),
            Err("num_simulations")
        );
    }

    #[test]
    fn negative_or_nan_funds_rejected() {
        for funds in [-1.0, f64::NAN] {
            let params = WalkParams {
                initial_funds: funds,
                ..classroom_defaults()
            };
            assert_eq!(
                params.validate().map_err(|e| e.field()),
                Err("initial_funds")
            );
        }
    }

    #[test]
    fn zero_funds_and_oversized_bet_are_legal() {
        let broke = WalkParams::new(0.0, 10.0, 0.5, 1.0, 1);
        assert!(broke.validate().is_ok());

        let big_bet = WalkParams::new(50.0, 60.0, 0.5, 25.0, 1);
        assert!(big_bet.validate().is_ok());
    }

    #[test]
    fn error_message_names_field() {
        let err = WalkParams::new(50.0, 10.0, 0.5, 1.0, 1).validate();
        let message = err.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(message.contains("`goal`"), "{message}");
    }
}
