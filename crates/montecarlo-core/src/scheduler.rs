//! Cooperative yield scheduler for long simulation loops.
//!
//! A run of a million trials would otherwise hold the executor for its whole
//! duration. The estimators call [`YieldScheduler::tick`] once per completed
//! iteration; every `stride` iterations the scheduler hands control back to
//! the tokio runtime with [`tokio::task::yield_now`] so other tasks on the
//! same thread (a UI bridge, a request handler) keep making progress.
//!
//! Yielding never touches simulation state. Iterations run in the same
//! order with the same random draws whether or not the scheduler yields.

use tracing::debug;

/// Yields to the async runtime once every `stride` iterations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YieldScheduler {
    /// Iterations between yields. 0 disables yielding.
    stride: u64,
    /// Iterations completed so far.
    completed: u64,
    /// Yields performed so far.
    yields: u64,
}

impl YieldScheduler {
    /// Default number of iterations between yields.
    pub const DEFAULT_STRIDE: u64 = 1000;

    /// Create a scheduler yielding every `stride` iterations.
    pub const fn new(stride: u64) -> Self {
        Self {
            stride,
            completed: 0,
            yields: 0,
        }
    }

    /// Record one completed iteration, yielding if a stride boundary was
    /// reached.
    pub async fn tick(&mut self) {
        self.completed = self.completed.saturating_add(1);
        if self.completed.checked_rem(self.stride) == Some(0) {
            tokio::task::yield_now().await;
            self.yields = self.yields.saturating_add(1);
            debug!(completed = self.completed, yields = self.yields, "Yielded to runtime");
        }
    }

    /// Iterations recorded so far.
    pub const fn completed(&self) -> u64 {
        self.completed
    }

    /// Yields performed so far.
    pub const fn yields(&self) -> u64 {
        self.yields
    }

    /// Configured stride.
    pub const fn stride(&self) -> u64 {
        self.stride
    }
}

impl Default for YieldScheduler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STRIDE)
    }
}
