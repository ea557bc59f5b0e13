//! Random sources for the estimators.
//!
//! The estimators draw through the [`RandomSource`] trait rather than a
//! concrete generator so runs can be seeded for reproducibility or replayed
//! from a fixed script.
//!
//! - [`SeededSource`] -- `SmallRng`, seeded explicitly or from OS entropy.
//! - [`ScriptedSource`] -- replays a fixed list of uniforms, cycling when
//!   exhausted.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A sequential source of uniform random numbers.
pub trait RandomSource {
    /// Draw a uniform value in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Draw a uniform index in `0..len`. Returns 0 when `len` is 0.
    fn index(&mut self, len: usize) -> usize;
}

/// Pseudo-random source backed by [`SmallRng`].
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: SmallRng,
}

impl SeededSource {
    /// Create a reproducible source from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is present, entropy-seeded otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }
}

impl RandomSource for SeededSource {
    fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Deterministic source that replays a fixed list of uniforms.
///
/// Values are returned in order and the list wraps around once exhausted.
/// An empty script always yields `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source replaying `values`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far.
    pub const fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self) -> f64 {
        let value = self
            .cursor
            .checked_rem(self.values.len())
            .and_then(|i| self.values.get(i))
            .copied()
            .unwrap_or(0.0);
        self.cursor = self.cursor.wrapping_add(1);
        value
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let scaled = (self.uniform().clamp(0.0, 1.0) * len as f64).floor() as usize;
        scaled.min(len.saturating_sub(1))
    }
}
