//! Bounded subset samplers for display data.
//!
//! Both estimators hand the presentation layer a small representative
//! subset of their raw data. Neither sampler retains the full stream.
//!
//! - [`StrideSelector`] -- deterministic, evenly spread selection of point
//!   indices. Reproducible for a fixed stream length and target.
//! - [`PathReservoir`] -- fixed-capacity buffer that keeps the first
//!   `capacity` items and then occasionally swaps in a fresh one.
//!
//! # Reservoir semantics
//!
//! [`PathReservoir`] is not Algorithm R. After the buffer fills, each new
//! item replaces a uniformly chosen slot with a constant probability, so
//! later items are under-represented relative to a uniform sample of the
//! whole stream. The buffer only needs to stay "alive" for display; the
//! statistics never read from it. Replacement draws come from the caller's
//! [`RandomSource`] and are applied in arrival order.

use tracing::debug;

use crate::rng::RandomSource;

/// Evenly spread index selection over a stream of known length.
///
/// Index `i` is selected iff `(i * target) mod total < target`. When
/// `target` divides `total` this is exactly every `total / target`-th index
/// starting at 0; when `total <= target` every index is selected. The
/// number of selected indices in `0..total` is always `min(total, target)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrideSelector {
    total: u64,
    target: u64,
}

impl StrideSelector {
    /// Default subset size for point sampling.
    pub const DEFAULT_TARGET: u64 = 1000;

    /// Create a selector over `total` items aiming for `target` selections.
    pub const fn new(total: u64, target: u64) -> Self {
        Self { total, target }
    }

    /// Whether the item at `index` belongs in the subset.
    pub fn selects(&self, index: u64) -> bool {
        let target = u128::from(self.target);
        u128::from(index)
            .checked_mul(target)
            .and_then(|scaled| scaled.checked_rem(u128::from(self.total)))
            .is_some_and(|remainder| remainder < target)
    }

    /// Number of indices in `0..total` that will be selected.
    pub const fn expected_len(&self) -> u64 {
        if self.total < self.target {
            self.total
        } else {
            self.target
        }
    }

    /// Nominal integer stride, `max(1, floor(total / target))`.
    pub const fn nominal_stride(&self) -> u64 {
        match self.total.checked_div(self.target) {
            Some(0) | None => 1,
            Some(stride) => stride,
        }
    }
}

/// Fixed-capacity reservoir with low-probability replacement.
#[derive(Debug, Clone)]
pub struct PathReservoir<T> {
    slots: Vec<T>,
    capacity: usize,
    replacement_probability: f64,
    offered: u64,
    replacements: u64,
}

impl<T> PathReservoir<T> {
    /// Default number of retained items.
    pub const DEFAULT_CAPACITY: usize = 5;

    /// Default probability that an item offered to a full reservoir is kept.
    pub const DEFAULT_REPLACEMENT_PROBABILITY: f64 = 0.05;

    /// Create a reservoir holding at most `capacity` items.
    pub const fn new(capacity: usize, replacement_probability: f64) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
            replacement_probability,
            offered: 0,
            replacements: 0,
        }
    }

    /// Offer an item. Returns whether it was retained.
    ///
    /// While the reservoir has free slots the item is appended. Once full,
    /// one uniform draw decides whether to keep it and a second picks the
    /// slot it overwrites.
    pub fn offer<S: RandomSource + ?Sized>(&mut self, item: T, source: &mut S) -> bool {
        self.offered = self.offered.saturating_add(1);

        if self.slots.len() < self.capacity {
            self.slots.push(item);
            return true;
        }
        if self.capacity == 0 || source.uniform() >= self.replacement_probability {
            return false;
        }

        let index = source.index(self.capacity);
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        *slot = item;
        self.replacements = self.replacements.saturating_add(1);
        debug!(
            offered = self.offered,
            slot = index,
            "Reservoir slot replaced"
        );
        true
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the reservoir holds nothing.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of items held.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Items offered so far.
    pub const fn offered(&self) -> u64 {
        self.offered
    }

    /// Slot replacements performed after the reservoir filled.
    pub const fn replacements(&self) -> u64 {
        self.replacements
    }

    /// Current contents.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Consume the reservoir, returning its contents.
    pub fn into_inner(self) -> Vec<T> {
        self.slots
    }
}

impl<T> Default for PathReservoir<T> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY, Self::DEFAULT_REPLACEMENT_PROBABILITY)
    }
}
