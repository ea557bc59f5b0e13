//! Point-sampling estimator for π.
//!
//! Draws points uniformly in the unit square and counts how many land in the
//! inscribed circle (center `(0.5, 0.5)`, radius `0.5`). The circle covers
//! π/4 of the square, so `4 * inside / total` estimates π.
//!
//! Each point is independent; the only state carried across iterations is
//! the inside count, the display subset, and the yield counter.

use std::f64::consts::PI;

use montecarlo_types::{PiEstimate, SampledPoint};
use tracing::{info, warn};

use crate::config::EngineSettings;
use crate::error::SimError;
use crate::params::PiParams;
use crate::rng::RandomSource;
use crate::sampler::StrideSelector;
use crate::scheduler::YieldScheduler;
use crate::stats;

/// Run a point-sampling estimate of π.
///
/// Validation happens before the first draw. Each iteration draws `x` then
/// `y` from `source`. The returned sample holds `min(iterations,
/// settings.point_subset_target)` evenly spread points.
///
/// # Errors
///
/// Returns [`SimError::InvalidParameter`] if `iterations` is zero.
pub async fn estimate_pi<S: RandomSource + ?Sized>(
    params: &PiParams,
    settings: &EngineSettings,
    source: &mut S,
) -> Result<PiEstimate, SimError> {
    if let Err(err) = params.validate() {
        warn!(error = %err, "Rejected point-sampling parameters");
        return Err(err);
    }

    let iterations = params.iterations;
    let selector = StrideSelector::new(iterations, settings.point_subset_target);
    let mut scheduler = YieldScheduler::new(settings.yield_stride);
    let mut sample = Vec::with_capacity(initial_sample_capacity(&selector));
    let mut inside: u64 = 0;

    info!(
        iterations,
        subset_target = settings.point_subset_target,
        nominal_stride = selector.nominal_stride(),
        "Point sampling started"
    );

    for index in 0..iterations {
        let x = source.uniform();
        let y = source.uniform();
        let point = SampledPoint::classify(x, y);

        if point.in_circle {
            inside = inside.saturating_add(1);
        }
        if selector.selects(index) {
            sample.push(point);
        }

        scheduler.tick().await;
    }

    let estimated_pi = 4.0 * stats::ratio(inside, iterations);
    let accuracy = accuracy_percent(estimated_pi);

    info!(
        estimated_pi,
        accuracy,
        points_inside = inside,
        sample_len = sample.len(),
        yields = scheduler.yields(),
        "Point sampling finished"
    );

    Ok(PiEstimate {
        estimated_pi,
        accuracy,
        points_inside: inside,
        points_total: iterations,
        sample,
    })
}

/// Up-front reservation for the point subset.
///
/// Capped at the default target. The vector grows past it on demand.
fn initial_sample_capacity(selector: &StrideSelector) -> usize {
    let reserve = selector.expected_len().min(StrideSelector::DEFAULT_TARGET);
    usize::try_from(reserve).unwrap_or_default()
}

/// `(1 - |estimate - π| / π) * 100`, unclipped.
pub fn accuracy_percent(estimate: f64) -> f64 {
    (1.0 - (estimate - PI).abs() / PI) * 100.0
}
