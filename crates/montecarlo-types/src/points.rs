//! Records produced by the point-sampling (π) estimator.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single point drawn in the unit square and its classification against
/// the inscribed circle centered at `(0.5, 0.5)` with radius `0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct SampledPoint {
    /// Horizontal coordinate in `[0, 1]`.
    pub x: f64,
    /// Vertical coordinate in `[0, 1]`.
    pub y: f64,
    /// Whether the point lies within (or on) the inscribed circle.
    pub in_circle: bool,
}

impl SampledPoint {
    /// Radius of the inscribed circle.
    pub const RADIUS: f64 = 0.5;

    /// Classify the point `(x, y)` against the inscribed circle.
    pub fn classify(x: f64, y: f64) -> Self {
        let in_circle = Self::distance_to_center(x, y) <= Self::RADIUS;
        Self { x, y, in_circle }
    }

    /// Euclidean distance from `(x, y)` to the circle center `(0.5, 0.5)`.
    pub fn distance_to_center(x: f64, y: f64) -> f64 {
        let dx = x - Self::RADIUS;
        let dy = y - Self::RADIUS;
        dx.hypot(dy)
    }
}

/// Final report of a point-sampling run.
///
/// `sample` holds a bounded, evenly spread subset of the drawn points for
/// display; the full stream is never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PiEstimate {
    /// `4 * points_inside / points_total`.
    pub estimated_pi: f64,
    /// `(1 - |estimated_pi - π| / π) * 100`. Not clipped: a negative value
    /// means the estimate was worse than a total miss.
    pub accuracy: f64,
    /// Number of points classified inside the circle.
    #[ts(type = "number")]
    pub points_inside: u64,
    /// Total number of points drawn.
    #[ts(type = "number")]
    pub points_total: u64,
    /// Representative subset of the drawn points.
    pub sample: Vec<SampledPoint>,
}
