//! Shared output records for the Monte Carlo classroom engine.
//!
//! This crate is the single source of truth for the records the engine hands
//! to the presentation layer. Types defined here flow downstream to
//! `TypeScript` via `ts-rs` so the visualizers can consume them directly.
//!
//! # Modules
//!
//! - [`points`] -- Point-sampling records ([`SampledPoint`], [`PiEstimate`])
//! - [`walk`] -- Random-walk records ([`TrialResult`], [`WalkReport`],
//!   [`LogInsights`])

pub mod points;
pub mod walk;

// Re-export all public types at crate root for convenience.
pub use points::{PiEstimate, SampledPoint};
pub use walk::{LogInsights, TrialResult, WalkReport};

#[cfg(test)]
mod tests {
    //! Binding generation for the presentation layer.

    #[test]
    fn export_bindings() {
        // Files are written to the `bindings/` directory relative to the
        // crate root.
        use ts_rs::TS;

        let _ = crate::points::SampledPoint::export_all();
        let _ = crate::points::PiEstimate::export_all();
        let _ = crate::walk::TrialResult::export_all();
        let _ = crate::walk::LogInsights::export_all();
        let _ = crate::walk::WalkReport::export_all();
    }
}
