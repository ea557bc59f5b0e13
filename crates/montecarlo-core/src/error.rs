//! Error types for the `montecarlo-core` crate.
//!
//! Simulations are pure computations over their parameters: they either
//! fail validation up front with [`SimError`] or run to completion.

/// Errors raised by the estimators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// A parameter is outside its documented domain. Raised before any
    /// simulation work begins.
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        /// The offending parameter.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl SimError {
    /// Build an [`SimError::InvalidParameter`] for `field`.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// The parameter named by this error.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidParameter { field, .. } => field,
        }
    }
}
