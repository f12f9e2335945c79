//! Error types for the styx-units crate.

use crate::factor::UnitKind;

/// Error type for conversion-factor validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FactorError {
    /// Returned when a conversion factor is zero or negative.
    #[error("conversion factor for {kind:?} must be positive, got {value}")]
    NonPositive {
        /// The rejected factor value.
        value: f64,
        /// The unit kind the factor was supplied for.
        kind: UnitKind,
    },
}
