//! Validated conversion-factor value type.

use crate::error::FactorError;

/// The physical dimension a conversion factor applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Lengths (heads, depths, elevations), engine-internal feet.
    Length,
    /// Areas (element and zone extents), engine-internal square feet.
    Area,
    /// Volumes (flows, storage, budgets), engine-internal cubic feet.
    Volume,
}

/// A validated positive scale factor from engine-internal units to the
/// caller's units.
///
/// No defaults are invented here; every call site supplies its own factor
/// (commonly [`FEET_IDENTITY`](crate::FEET_IDENTITY),
/// [`SQUARE_FEET_TO_ACRES`](crate::SQUARE_FEET_TO_ACRES), or
/// [`CUBIC_FEET_TO_THOUSAND_ACRE_FEET`](crate::CUBIC_FEET_TO_THOUSAND_ACRE_FEET)),
/// and [`ConversionFactor::resolve`] only guarantees it is usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionFactor {
    value: f64,
    kind: UnitKind,
}

impl ConversionFactor {
    /// Validates a caller-supplied factor.
    ///
    /// # Errors
    ///
    /// Returns [`FactorError::NonPositive`] when `value` is zero, negative,
    /// or NaN.
    pub fn resolve(value: f64, kind: UnitKind) -> Result<Self, FactorError> {
        if value.is_nan() || value <= 0.0 {
            return Err(FactorError::NonPositive { value, kind });
        }
        Ok(Self { value, kind })
    }

    /// Returns the scale value, as forwarded to the engine.
    pub fn value(self) -> f64 {
        self.value
    }

    /// Returns the unit kind this factor was resolved for.
    pub fn kind(self) -> UnitKind {
        self.kind
    }
}

/// Scales every element of `values` by the factor, in place.
pub fn apply(factor: ConversionFactor, values: &mut [f64]) {
    for v in values.iter_mut() {
        *v *= factor.value();
    }
}
