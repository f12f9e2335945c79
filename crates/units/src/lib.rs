//! # styx-units
//!
//! Named, validated unit-conversion factors for engine results.
//!
//! The engine computes internally in feet, square feet, and cubic feet;
//! callers request results in their own units by supplying a positive
//! scale factor per request. The factors historically appeared as repeated
//! magic literals at every call site; here they are named constants in one
//! place, and [`ConversionFactor::resolve`] rejects the zero and negative
//! values that would silently corrupt a result array.
//!
//! The engine applies the factor itself during a request; [`apply`] exists
//! for the internal paths that scale an already-returned array.
//!
//! ```ignore
//! use styx_units::{ConversionFactor, UnitKind, CUBIC_FEET_TO_THOUSAND_ACRE_FEET};
//!
//! let factor = ConversionFactor::resolve(CUBIC_FEET_TO_THOUSAND_ACRE_FEET, UnitKind::Volume)?;
//! assert_eq!(factor.value(), 2.29568e-8);
//! ```

mod error;
mod factor;

pub use error::FactorError;
pub use factor::{apply, ConversionFactor, UnitKind};

/// Identity factor: engine lengths are already in feet.
pub const FEET_IDENTITY: f64 = 1.0;

/// Square feet to acres.
pub const SQUARE_FEET_TO_ACRES: f64 = 2.29568e-5;

/// Cubic feet to thousand acre-feet.
pub const CUBIC_FEET_TO_THOUSAND_ACRE_FEET: f64 = 2.29568e-8;
