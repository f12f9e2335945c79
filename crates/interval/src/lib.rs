//! # styx-interval
//!
//! The reporting-interval vocabulary of the simulation engine: a closed set
//! of sampling granularities from `1MIN` through `1YEAR`, a rule for
//! advancing a date by one unit, and a counter for the number of whole
//! intervals between two dates.
//!
//! The counter's result sizes the caller-allocated buffers handed to the
//! engine, so its semantics are conservative: partial trailing intervals
//! never count, boundaries landing exactly on the end date always do, and
//! the "sample at both endpoints" adjustment is an explicit flag.
//!
//! ## Quick Start
//!
//! ```ignore
//! use styx_calendar::SimDate;
//! use styx_interval::{advance, count, ReportingInterval};
//!
//! let begin = SimDate::parse("01/01/2000_00:00")?;
//! let end = SimDate::parse("04/01/2000_00:00")?;
//! let monthly = ReportingInterval::parse("1MON")?;
//!
//! assert_eq!(count(begin, end, monthly, true)?, 4);
//! assert_eq!(advance(begin, monthly).to_string(), "02/01/2000_00:00");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `interval` | `ReportingInterval` vocabulary, parsing, ordering |
//! | `advance` | One-unit advancement with the month-end clamp |
//! | `count` | Whole-interval counting between two dates |
//! | `error` | Error types |

mod advance;
mod count;
mod error;
mod interval;

pub use advance::advance;
pub use count::count;
pub use error::{IntervalError, RangeError};
pub use interval::{ReportingInterval, TimeGrain};
