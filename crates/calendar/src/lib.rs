//! # styx-calendar
//!
//! Minute-resolution simulation calendar: validated date parsing, total
//! ordering by instant, and conversion to and from epoch-relative day
//! offsets.
//!
//! Dates use the fixed 16-character textual form `MM/DD/YYYY_HH:MM`, with
//! hour 24 permitted as "midnight ending the day". Numeric day offsets are
//! measured from the fixed epoch 1899-12-30 and follow the ordinary
//! proleptic Gregorian leap rule (no leap seconds; this is a simulation
//! calendar, not a civil one).
//!
//! ## Quick Start
//!
//! ```ignore
//! use styx_calendar::SimDate;
//!
//! let begin = SimDate::parse("10/01/1990_24:00")?;
//! let end = SimDate::parse("09/30/2000_24:00")?;
//! assert!(begin < end);
//!
//! // Wire decoding: day 36798 from the 1899-12-30 epoch.
//! let decoded = SimDate::from_epoch_offset(36798.0);
//! assert_eq!(decoded.to_string(), "09/29/2000_00:00");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | `SimDate` parsing, ordering, rendering, minute arithmetic |
//! | `epoch` | Gregorian day arithmetic and the 1899-12-30 epoch |
//! | `error` | Error types |

mod date;
mod epoch;
mod error;

pub use date::SimDate;
pub use epoch::{days_in_month, is_leap_year};
pub use error::DateError;
