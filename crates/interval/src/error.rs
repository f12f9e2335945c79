//! Error types for the styx-interval crate.

use styx_calendar::SimDate;

/// Error type for reporting-interval parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntervalError {
    /// Returned when interval text names no member of the fixed vocabulary.
    ///
    /// Unknown unit codes and unsupported magnitude/unit pairs (for example
    /// `7MIN` or `2DAY`) both land here.
    #[error("unsupported reporting interval: '{text}'")]
    UnsupportedInterval {
        /// The interval text that was provided.
        text: String,
    },
}

/// Error type for interval counting over a date range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RangeError {
    /// Returned when the begin date is not strictly before the end date.
    #[error("begin date {begin} is not strictly before end date {end}")]
    InvertedRange {
        /// The begin date of the requested range.
        begin: SimDate,
        /// The end date of the requested range.
        end: SimDate,
    },
}
