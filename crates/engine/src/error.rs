//! Error types for the styx-engine crate.

use styx_calendar::DateError;
use styx_interval::{IntervalError, RangeError};
use styx_table::TableError;

use crate::capability::Procedure;

/// Error type for handle operations.
///
/// Every variant is detected on this side of the call boundary, before or
/// after the engine call. A request never reaches the engine with
/// unvalidated inputs, and engine output that violates the wire contract
/// aborts the response instead of being silently truncated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// Returned when the resolved capability set lacks the procedure an
    /// operation needs.
    #[error("engine build does not export procedure {procedure}")]
    MissingProcedure {
        /// The absent procedure.
        procedure: Procedure,
    },

    /// A date crossing the boundary failed validation.
    #[error("date error: {0}")]
    Date(#[from] DateError),

    /// An interval crossing the boundary failed validation.
    #[error("interval error: {0}")]
    Interval(#[from] IntervalError),

    /// A requested time range was inverted or empty.
    #[error("time range error: {0}")]
    Range(#[from] RangeError),

    /// Engine output violated the string-table wire contract.
    #[error("string table error: {0}")]
    Table(#[from] TableError),

    /// The engine returned a time-specification table with no entries.
    #[error("engine returned an empty time-specification table")]
    EmptyTimeSpecs,

    /// The engine reported an interval text length outside the allocated
    /// out-buffer.
    #[error("engine reported an interval text of {reported} bytes for a {capacity}-byte buffer")]
    IntervalTextLength {
        /// The byte length the engine wrote to the out-parameter.
        reported: i64,
        /// Allocated length of the interval out-buffer.
        capacity: usize,
    },

    /// The engine reported more hydrograph samples than the buffers hold.
    #[error("engine reported {reported} hydrograph samples for buffers sized for {capacity}")]
    SampleCount {
        /// The sample count the engine wrote to the out-parameter.
        reported: i64,
        /// Allocated sample capacity of the time and value buffers.
        capacity: usize,
    },
}
