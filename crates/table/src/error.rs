//! Error types for the styx-table crate.

/// Error type for string-table decoding.
///
/// Both variants signal a violated engine contract: the offset array or
/// flat buffer handed over does not describe the table it claims to. They
/// abort the decode with no partial output, because a mismatched table
/// means the engine wrote more data than the caller allocated for.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    /// Returned when the logical count exceeds the offset array's length.
    #[error("logical count {logical_count} exceeds offset array capacity {capacity}")]
    Capacity {
        /// The logical entry count that was claimed.
        logical_count: usize,
        /// The physical length of the offset array.
        capacity: usize,
    },

    /// Returned when an offset points outside the flat buffer, or is
    /// negative on the wire.
    #[error("offset {offset} at entry {index} is outside the {buffer_len}-byte buffer")]
    BufferBounds {
        /// The out-of-range offset as received (before any rebasing).
        offset: i64,
        /// 0-based index of the offending entry.
        index: usize,
        /// Length of the flat buffer in bytes.
        buffer_len: usize,
    },
}
