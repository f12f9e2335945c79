//! Flat-buffer encoding.

/// The flattened form of a string table, ready to cross the call boundary.
///
/// `offsets` is 1-based (the engine wire convention) and has exactly
/// `logical_count` entries; `buffer` is every entry concatenated with no
/// separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatTable {
    /// Concatenated entry bytes.
    pub buffer: Vec<u8>,
    /// 1-based start offset of each entry within `buffer`.
    pub offsets: Vec<i64>,
    /// Number of entries.
    pub logical_count: usize,
}

/// Encodes a string sequence into the flat engine wire format.
///
/// Entries are concatenated with no separator and each start position is
/// recorded as a 1-based offset, matching what the engine expects for
/// inbound label lists (zone names and the like).
///
/// For any sequence of **non-empty** strings,
/// `decode(&t.buffer, &t.offsets, t.logical_count)` recovers the input
/// exactly. An empty string adjacent to another entry shares that entry's
/// offset and cannot be told apart after flattening, so empty labels are a
/// caller error; the round-trip guarantee does not cover them.
pub fn encode<S: AsRef<str>>(strings: &[S]) -> FlatTable {
    let mut buffer = Vec::new();
    let mut offsets = Vec::with_capacity(strings.len());
    for s in strings {
        offsets.push(buffer.len() as i64 + 1);
        buffer.extend_from_slice(s.as_ref().as_bytes());
    }
    FlatTable {
        buffer,
        offsets,
        logical_count: strings.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_one_based() {
        let table = encode(&["abcd", "deff", "fgh"]);
        assert_eq!(table.buffer, b"abcddefffgh");
        assert_eq!(table.offsets, vec![1, 5, 9]);
        assert_eq!(table.logical_count, 3);
    }

    #[test]
    fn single_entry() {
        let table = encode(&["only"]);
        assert_eq!(table.buffer, b"only");
        assert_eq!(table.offsets, vec![1]);
        assert_eq!(table.logical_count, 1);
    }

    #[test]
    fn empty_sequence() {
        let table = encode::<&str>(&[]);
        assert!(table.buffer.is_empty());
        assert!(table.offsets.is_empty());
        assert_eq!(table.logical_count, 0);
    }

    #[test]
    fn empty_entry_shares_the_next_offset() {
        // Documented degenerate case: the empty label collapses.
        let table = encode(&["a", "", "b"]);
        assert_eq!(table.offsets, vec![1, 2, 2]);
    }
}
