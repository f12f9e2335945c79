//! Flat-buffer decoding.

use crate::error::TableError;

/// Decodes a flat character buffer plus parallel offset array into strings.
///
/// `offsets` is trimmed to its first `logical_count` entries; the remainder
/// of the array is unused placeholder capacity and is never inspected. The
/// offset convention is detected by inspecting the first trimmed entry: if
/// it equals 1 the array is taken as 1-based (the engine wire convention)
/// and every offset is rebased to 0 before slicing. A 0-based table whose
/// first string happens to start at offset 1 is indistinguishable on the
/// wire and will be rebased too; the wire format carries no convention
/// flag, so detection by inspection is the contract.
///
/// Entry `i` spans the buffer from its offset to the next entry's offset;
/// the last logical entry runs to the end of the buffer. Bytes are
/// returned exactly as stored; fixed-width padding is not stripped, since
/// trimming is a caller concern.
///
/// # Errors
///
/// Returns [`TableError::Capacity`] when `logical_count` exceeds the
/// offset array's length, and [`TableError::BufferBounds`] when any
/// trimmed offset is negative, points past the end of the buffer, or
/// precedes the offset before it. No partial output is produced.
pub fn decode(
    buffer: &[u8],
    offsets: &[i64],
    logical_count: usize,
) -> Result<Vec<String>, TableError> {
    if logical_count > offsets.len() {
        return Err(TableError::Capacity {
            logical_count,
            capacity: offsets.len(),
        });
    }
    if logical_count == 0 {
        return Ok(Vec::new());
    }

    let trimmed = &offsets[..logical_count];
    let base: i64 = if trimmed[0] == 1 { 1 } else { 0 };

    // Validate every offset before slicing anything.
    let mut starts = Vec::with_capacity(logical_count);
    for (index, &offset) in trimmed.iter().enumerate() {
        let rebased = offset - base;
        let in_bounds = rebased >= 0 && (rebased as usize) <= buffer.len();
        let monotone = index == 0 || offset >= trimmed[index - 1];
        if !in_bounds || !monotone {
            return Err(TableError::BufferBounds {
                offset,
                index,
                buffer_len: buffer.len(),
            });
        }
        starts.push(rebased as usize);
    }

    let mut entries = Vec::with_capacity(logical_count);
    for (index, &start) in starts.iter().enumerate() {
        let end = match starts.get(index + 1) {
            Some(&next) => next,
            None => buffer.len(),
        };
        entries.push(String::from_utf8_lossy(&buffer[start..end]).into_owned());
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_offsets_are_rebased() {
        let decoded = decode(b"abcddefffgh", &[1, 5, 9], 3).unwrap();
        assert_eq!(decoded, vec!["abcd", "deff", "fgh"]);
    }

    #[test]
    fn zero_based_offsets_pass_through() {
        let decoded = decode(b"abcddefffgh", &[0, 4, 8], 3).unwrap();
        assert_eq!(decoded, vec!["abcd", "deff", "fgh"]);
    }

    #[test]
    fn logical_count_trims_placeholder_slots() {
        // Physical capacity 5, logical count 2: trailing zeros are unused.
        let decoded = decode(b"northsouth", &[1, 6, 0, 0, 0], 2).unwrap();
        assert_eq!(decoded, vec!["north", "south"]);
    }

    #[test]
    fn last_entry_runs_to_end_of_buffer() {
        let decoded = decode(b"ab", &[1], 1).unwrap();
        assert_eq!(decoded, vec!["ab"]);
    }

    #[test]
    fn padding_is_preserved() {
        let decoded = decode(b"GW01    GW02    ", &[1, 9], 2).unwrap();
        assert_eq!(decoded, vec!["GW01    ", "GW02    "]);
    }

    #[test]
    fn zero_count_is_empty() {
        assert_eq!(decode(b"abc", &[1, 2], 0).unwrap(), Vec::<String>::new());
        assert_eq!(decode(b"", &[], 0).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn capacity_violation() {
        assert_eq!(
            decode(b"abc", &[1, 2], 3).unwrap_err(),
            TableError::Capacity {
                logical_count: 3,
                capacity: 2,
            }
        );
    }

    #[test]
    fn offset_past_buffer() {
        assert_eq!(
            decode(b"abc", &[1, 9], 2).unwrap_err(),
            TableError::BufferBounds {
                offset: 9,
                index: 1,
                buffer_len: 3,
            }
        );
    }

    #[test]
    fn negative_offset() {
        assert_eq!(
            decode(b"abc", &[-2, 1], 2).unwrap_err(),
            TableError::BufferBounds {
                offset: -2,
                index: 0,
                buffer_len: 3,
            }
        );
    }

    #[test]
    fn decreasing_offset() {
        assert!(matches!(
            decode(b"abcdef", &[1, 5, 3], 3).unwrap_err(),
            TableError::BufferBounds { index: 2, .. }
        ));
    }
}
