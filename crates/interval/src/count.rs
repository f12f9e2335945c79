//! Whole-interval counting between two dates.

use styx_calendar::SimDate;

use crate::advance::advance;
use crate::error::RangeError;
use crate::interval::ReportingInterval;

/// Counts the whole reporting intervals between `begin` and `end`.
///
/// Starting from `begin`, the interval is applied repeatedly; every
/// application landing at or before `end` counts. With `include_end` the
/// result is incremented by one, turning "number of intervals" into
/// "number of sample points", the form most callers want when a sample
/// exists at both endpoints. The flag is always explicit; no call site
/// applies it silently.
///
/// The result is the exact buffer size for an engine time-series request,
/// so ambiguity rounds toward inclusion: a partial trailing interval is
/// never counted, but a boundary landing exactly on `end` always is.
///
/// Counting is by repeated advancement, not closed-form division: month
/// and year grains have variable length, and a division over nominal
/// lengths would misclassify boundary dates produced by the month-end
/// clamp rule of [`advance`].
///
/// # Errors
///
/// Returns [`RangeError::InvertedRange`] unless `begin` is strictly
/// before `end`.
pub fn count(
    begin: SimDate,
    end: SimDate,
    interval: ReportingInterval,
    include_end: bool,
) -> Result<usize, RangeError> {
    if begin >= end {
        return Err(RangeError::InvertedRange { begin, end });
    }
    let mut n = 0;
    let mut current = advance(begin, interval);
    while current <= end {
        n += 1;
        current = advance(current, interval);
    }
    if include_end {
        n += 1;
    }
    Ok(n)
}
