//! Epoch day arithmetic for the proleptic Gregorian calendar.
//!
//! Numeric date values crossing the engine boundary are day counts measured
//! from the fixed epoch **1899-12-30** (the spreadsheet-style epoch). The
//! conversions here use the standard civil-from-days / days-from-civil
//! integer algorithms, so they are exact over the whole `i64` day range and
//! apply the ordinary Gregorian leap rule (1900 is not a leap year, 2000 is).

/// Days in each month of a non-leap year, indexed by `month - 1`.
pub(crate) const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a leap year under the Gregorian rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`, or `None` for a month
/// outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    if !(1..=12).contains(&month) {
        return None;
    }
    if month == 2 && is_leap_year(year) {
        Some(29)
    } else {
        Some(MONTH_LENGTHS[usize::from(month) - 1])
    }
}

/// Days from 1970-01-01 to any proleptic Gregorian civil date.
///
/// Howard Hinnant's `days_from_civil` algorithm, valid for all `i32` years.
pub(crate) const fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = year as i64 - if month <= 2 { 1 } else { 0 };
    let m = month as i64;
    let d = day as i64;
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

/// Inverse of [`days_from_civil`]: `(year, month, day)` for a day count
/// measured from 1970-01-01.
pub(crate) const fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if m <= 2 { y + 1 } else { y };
    (year as i32, m as u8, d as u8)
}

/// Day count of the engine epoch (1899-12-30) relative to 1970-01-01.
pub(crate) const EPOCH_CIVIL_DAYS: i64 = days_from_civil(1899, 12, 30);
