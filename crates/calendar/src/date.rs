//! Minute-resolution simulation date with validated construction.

use std::fmt;
use std::str::FromStr;

use crate::epoch::{civil_from_days, days_from_civil, days_in_month, EPOCH_CIVIL_DAYS};
use crate::error::DateError;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A calendar date-time at minute resolution, rendered as `MM/DD/YYYY_HH:MM`.
///
/// Hour 24 is permitted (with minute 0 only) and denotes midnight at the
/// *end* of the day, so `01/15/2021_24:00` and `01/16/2021_00:00` are the
/// same instant. Equality, ordering, and hashing all go through the
/// represented instant, never the raw fields.
///
/// Values are immutable and constructed only through [`SimDate::new`] or
/// [`SimDate::parse`], both of which validate every field.
#[derive(Debug, Clone, Copy)]
pub struct SimDate {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
}

impl PartialEq for SimDate {
    fn eq(&self, other: &Self) -> bool {
        self.instant_minutes() == other.instant_minutes()
    }
}

impl Eq for SimDate {}

impl PartialOrd for SimDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.instant_minutes().cmp(&other.instant_minutes())
    }
}

impl std::hash::Hash for SimDate {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.instant_minutes().hash(state);
    }
}

impl SimDate {
    /// Creates a new `SimDate` from its calendar fields.
    ///
    /// # Errors
    ///
    /// Returns [`DateError`] if the month, day, hour, or minute violates a
    /// calendar rule, or if hour 24 is combined with a non-zero minute.
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Result<Self, DateError> {
        let max_day = days_in_month(year, month).ok_or(DateError::InvalidMonth { month })?;
        if day == 0 || day > max_day {
            return Err(DateError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        if hour > 24 {
            return Err(DateError::InvalidHour { hour });
        }
        if minute > 59 {
            return Err(DateError::InvalidMinute { minute });
        }
        if hour == 24 && minute != 0 {
            return Err(DateError::MidnightOverflow { minute });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    /// Parses the fixed 16-character textual form `MM/DD/YYYY_HH:MM`.
    ///
    /// # Errors
    ///
    /// Returns the [`DateError`] variant naming the first rule violated:
    /// wrong length, wrong separator, non-numeric field, invalid month or
    /// day, hour or minute out of range, or hour 24 with non-zero minute.
    pub fn parse(text: &str) -> Result<Self, DateError> {
        let bytes = text.as_bytes();
        if bytes.len() != 16 {
            return Err(DateError::Length { len: bytes.len() });
        }
        for &(position, expected) in &[(2usize, '/'), (5, '/'), (10, '_'), (13, ':')] {
            let found = bytes[position] as char;
            if found != expected {
                return Err(DateError::Separator {
                    expected,
                    position,
                    found,
                });
            }
        }
        let month = parse_field(bytes, 0, 2, "month")? as u8;
        let day = parse_field(bytes, 3, 5, "day")? as u8;
        let year = parse_field(bytes, 6, 10, "year")? as i32;
        let hour = parse_field(bytes, 11, 13, "hour")? as u8;
        let minute = parse_field(bytes, 14, 16, "minute")? as u8;
        Self::new(year, month, day, hour, minute)
    }

    /// Converts a signed day offset from the epoch 1899-12-30 into a date.
    ///
    /// The fractional part carries sub-day time and is rounded to the
    /// nearest whole minute. The result always renders with hour 0..=23;
    /// an offset landing exactly on midnight yields `00:00` of the next
    /// day, never `24:00` of the previous one.
    pub fn from_epoch_offset(days: f64) -> Self {
        let total = (days * MINUTES_PER_DAY as f64).round() as i64;
        Self::from_instant_minutes(total)
    }

    /// The inverse of [`SimDate::from_epoch_offset`]: this date as a signed
    /// (possibly fractional) day count from 1899-12-30.
    pub fn to_epoch_offset(self) -> f64 {
        self.instant_minutes() as f64 / MINUTES_PER_DAY as f64
    }

    /// Returns this date shifted by a signed number of whole minutes.
    ///
    /// Day, month, and year carries are handled through the epoch day
    /// arithmetic, so any delta is valid. The result renders with hour
    /// 0..=23.
    pub fn add_minutes(self, delta: i64) -> Self {
        Self::from_instant_minutes(self.instant_minutes() + delta)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the hour (0..=24).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes from the epoch instant 1899-12-30 00:00 to this instant.
    ///
    /// Hour 24 spills into the following day here, which is what makes the
    /// two renderings of a midnight compare equal.
    fn instant_minutes(self) -> i64 {
        let days = days_from_civil(self.year, self.month, self.day) - EPOCH_CIVIL_DAYS;
        days * MINUTES_PER_DAY + i64::from(self.hour) * 60 + i64::from(self.minute)
    }

    fn from_instant_minutes(total: i64) -> Self {
        let days = total.div_euclid(MINUTES_PER_DAY);
        let minutes_of_day = total.rem_euclid(MINUTES_PER_DAY);
        let (year, month, day) = civil_from_days(EPOCH_CIVIL_DAYS + days);
        Self {
            year,
            month,
            day,
            hour: (minutes_of_day / 60) as u8,
            minute: (minutes_of_day % 60) as u8,
        }
    }
}

impl fmt::Display for SimDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:04}_{:02}:{:02}",
            self.month, self.day, self.year, self.hour, self.minute
        )
    }
}

impl FromStr for SimDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parses the ASCII-digit field at `bytes[start..end]`.
fn parse_field(
    bytes: &[u8],
    start: usize,
    end: usize,
    field: &'static str,
) -> Result<u32, DateError> {
    let mut value = 0u32;
    for &b in &bytes[start..end] {
        if !b.is_ascii_digit() {
            return Err(DateError::NonNumeric {
                field,
                text: String::from_utf8_lossy(&bytes[start..end]).into_owned(),
            });
        }
        value = value * 10 + u32::from(b - b'0');
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = SimDate::new(2021, 1, 15, 10, 30).unwrap();
        assert_eq!(date.year(), 2021);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
        assert_eq!(date.hour(), 10);
        assert_eq!(date.minute(), 30);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            SimDate::new(2021, 13, 1, 0, 0).unwrap_err(),
            DateError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn new_invalid_day_leap_aware() {
        assert_eq!(
            SimDate::new(2021, 2, 29, 0, 0).unwrap_err(),
            DateError::InvalidDay {
                day: 29,
                month: 2,
                year: 2021,
                max_day: 28,
            }
        );
        assert!(SimDate::new(2020, 2, 29, 0, 0).is_ok());
    }

    #[test]
    fn new_hour_24_rules() {
        assert!(SimDate::new(2021, 1, 15, 24, 0).is_ok());
        assert_eq!(
            SimDate::new(2021, 1, 15, 24, 15).unwrap_err(),
            DateError::MidnightOverflow { minute: 15 }
        );
        assert_eq!(
            SimDate::new(2021, 1, 15, 25, 0).unwrap_err(),
            DateError::InvalidHour { hour: 25 }
        );
    }

    #[test]
    fn parse_valid() {
        let date = SimDate::parse("09/30/2000_24:00").unwrap();
        assert_eq!(date.month(), 9);
        assert_eq!(date.day(), 30);
        assert_eq!(date.year(), 2000);
        assert_eq!(date.hour(), 24);
        assert_eq!(date.minute(), 0);
    }

    #[test]
    fn parse_wrong_length() {
        assert_eq!(
            SimDate::parse("1/1/2000_0:00").unwrap_err(),
            DateError::Length { len: 13 }
        );
    }

    #[test]
    fn parse_wrong_separator() {
        assert_eq!(
            SimDate::parse("01-15-2021_10:30").unwrap_err(),
            DateError::Separator {
                expected: '/',
                position: 2,
                found: '-',
            }
        );
    }

    #[test]
    fn parse_non_numeric_field() {
        assert_eq!(
            SimDate::parse("0a/15/2021_10:30").unwrap_err(),
            DateError::NonNumeric {
                field: "month",
                text: "0a".to_string(),
            }
        );
    }

    #[test]
    fn display_roundtrip() {
        let text = "02/03/2021_09:05";
        assert_eq!(SimDate::parse(text).unwrap().to_string(), text);
    }

    #[test]
    fn from_str_impl() {
        let date: SimDate = "01/01/2000_00:00".parse().unwrap();
        assert_eq!(date.year(), 2000);
    }

    #[test]
    fn ordering_by_instant() {
        let a = SimDate::parse("01/01/2000_00:00").unwrap();
        let b = SimDate::parse("01/02/2000_00:00").unwrap();
        assert!(a < b);
        assert!(b > a);
    }

    #[test]
    fn end_of_day_equals_next_midnight() {
        let end = SimDate::parse("01/15/2021_24:00").unwrap();
        let next = SimDate::parse("01/16/2021_00:00").unwrap();
        assert_eq!(end, next);
        assert_eq!(end.cmp(&next), std::cmp::Ordering::Equal);
    }

    #[test]
    fn hash_agrees_with_eq() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(SimDate::parse("01/15/2021_24:00").unwrap());
        assert!(set.contains(&SimDate::parse("01/16/2021_00:00").unwrap()));
    }

    #[test]
    fn add_minutes_within_day() {
        let date = SimDate::parse("01/15/2021_10:30").unwrap();
        assert_eq!(date.add_minutes(45).to_string(), "01/15/2021_11:15");
    }

    #[test]
    fn add_minutes_day_carry() {
        let date = SimDate::parse("12/31/2020_23:30").unwrap();
        assert_eq!(date.add_minutes(60).to_string(), "01/01/2021_00:30");
    }

    #[test]
    fn add_minutes_negative() {
        let date = SimDate::parse("01/01/2021_00:30").unwrap();
        assert_eq!(date.add_minutes(-60).to_string(), "12/31/2020_23:30");
    }

    #[test]
    fn epoch_offset_zero() {
        assert_eq!(
            SimDate::from_epoch_offset(0.0).to_string(),
            "12/30/1899_00:00"
        );
    }

    #[test]
    fn epoch_offset_fractional() {
        // 0.5 days = 12:00 on the epoch day.
        assert_eq!(
            SimDate::from_epoch_offset(0.5).to_string(),
            "12/30/1899_12:00"
        );
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<SimDate>();
    }
}
