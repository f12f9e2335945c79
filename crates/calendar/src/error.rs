//! Error types for the styx-calendar crate.

/// Error type for all fallible operations in the styx-calendar crate.
///
/// Every variant identifies the single validation rule that failed while
/// parsing or constructing a [`SimDate`](crate::SimDate), together with the
/// offending input value. Callers never see a generic "bad date" failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateError {
    /// Returned when the date text is not exactly 16 characters long.
    #[error("date text must be exactly 16 characters, got {len}")]
    Length {
        /// Length of the text that was provided.
        len: usize,
    },

    /// Returned when a fixed separator character is missing or wrong.
    ///
    /// The canonical form is `MM/DD/YYYY_HH:MM`: `/` at positions 2 and 5,
    /// `_` at position 10, `:` at position 13 (0-based).
    #[error("expected '{expected}' at position {position}, found '{found}'")]
    Separator {
        /// The separator character required at this position.
        expected: char,
        /// 0-based byte position of the separator.
        position: usize,
        /// The character actually present.
        found: char,
    },

    /// Returned when a numeric field contains non-digit characters.
    #[error("non-numeric {field} field: '{text}'")]
    NonNumeric {
        /// Name of the field (`month`, `day`, `year`, `hour`, or `minute`).
        field: &'static str,
        /// The offending field text.
        text: String,
    },

    /// Returned when the month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when the day number is invalid for the given month and year.
    #[error("invalid day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year, which decides February's length.
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when the hour is outside 0..=24.
    #[error("invalid hour: {hour} (must be 0..=24)")]
    InvalidHour {
        /// The invalid hour value that was provided.
        hour: u8,
    },

    /// Returned when the minute is outside 0..=59.
    #[error("invalid minute: {minute} (must be 0..=59)")]
    InvalidMinute {
        /// The invalid minute value that was provided.
        minute: u8,
    },

    /// Returned when hour 24 is combined with a non-zero minute.
    ///
    /// `24:00` denotes midnight at the end of a day; `24:MM` with any other
    /// minute does not name a valid instant.
    #[error("hour 24 requires minute 00, got minute {minute}")]
    MidnightOverflow {
        /// The non-zero minute that was combined with hour 24.
        minute: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_length() {
        let err = DateError::Length { len: 10 };
        assert_eq!(
            err.to_string(),
            "date text must be exactly 16 characters, got 10"
        );
    }

    #[test]
    fn display_separator() {
        let err = DateError::Separator {
            expected: '/',
            position: 2,
            found: '-',
        };
        assert_eq!(err.to_string(), "expected '/' at position 2, found '-'");
    }

    #[test]
    fn display_invalid_day() {
        let err = DateError::InvalidDay {
            day: 29,
            month: 2,
            year: 2021,
            max_day: 28,
        };
        assert_eq!(
            err.to_string(),
            "invalid day: 29 for month 2 of year 2021 (max 28)"
        );
    }

    #[test]
    fn display_midnight_overflow() {
        let err = DateError::MidnightOverflow { minute: 15 };
        assert_eq!(err.to_string(), "hour 24 requires minute 00, got minute 15");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DateError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DateError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = DateError::InvalidMonth { month: 13 };
        let b = DateError::InvalidMonth { month: 13 };
        assert_eq!(a, b);

        let c = DateError::InvalidMonth { month: 0 };
        assert_ne!(a, c);
    }
}
