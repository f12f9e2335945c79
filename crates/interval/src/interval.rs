//! The fixed reporting-interval vocabulary.

use std::fmt;
use std::str::FromStr;

use crate::error::IntervalError;

/// Time grain of a reporting interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeGrain {
    /// Whole minutes.
    Minute,
    /// Whole hours.
    Hour,
    /// Calendar days.
    Day,
    /// Calendar weeks (7 days).
    Week,
    /// Calendar months (variable length).
    Month,
    /// Calendar years (variable length).
    Year,
}

impl TimeGrain {
    /// Canonical upper-case unit code used in interval text.
    fn code(self) -> &'static str {
        match self {
            TimeGrain::Minute => "MIN",
            TimeGrain::Hour => "HOUR",
            TimeGrain::Day => "DAY",
            TimeGrain::Week => "WEEK",
            TimeGrain::Month => "MON",
            TimeGrain::Year => "YEAR",
        }
    }
}

/// Magnitudes permitted for each grain.
///
/// The vocabulary is closed: only these magnitude/grain pairs exist.
const MINUTE_MAGNITUDES: &[u32] = &[1, 2, 3, 4, 5, 10, 15, 20, 30];
const HOUR_MAGNITUDES: &[u32] = &[1, 2, 3, 4, 6, 8, 12];

/// One member of the fixed reporting-interval vocabulary.
///
/// Textual form is the magnitude concatenated with the unit code
/// (`15MIN`, `1DAY`, `1MON`), case-insensitive on input and canonical
/// upper-case on output. Intervals order by nominal span, minutes through
/// years, so `30MIN < 1HOUR < 1MON < 1YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportingInterval {
    magnitude: u32,
    grain: TimeGrain,
}

impl ReportingInterval {
    /// Parses interval text against the fixed vocabulary.
    ///
    /// Matching is case-insensitive. Surrounding whitespace is not
    /// accepted: the engine wire format carries bare interval codes.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::UnsupportedInterval`] for unknown unit
    /// codes and for magnitude/unit pairs outside the vocabulary.
    pub fn parse(text: &str) -> Result<Self, IntervalError> {
        let upper = text.to_ascii_uppercase();
        let split = upper
            .find(|c: char| !c.is_ascii_digit())
            .filter(|&i| i > 0)
            .ok_or_else(|| IntervalError::UnsupportedInterval {
                text: text.to_string(),
            })?;
        let (digits, code) = upper.split_at(split);
        let magnitude: u32 =
            digits
                .parse()
                .map_err(|_| IntervalError::UnsupportedInterval {
                    text: text.to_string(),
                })?;
        let grain = match code {
            "MIN" => TimeGrain::Minute,
            "HOUR" => TimeGrain::Hour,
            "DAY" => TimeGrain::Day,
            "WEEK" => TimeGrain::Week,
            "MON" => TimeGrain::Month,
            "YEAR" => TimeGrain::Year,
            _ => {
                return Err(IntervalError::UnsupportedInterval {
                    text: text.to_string(),
                })
            }
        };
        let supported = match grain {
            TimeGrain::Minute => MINUTE_MAGNITUDES.contains(&magnitude),
            TimeGrain::Hour => HOUR_MAGNITUDES.contains(&magnitude),
            _ => magnitude == 1,
        };
        if !supported {
            return Err(IntervalError::UnsupportedInterval {
                text: text.to_string(),
            });
        }
        Ok(Self { magnitude, grain })
    }

    /// Returns the magnitude (for example 15 in `15MIN`).
    pub fn magnitude(self) -> u32 {
        self.magnitude
    }

    /// Returns the time grain.
    pub fn grain(self) -> TimeGrain {
        self.grain
    }

    /// Nominal span in minutes, used only for ordering the vocabulary.
    ///
    /// Month and year use their nominal lengths (30 and 365 days); actual
    /// advancement is calendar-aware and never uses these values.
    fn nominal_minutes(self) -> u32 {
        let per_unit = match self.grain {
            TimeGrain::Minute => 1,
            TimeGrain::Hour => 60,
            TimeGrain::Day => 24 * 60,
            TimeGrain::Week => 7 * 24 * 60,
            TimeGrain::Month => 30 * 24 * 60,
            TimeGrain::Year => 365 * 24 * 60,
        };
        self.magnitude * per_unit
    }
}

impl PartialOrd for ReportingInterval {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReportingInterval {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.nominal_minutes().cmp(&other.nominal_minutes())
    }
}

impl fmt::Display for ReportingInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.grain.code())
    }
}

impl FromStr for ReportingInterval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
