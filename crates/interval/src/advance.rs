//! One-unit date advancement.

use styx_calendar::{days_in_month, SimDate};

use crate::interval::{ReportingInterval, TimeGrain};

/// Advances a date by exactly one reporting interval.
///
/// Minute, hour, day, and week grains are fixed-duration arithmetic over
/// whole minutes. Month and year grains advance the calendar field and
/// **clamp** the day-of-month to the last valid day of the target month
/// when the source day does not exist there: Jan 31 + `1MON` is Feb 28
/// (or Feb 29 in a leap year), never Mar 3, and Feb 29 + `1YEAR` is
/// Feb 28 of the following year. The hour and minute fields pass through
/// unchanged on calendar grains.
pub fn advance(date: SimDate, interval: ReportingInterval) -> SimDate {
    let magnitude = i64::from(interval.magnitude());
    match interval.grain() {
        TimeGrain::Minute => date.add_minutes(magnitude),
        TimeGrain::Hour => date.add_minutes(magnitude * 60),
        TimeGrain::Day => date.add_minutes(magnitude * 24 * 60),
        TimeGrain::Week => date.add_minutes(magnitude * 7 * 24 * 60),
        TimeGrain::Month => add_months(date, interval.magnitude()),
        TimeGrain::Year => add_years(date, interval.magnitude() as i32),
    }
}

fn add_months(date: SimDate, months: u32) -> SimDate {
    let total = i64::from(date.month()) - 1 + i64::from(months);
    let year = date.year() + (total / 12) as i32;
    let month = (total % 12) as u8 + 1;
    clamped(year, month, date)
}

fn add_years(date: SimDate, years: i32) -> SimDate {
    clamped(date.year() + years, date.month(), date)
}

/// Rebuilds `date` in the target year/month, clamping the day to the last
/// valid day of that month.
fn clamped(year: i32, month: u8, date: SimDate) -> SimDate {
    let max_day = days_in_month(year, month).expect("advanced month stays in 1..=12");
    let day = date.day().min(max_day);
    SimDate::new(year, month, day, date.hour(), date.minute())
        .expect("clamped day is valid for the target month")
}
