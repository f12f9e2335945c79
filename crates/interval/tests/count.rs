use styx_calendar::SimDate;
use styx_interval::{count, RangeError, ReportingInterval};

fn cnt(begin: &str, end: &str, interval: &str, include_end: bool) -> Result<usize, RangeError> {
    count(
        SimDate::parse(begin).unwrap(),
        SimDate::parse(end).unwrap(),
        ReportingInterval::parse(interval).unwrap(),
        include_end,
    )
}

#[test]
fn sample_counts_across_all_grains() {
    // One simulated day at each sub-daily grain, exclusive of the end.
    let cases: &[(&str, usize)] = &[
        ("1MIN", 1440),
        ("5MIN", 288),
        ("30MIN", 48),
        ("1HOUR", 24),
        ("6HOUR", 4),
        ("12HOUR", 2),
        ("1DAY", 1),
    ];
    for (interval, expected) in cases {
        assert_eq!(
            cnt("01/01/2000_00:00", "01/02/2000_00:00", interval, false).unwrap(),
            *expected,
            "one day at {interval}"
        );
    }
}

#[test]
fn include_end_adds_exactly_one() {
    for interval in ["1MIN", "1HOUR", "1DAY", "1WEEK", "1MON", "1YEAR"] {
        let exclusive = cnt("01/01/2000_00:00", "01/01/2001_00:00", interval, false).unwrap();
        let inclusive = cnt("01/01/2000_00:00", "01/01/2001_00:00", interval, true).unwrap();
        assert_eq!(
            inclusive,
            exclusive + 1,
            "include_end must add one at {interval}"
        );
    }
}

#[test]
fn monthly_first_quarter() {
    assert_eq!(
        cnt("01/01/2000_00:00", "04/01/2000_00:00", "1MON", false).unwrap(),
        3
    );
    assert_eq!(
        cnt("01/01/2000_00:00", "04/01/2000_00:00", "1MON", true).unwrap(),
        4
    );
}

#[test]
fn leap_year_at_daily_resolution() {
    // 2000 is a leap year: 366 days.
    assert_eq!(
        cnt("01/01/2000_00:00", "01/01/2001_00:00", "1DAY", false).unwrap(),
        366
    );
    // 2001 is not: 365 days.
    assert_eq!(
        cnt("01/01/2001_00:00", "01/01/2002_00:00", "1DAY", false).unwrap(),
        365
    );
}

#[test]
fn simulation_period_in_end_of_day_convention() {
    // A typical ten-water-year window expressed with 24:00 stamps.
    assert_eq!(
        cnt("09/30/1990_24:00", "09/30/2000_24:00", "1YEAR", false).unwrap(),
        10
    );
    assert_eq!(
        cnt("09/30/1990_24:00", "09/30/2000_24:00", "1MON", true).unwrap(),
        121
    );
}

#[test]
fn inverted_and_empty_ranges_fail() {
    let err = cnt("01/02/2000_00:00", "01/01/2000_00:00", "1DAY", false).unwrap_err();
    let RangeError::InvertedRange { begin, end } = err;
    assert_eq!(begin.to_string(), "01/02/2000_00:00");
    assert_eq!(end.to_string(), "01/01/2000_00:00");

    assert!(cnt("01/01/2000_00:00", "01/01/2000_00:00", "1DAY", true).is_err());
}

#[test]
fn interval_longer_than_range_counts_zero() {
    assert_eq!(
        cnt("01/01/2000_00:00", "01/15/2000_00:00", "1MON", false).unwrap(),
        0
    );
    // Inclusion still adds the end-date sample slot.
    assert_eq!(
        cnt("01/01/2000_00:00", "01/15/2000_00:00", "1MON", true).unwrap(),
        1
    );
}
