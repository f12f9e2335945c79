use approx::assert_relative_eq;
use styx_calendar::SimDate;

#[test]
fn offset_zero_is_the_epoch() {
    let date = SimDate::from_epoch_offset(0.0);
    assert_eq!(date.to_string(), "12/30/1899_00:00");
}

#[test]
fn offset_one_advances_one_day() {
    let date = SimDate::from_epoch_offset(1.0);
    assert_eq!(date.to_string(), "12/31/1899_00:00");
}

#[test]
fn offsets_cross_year_and_leap_boundaries() {
    // Two days after the epoch is New Year 1900.
    assert_eq!(SimDate::from_epoch_offset(2.0).to_string(), "01/01/1900_00:00");

    // 1900 is not a leap year: day 59 after Jan 1 1900 is Mar 1.
    assert_eq!(
        SimDate::from_epoch_offset(2.0 + 59.0).to_string(),
        "03/01/1900_00:00"
    );

    // 2000 is a leap year.
    let feb29 = SimDate::parse("02/29/2000_00:00").unwrap();
    let mar1 = SimDate::from_epoch_offset(feb29.to_epoch_offset() + 1.0);
    assert_eq!(mar1.to_string(), "03/01/2000_00:00");
}

#[test]
fn fractional_offsets_carry_time_of_day() {
    let date = SimDate::from_epoch_offset(36798.25);
    assert_eq!(date.to_string(), "09/29/2000_06:00");

    // Rounded to the nearest minute.
    let third = SimDate::from_epoch_offset(1.0 / 3.0);
    assert_eq!(third.to_string(), "12/30/1899_08:00");
}

#[test]
fn negative_offsets_precede_the_epoch() {
    let date = SimDate::from_epoch_offset(-1.0);
    assert_eq!(date.to_string(), "12/29/1899_00:00");

    let half = SimDate::from_epoch_offset(-0.5);
    assert_eq!(half.to_string(), "12/29/1899_12:00");
}

#[test]
fn roundtrip_through_offsets() {
    for text in [
        "12/30/1899_00:00",
        "01/01/1900_00:00",
        "02/29/2000_12:30",
        "10/01/1990_24:00",
        "06/15/2035_18:45",
    ] {
        let date = SimDate::parse(text).unwrap();
        let back = SimDate::from_epoch_offset(date.to_epoch_offset());
        assert_eq!(
            back, date,
            "offset roundtrip changed the instant for {text}"
        );
    }
}

#[test]
fn epoch_invariant_holds() {
    // epoch + offset == date, expressed through the numeric side.
    let date = SimDate::parse("09/30/2000_24:00").unwrap();
    let offset = date.to_epoch_offset();
    assert_relative_eq!(
        offset,
        SimDate::parse("10/01/2000_00:00").unwrap().to_epoch_offset(),
        max_relative = 1e-12
    );
}
