// ============================================================================
// Settlement Date Scenarios
// Origination dates around the 2016 bank holidays
// ============================================================================

use ach_utility::calendar::{calc_settlement_date, HolidayCalendar, COMPACT_DATE_FORMAT};
use chrono::NaiveDate;

fn holidays() -> HolidayCalendar {
    HolidayCalendar::parse_dates(["160704", "160904", "161009", "161110"], COMPACT_DATE_FORMAT)
        .unwrap()
}

fn parse(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, COMPACT_DATE_FORMAT).unwrap()
}

#[test]
fn test_calc_settlement_date() {
    let holidays = holidays();

    let cases = [
        ("160629", "160630"), // regular weekday
        ("160630", "160701"), // Thursday
        ("160701", "160705"), // weekend, then holiday
        ("160708", "160711"), // Friday
        ("160709", "160711"), // Saturday
        ("160710", "160711"), // Sunday
        ("160704", "160705"), // on the holiday
    ];

    for (today, expected) in cases {
        let result = calc_settlement_date(parse(today), &holidays).unwrap();
        assert_eq!(
            result.format(COMPACT_DATE_FORMAT).to_string(),
            expected,
            "origination {}",
            today
        );
    }
}

#[test]
fn test_settlement_never_lands_on_weekend() {
    use chrono::{Datelike, Weekday};

    let holidays = holidays();
    let start = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();

    for today in start.iter_days().take(366) {
        let settlement = calc_settlement_date(today, &holidays).unwrap();
        assert!(
            !matches!(settlement.weekday(), Weekday::Sat | Weekday::Sun),
            "{} settled on {}",
            today,
            settlement
        );
        assert!(settlement > today);
        assert!(settlement - today <= chrono::TimeDelta::days(5));
    }
}

#[test]
fn test_weekend_holidays_are_unreachable() {
    // 2016-09-04 and 2016-10-09 are Sundays; the weekend roll skips them
    let holidays = holidays();
    let with = calc_settlement_date(parse("160902"), &holidays).unwrap();
    let without = calc_settlement_date(parse("160902"), &HolidayCalendar::new()).unwrap();

    assert_eq!(with, without);
    assert_eq!(with, parse("160905"));
}
