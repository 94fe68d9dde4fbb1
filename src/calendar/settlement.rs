// ============================================================================
// Settlement Date Calculation
// Next business day for ACH settlement, skipping weekends and one holiday
// ============================================================================

use super::HolidayCalendar;
use crate::errors::{UtilityError, UtilityResult};
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};

#[inline]
fn add_days(date: NaiveDate, days: u64) -> UtilityResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or(UtilityError::DateOutOfRange)
}

/// Move a Saturday or Sunday forward to the following Monday.
#[inline]
fn roll_past_weekend(date: NaiveDate) -> UtilityResult<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => add_days(date, 2),
        Weekday::Sun => add_days(date, 1),
        _ => Ok(date),
    }
}

/// Calculate the settlement date for an ACH entry originated on `today`.
///
/// Settlement is the next day, moved to Monday if that lands on a weekend.
/// If the result is a bank holiday it moves one more day and the weekend
/// roll is applied once more. The holiday check is not repeated, so two
/// consecutive holidays settle on the second one.
///
/// # Example
/// ```
/// use ach_utility::calendar::{calc_settlement_date, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let july_4th = NaiveDate::from_ymd_opt(2016, 7, 4).unwrap();
/// let holidays = HolidayCalendar::new().with_holiday(july_4th);
///
/// let friday = NaiveDate::from_ymd_opt(2016, 7, 1).unwrap();
/// let settlement = calc_settlement_date(friday, &holidays)?;
/// assert_eq!(settlement, NaiveDate::from_ymd_opt(2016, 7, 5).unwrap());
/// # Ok::<(), ach_utility::UtilityError>(())
/// ```
///
/// # Errors
/// Returns `DateOutOfRange` if the result would pass `NaiveDate::MAX`.
pub fn calc_settlement_date(
    today: NaiveDate,
    holidays: &HolidayCalendar,
) -> UtilityResult<NaiveDate> {
    let mut settlement = roll_past_weekend(add_days(today, 1)?)?;

    if holidays.contains(settlement) {
        tracing::debug!(holiday = %settlement, "settlement date falls on a bank holiday");
        settlement = roll_past_weekend(add_days(settlement, 1)?)?;
    }

    tracing::trace!(%today, %settlement, "calculated settlement date");
    Ok(settlement)
}

/// Calculate the settlement timestamp for an entry originated at `now`.
///
/// The rule of [`calc_settlement_date`] is applied to the UTC calendar date
/// of `now`; the time-of-day is carried over unchanged.
///
/// # Errors
/// Returns `DateOutOfRange` if the result would pass `NaiveDate::MAX`.
pub fn calc_settlement_timestamp(
    now: DateTime<Utc>,
    holidays: &HolidayCalendar,
) -> UtilityResult<DateTime<Utc>> {
    let settlement = calc_settlement_date(now.date_naive(), holidays)?;
    Ok(settlement.and_time(now.time()).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::COMPACT_DATE_FORMAT;
    use chrono::{TimeZone, Timelike};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn holidays_2016() -> HolidayCalendar {
        HolidayCalendar::parse_dates(["160704", "160904", "161009", "161110"], COMPACT_DATE_FORMAT)
            .unwrap()
    }

    #[test]
    fn test_plain_weekday() {
        let holidays = holidays_2016();
        assert_eq!(
            calc_settlement_date(date(2016, 6, 29), &holidays).unwrap(),
            date(2016, 6, 30)
        );
    }

    #[test]
    fn test_friday_skips_weekend() {
        let holidays = holidays_2016();
        assert_eq!(
            calc_settlement_date(date(2016, 7, 8), &holidays).unwrap(),
            date(2016, 7, 11)
        );
    }

    #[test]
    fn test_weekend_then_holiday() {
        let holidays = holidays_2016();
        assert_eq!(
            calc_settlement_date(date(2016, 7, 1), &holidays).unwrap(),
            date(2016, 7, 5)
        );
    }

    #[test]
    fn test_no_holidays_lands_on_monday() {
        let holidays = HolidayCalendar::new();
        assert_eq!(
            calc_settlement_date(date(2016, 7, 1), &holidays).unwrap(),
            date(2016, 7, 4)
        );
    }

    #[test]
    fn test_friday_holiday_rolls_over_weekend() {
        // 2016-11-11 is a Friday
        let holidays = HolidayCalendar::new().with_holiday(date(2016, 11, 11));
        assert_eq!(
            calc_settlement_date(date(2016, 11, 10), &holidays).unwrap(),
            date(2016, 11, 14)
        );
    }

    #[test]
    fn test_consecutive_holidays_only_skip_one() {
        // Mon 2016-12-26 and Tue 2016-12-27 are both holidays
        let holidays = HolidayCalendar::new()
            .with_holiday(date(2016, 12, 26))
            .with_holiday(date(2016, 12, 27));
        assert_eq!(
            calc_settlement_date(date(2016, 12, 23), &holidays).unwrap(),
            date(2016, 12, 27)
        );
    }

    #[test]
    fn test_date_out_of_range() {
        let holidays = HolidayCalendar::new();
        assert_eq!(
            calc_settlement_date(NaiveDate::MAX, &holidays),
            Err(UtilityError::DateOutOfRange)
        );
    }

    #[test]
    fn test_timestamp_keeps_time_of_day() {
        let holidays = holidays_2016();
        let now = Utc.with_ymd_and_hms(2016, 7, 1, 23, 30, 15).unwrap();

        let settlement = calc_settlement_timestamp(now, &holidays).unwrap();
        assert_eq!(settlement.date_naive(), date(2016, 7, 5));
        assert_eq!(settlement.hour(), 23);
        assert_eq!(settlement.minute(), 30);
        assert_eq!(settlement.second(), 15);
    }

    #[test]
    fn test_timestamp_holiday_lookup_ignores_time() {
        // Late on 07-03 still settles past the 07-04 holiday
        let holidays = holidays_2016();
        let now = Utc.with_ymd_and_hms(2016, 7, 3, 18, 0, 0).unwrap();

        let settlement = calc_settlement_timestamp(now, &holidays).unwrap();
        assert_eq!(settlement.date_naive(), date(2016, 7, 5));
    }
}
