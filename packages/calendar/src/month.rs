//! Month lengths and month shifting.
use chrono::{Datelike, Days, NaiveDate};

use crate::Instant;

#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month (`1` to `12`) of the given year.
///
/// # Panics
///
/// Will panic if `month` is not in the range `1..=12`.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("month out of range: {month}"),
    }
}

/// Shifts an instant by a whole number of months, keeping its day of month
/// and time of day.
///
/// If the day of month does not exist in the target month, the missing days
/// roll over into the following month:
///
/// ```rust
/// use countup_calendar::{add_months, Instant};
///
/// let start = Instant::from_fields(2024, 1, 31, 0, 0, 0).unwrap();
///
/// assert_eq!(add_months(start, 1), Instant::from_fields(2024, 3, 2, 0, 0, 0));
/// assert_eq!(add_months(start, 2), Instant::from_fields(2024, 3, 31, 0, 0, 0));
/// ```
///
/// It returns `None` only when the result falls outside the supported date
/// range.
#[must_use]
pub fn add_months(instant: Instant, months: i64) -> Option<Instant> {
    let at = instant.as_naive();

    let total = (i64::from(at.year()) * 12 + i64::from(at.month0())).checked_add(months)?;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12) + 1).ok()?;

    let length = days_in_month(year, month);
    let anchor = at.day();

    let date = if anchor <= length {
        NaiveDate::from_ymd_opt(year, month, anchor)?
    } else {
        NaiveDate::from_ymd_opt(year, month, length)?.checked_add_days(Days::new(u64::from(anchor - length)))?
    };

    Some(Instant::from_naive(date.and_time(at.time())))
}

#[cfg(test)]
mod tests {
    use crate::{add_months, days_in_month, is_leap_year, Instant};

    fn instant(year: i32, month: i64, day: i64) -> Instant {
        Instant::from_fields(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn leap_years_should_follow_the_gregorian_rules() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn february_should_have_twenty_nine_days_in_leap_years_only() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn it_should_keep_the_day_of_month_when_it_exists_in_the_target_month() {
        assert_eq!(add_months(instant(2024, 5, 7), 3), Some(instant(2024, 8, 7)));
    }

    #[test]
    fn it_should_cross_year_boundaries_in_both_directions() {
        assert_eq!(add_months(instant(2024, 11, 15), 3), Some(instant(2025, 2, 15)));
        assert_eq!(add_months(instant(2024, 2, 15), -3), Some(instant(2023, 11, 15)));
    }

    #[test]
    fn it_should_roll_a_missing_leap_day_over_into_march() {
        assert_eq!(add_months(instant(2024, 2, 29), 12), Some(instant(2025, 3, 1)));
    }

    #[test]
    fn it_should_keep_the_time_of_day() {
        let start = Instant::from_fields(2024, 1, 10, 15, 30, 5).unwrap();

        assert_eq!(add_months(start, 1), Instant::from_fields(2024, 2, 10, 15, 30, 5));
    }
}
