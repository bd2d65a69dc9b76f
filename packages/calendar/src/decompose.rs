//! Calendar-aware decomposition of elapsed time.
//!
//! Every unit is resolved in turn, from months down to seconds. For each
//! unit a candidate boundary is built by moving the previous boundary
//! forward by the raw unit count. The finer fields of the candidate still
//! come from the start instant (they are the anchor). If the candidate ends
//! up after `now`, the last unit has not been completed yet and it's
//! borrowed back.
use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};
use countup_primitives::Unit;

use crate::{add_months, Duration, Instant};

/// Breaks the time elapsed between `start` and `now` down into months, days,
/// hours, minutes and seconds.
///
/// It returns [`Duration::ZERO`] when `now` is not after `start`. A countup
/// never goes negative.
///
/// ```rust
/// use countup_calendar::{decompose, Instant};
///
/// let start = Instant::from_fields(2024, 1, 31, 0, 0, 0).unwrap();
/// let now = Instant::from_fields(2024, 3, 31, 0, 0, 0).unwrap();
///
/// let elapsed = decompose(start, now);
///
/// assert_eq!((elapsed.months, elapsed.days), (2, 0));
/// ```
#[must_use]
pub fn decompose(start: Instant, now: Instant) -> Duration {
    if now <= start {
        return Duration::ZERO;
    }

    // Only instants close to the ends of the supported range can fail here.
    breakdown(start, now).unwrap_or_default()
}

fn breakdown(start: Instant, now: Instant) -> Option<Duration> {
    let (months, boundary) = whole_months(start, now)?;
    let (days, boundary) = whole_units(Unit::Days, boundary, now)?;
    let (hours, boundary) = whole_units(Unit::Hours, boundary, now)?;
    let (minutes, boundary) = whole_units(Unit::Minutes, boundary, now)?;

    let seconds = (now.as_naive() - boundary.as_naive()).num_seconds();

    Some(Duration {
        months: u64::try_from(months).ok()?,
        days: u64::try_from(days).ok()?,
        hours: u64::try_from(hours).ok()?,
        minutes: u64::try_from(minutes).ok()?,
        seconds: u64::try_from(seconds).ok()?,
    })
}

/// Number of whole months elapsed and the boundary instant reached after
/// adding them to `start`.
///
/// One borrow is enough unless the previous month is too short for the
/// anchor day. The rolled over boundary can then still be after `now` and
/// a second month is borrowed.
fn whole_months(start: Instant, now: Instant) -> Option<(i64, Instant)> {
    let mut months = (i64::from(now.year()) - i64::from(start.year())) * 12 + i64::from(now.month())
        - i64::from(start.month());

    let mut boundary = add_months(start, months)?;

    while boundary > now {
        months -= 1;
        boundary = add_months(start, months)?;
    }

    Some((months, boundary))
}

/// Number of whole `unit`s between `boundary` and `now`, and the new
/// boundary.
///
/// `boundary` must not be after `now`.
fn whole_units(unit: Unit, boundary: Instant, now: Instant) -> Option<(i64, Instant)> {
    let length = unit_length(unit)?;

    let mut count = position(unit, now.as_naive()) - position(unit, boundary.as_naive());
    let mut candidate = boundary.checked_add(length.checked_mul(i32::try_from(count).ok()?)?)?;

    if candidate > now {
        count -= 1;
        candidate = candidate.checked_add(-length)?;
    }

    Some((count, candidate))
}

/// Index of the `unit` the date-time falls in, counted from a fixed origin.
/// Finer fields are ignored.
fn position(unit: Unit, at: NaiveDateTime) -> i64 {
    let days = i64::from(at.date().num_days_from_ce());

    match unit {
        Unit::Days => days,
        Unit::Hours => days * 24 + i64::from(at.hour()),
        Unit::Minutes => (days * 24 + i64::from(at.hour())) * 60 + i64::from(at.minute()),
        Unit::Months | Unit::Seconds => unreachable!("{unit} are not resolved by position"),
    }
}

fn unit_length(unit: Unit) -> Option<TimeDelta> {
    match unit {
        Unit::Days => TimeDelta::try_days(1),
        Unit::Hours => TimeDelta::try_hours(1),
        Unit::Minutes => TimeDelta::try_minutes(1),
        Unit::Months | Unit::Seconds => None,
    }
}
