//! A point in time expressed as calendar fields.
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, SubsecRound, TimeDelta, Timelike};

/// An absolute point in time with second precision, expressed as calendar
/// fields in one frame.
///
/// The frame (UTC or local) is not stored. It's up to the caller to always
/// compare instants taken in the same frame.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub struct Instant(NaiveDateTime);

impl Instant {
    /// Builds an instant from raw calendar fields.
    ///
    /// Out-of-range fields are normalized the way a calendar does: month
    /// `13` is January of the next year, day `31` of a 30-day month is the
    /// first day of the next month, hour `24` is midnight of the next day and
    /// day `0` is the last day of the previous month.
    ///
    /// It returns `None` only when the result falls outside the supported
    /// date range.
    #[must_use]
    pub fn from_fields(year: i32, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> Option<Self> {
        let months = i64::from(year).checked_mul(12)?.checked_add(month.checked_sub(1)?)?;

        let year = i32::try_from(months.div_euclid(12)).ok()?;
        let month = u32::try_from(months.rem_euclid(12) + 1).ok()?;

        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;

        let offset = TimeDelta::try_days(day.checked_sub(1)?)?
            .checked_add(&TimeDelta::try_hours(hour)?)?
            .checked_add(&TimeDelta::try_minutes(minute)?)?
            .checked_add(&TimeDelta::try_seconds(second)?)?;

        first_of_month.checked_add_signed(offset).map(Self)
    }

    /// Wraps a naive date-time, dropping the sub-second part.
    #[must_use]
    pub fn from_naive(date_time: NaiveDateTime) -> Self {
        Self(date_time.trunc_subsecs(0))
    }

    #[must_use]
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of the year, starting at `1`.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of the month, starting at `1`.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    #[must_use]
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    #[must_use]
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    #[must_use]
    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub(crate) fn checked_add(self, delta: TimeDelta) -> Option<Self> {
        self.0.checked_add_signed(delta).map(Self)
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(date_time: NaiveDateTime) -> Self {
        Self::from_naive(date_time)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}
