//! The result of a decomposition.
use std::fmt;

use chrono::TimeDelta;
use countup_primitives::Unit;

use crate::{add_months, Instant};

/// Elapsed time broken down into calendar units.
///
/// Adding `months`, `days`, `hours`, `minutes` and `seconds` to the start
/// instant, in that order, gives back the instant it was computed for. See
/// [`Duration::reconstruct`].
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Hash)]
pub struct Duration {
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Duration {
    pub const ZERO: Self = Self {
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// The count for one unit.
    #[must_use]
    pub fn amount(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Months => self.months,
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
        }
    }

    /// Adds the duration to `start`, one unit at a time from months down to
    /// seconds. Months are added with [`add_months`].
    ///
    /// It returns `None` if the result falls outside the supported date range.
    #[must_use]
    pub fn reconstruct(&self, start: Instant) -> Option<Instant> {
        let after_months = add_months(start, i64::try_from(self.months).ok()?)?;

        let rest = TimeDelta::try_days(i64::try_from(self.days).ok()?)?
            .checked_add(&TimeDelta::try_hours(i64::try_from(self.hours).ok()?)?)?
            .checked_add(&TimeDelta::try_minutes(i64::try_from(self.minutes).ok()?)?)?
            .checked_add(&TimeDelta::try_seconds(i64::try_from(self.seconds).ok()?)?)?;

        after_months.checked_add(rest)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}mo {}d {}h {}m {}s",
            self.months, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use countup_primitives::Unit;

    use crate::{Duration, Instant};

    fn sample_duration() -> Duration {
        Duration {
            months: 1,
            days: 2,
            hours: 3,
            minutes: 4,
            seconds: 5,
        }
    }

    #[test]
    fn the_default_duration_should_be_zero() {
        assert!(Duration::default().is_zero());
        assert!(!sample_duration().is_zero());
    }

    #[test]
    fn it_should_return_the_amount_for_each_unit() {
        let amounts: Vec<u64> = Unit::ALL.iter().map(|unit| sample_duration().amount(*unit)).collect();

        assert_eq!(amounts, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn it_should_add_the_units_to_the_start_instant_in_order() {
        let start = Instant::from_fields(2024, 1, 31, 22, 58, 57).unwrap();

        // One month on Jan 31st rolls over to Mar 2nd in a leap year.
        let expected = Instant::from_fields(2024, 3, 5, 2, 3, 2).unwrap();

        assert_eq!(sample_duration().reconstruct(start), Some(expected));
    }

    #[test]
    fn it_should_be_displayed_with_unit_suffixes() {
        assert_eq!(sample_duration().to_string(), "1mo 2d 3h 4m 5s");
    }
}
