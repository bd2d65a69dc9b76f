use chrono::DateTime;
use countup_calendar::{decompose, Duration, Instant};
use countup_primitives::Unit;
use proptest::prelude::*;

/// 1970-01-01 to 2100-01-01, in seconds.
const SPAN: std::ops::Range<i64> = 0..4_102_444_800;

fn instant_from_timestamp(timestamp: i64) -> Instant {
    Instant::from_naive(DateTime::from_timestamp(timestamp, 0).unwrap().naive_utc())
}

proptest! {
    #[test]
    fn every_component_should_be_within_its_calendar_range(start in SPAN, offset in 0..400_000_000i64) {
        let start = instant_from_timestamp(start);
        let now = instant_from_timestamp(start.as_naive().and_utc().timestamp() + offset);

        let elapsed = decompose(start, now);

        prop_assert!(elapsed.days <= 30);
        prop_assert!(elapsed.hours < 24);
        prop_assert!(elapsed.minutes < 60);
        prop_assert!(elapsed.seconds < 60);
    }

    #[test]
    fn a_backwards_span_should_always_be_zero(start in SPAN, offset in 1..400_000_000i64) {
        let start = instant_from_timestamp(start);
        let now = instant_from_timestamp(start.as_naive().and_utc().timestamp() - offset);

        prop_assert_eq!(decompose(start, now), Duration::ZERO);
    }

    #[test]
    fn adding_the_result_to_the_start_should_give_back_now(start in SPAN, offset in 0..400_000_000i64) {
        let start = instant_from_timestamp(start);
        let now = instant_from_timestamp(start.as_naive().and_utc().timestamp() + offset);

        let elapsed = decompose(start, now);

        prop_assert_eq!(elapsed.reconstruct(start), Some(now));
    }

    #[test]
    fn one_more_second_should_never_decrease_the_month_count(start in SPAN, offset in 0..400_000_000i64) {
        let start = instant_from_timestamp(start);
        let now = start.as_naive().and_utc().timestamp() + offset;

        let before = decompose(start, instant_from_timestamp(now));
        let after = decompose(start, instant_from_timestamp(now + 1));

        prop_assert!(after.amount(Unit::Months) >= before.amount(Unit::Months));
    }
}

#[test]
fn a_leap_day_start_should_reach_eleven_months_and_thirty_days_one_year_later() {
    let start = Instant::from_fields(2024, 2, 29, 0, 0, 0).unwrap();
    let now = Instant::from_fields(2025, 2, 28, 0, 0, 0).unwrap();

    let elapsed = decompose(start, now);

    assert_eq!((elapsed.months, elapsed.days), (11, 30));
}
