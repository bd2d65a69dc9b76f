use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use countup_calendar::Instant;
use countup_primitives::{DurationSinceUnixEpoch, Frame};

/// It converts a timestamp to a `DateTime::<Utc>`.
/// For example, the timestamp of 0: `DurationSinceUnixEpoch::ZERO` will be
/// converted to the `DateTime::<Utc>` of the Unix Epoch.
///
/// Timestamps beyond the supported date range saturate to the latest
/// representable `DateTime::<Utc>`.
#[must_use]
pub fn convert_from_timestamp_to_datetime_utc(duration: DurationSinceUnixEpoch) -> DateTime<Utc> {
    i64::try_from(duration.as_secs())
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// It converts a `DateTime::<Utc>` to a timestamp.
/// For example, the `DateTime::<Utc>` of the Unix Epoch will be converted to a
/// timestamp of 0: `DurationSinceUnixEpoch::ZERO`.
///
/// It returns `None` for date-times before the Unix Epoch.
#[must_use]
pub fn convert_from_datetime_utc_to_timestamp(datetime_utc: &DateTime<Utc>) -> Option<DurationSinceUnixEpoch> {
    u64::try_from(datetime_utc.timestamp())
        .ok()
        .map(DurationSinceUnixEpoch::from_secs)
}

/// It converts a timestamp to calendar fields in the given frame, with
/// second precision.
#[must_use]
pub fn convert_from_timestamp_to_instant(duration: DurationSinceUnixEpoch, frame: Frame) -> Instant {
    let datetime_utc = convert_from_timestamp_to_datetime_utc(duration);

    match frame {
        Frame::Utc => Instant::from_naive(datetime_utc.naive_utc()),
        Frame::Local => Instant::from_naive(datetime_utc.with_timezone(&Local).naive_local()),
    }
}

/// It converts calendar fields in the given frame back to a timestamp.
///
/// It returns `None` for instants before the Unix Epoch and for local
/// instants that never happened in the system time zone.
#[must_use]
pub fn convert_from_instant_to_timestamp(instant: Instant, frame: Frame) -> Option<DurationSinceUnixEpoch> {
    let datetime_utc = match frame {
        Frame::Utc => instant.as_naive().and_utc(),
        Frame::Local => Local.from_local_datetime(&instant.as_naive()).earliest()?.with_timezone(&Utc),
    };

    convert_from_datetime_utc_to_timestamp(&datetime_utc)
}

/// It converts local calendar fields to the UTC calendar fields of the same
/// moment.
///
/// Ambiguous local times (clocks going back) resolve to the earliest moment.
/// Local times skipped by the time zone (clocks going forward) are moved one
/// hour later. If that still fails the fields are kept as they are.
#[must_use]
pub fn convert_from_local_instant_to_utc(instant: Instant) -> Instant {
    let naive = instant.as_naive();

    let moment = Local.from_local_datetime(&naive).earliest().or_else(|| {
        naive
            .checked_add_signed(TimeDelta::try_hours(1)?)
            .and_then(|later| Local.from_local_datetime(&later).earliest())
    });

    match moment {
        Some(moment) => Instant::from_naive(moment.naive_utc()),
        None => instant,
    }
}
