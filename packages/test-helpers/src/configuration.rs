use countup_configuration::{Configuration, Countup, Logging, Options, Threshold};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// This configuration is used for testing. Logging is off and there is a
/// single countup with a random selector, so tests running at the same time
/// do not share targets.
#[must_use]
pub fn ephemeral() -> Configuration {
    Configuration {
        logging: Logging {
            threshold: Threshold::Off, // Change to `debug` for tests debugging
            ..Default::default()
        },
        countups: vec![ephemeral_countup(Options::default())],
    }
}

/// A countup with a random selector and the given overrides.
#[must_use]
pub fn ephemeral_countup(options: Options) -> Countup {
    let suffix: String = thread_rng().sample_iter(&Alphanumeric).take(16).map(char::from).collect();

    Countup::with_options(&format!("countup-{suffix}"), options)
}

/// Options counting from the given calendar fields in the local frame.
///
/// Both sides of the comparison stay local, so a stopped clock set with
/// `Frame::Local` to the same fields gives a zero countup whatever the time
/// zone of the machine running the tests.
#[must_use]
pub fn counting_from_local(year: i32, month: i64, day: i64, hours: i64, minutes: i64, seconds: i64) -> Options {
    Options {
        start_year: Some(year),
        start_month: Some(month),
        start_day: Some(day),
        start_hours: Some(hours),
        start_minutes: Some(minutes),
        start_seconds: Some(seconds),
        enable_utc: Some(false),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use countup_configuration::{Options, Threshold};

    use super::{counting_from_local, ephemeral, ephemeral_countup};

    #[test]
    fn the_ephemeral_configuration_should_not_log() {
        assert_eq!(ephemeral().logging.threshold, Threshold::Off);
    }

    #[test]
    fn ephemeral_countups_should_not_share_selectors() {
        assert_ne!(
            ephemeral_countup(Options::default()).selector,
            ephemeral_countup(Options::default()).selector
        );
    }

    #[test]
    fn it_should_count_from_local_calendar_fields() {
        let countup = ephemeral_countup(counting_from_local(2024, 2, 29, 1, 2, 3));

        assert!(!countup.enable_utc);
        assert_eq!(countup.start.day, 29);
        assert_eq!(countup.start.seconds, 3);
    }
}
