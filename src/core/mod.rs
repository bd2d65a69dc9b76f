//! The countup domain layer.
//!
//! A [`Controller`] owns the immutable state of one configured countup: its
//! configuration and its start instant, already expressed in the frame the
//! current time is read in. On every refresh it:
//!
//! 1. Reads the current time from the clock, in the countup frame.
//! 2. Breaks the time elapsed since the start down into calendar units with
//!    [`countup_calendar::decompose`].
//! 3. Builds a [`Reading`](reading::Reading) with the words and padding of
//!    the configuration.
//! 4. Shows the reading on a [`Board`].
//!
//! The controller is shared read-only by all the jobs updating the targets
//! of the same countup.
//!
//! # Frames
//!
//! The start fields are configured as local calendar fields. When
//! `enable_utc` is set they are converted once to the UTC fields of the same
//! moment and the current time is read in UTC. Otherwise both sides stay in
//! local fields. Start and now never mix frames.
pub mod handle;
pub mod reading;

use std::sync::Arc;

use countup_calendar::{decompose, Duration, Instant};
use countup_clock::clock::Time;
use countup_clock::conv::convert_from_local_instant_to_utc;
use countup_configuration::{Countup, Start};
use countup_primitives::Frame;
use tracing::trace;

use self::reading::Reading;
use crate::render::Board;
use crate::CurrentClock;

pub struct Controller {
    config: Arc<Countup>,
    start: Instant,
    frame: Frame,
}

impl Controller {
    /// It returns `None` when the start fields fall outside the supported
    /// date range.
    #[must_use]
    pub fn new(config: Arc<Countup>) -> Option<Self> {
        let Start {
            year,
            month,
            day,
            hours,
            minutes,
            seconds,
        } = config.start;

        let configured = Instant::from_fields(year, month, day, hours, minutes, seconds)?;

        let frame = config.frame();

        let start = match frame {
            Frame::Utc => convert_from_local_instant_to_utc(configured),
            Frame::Local => configured,
        };

        Some(Self { config, start, frame })
    }

    #[must_use]
    pub fn config(&self) -> &Arc<Countup> {
        &self.config
    }

    /// The start instant, in the countup frame.
    #[must_use]
    pub fn start(&self) -> Instant {
        self.start
    }

    #[must_use]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// The time elapsed from the start until `now`. `now` must be in the
    /// countup frame.
    #[must_use]
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        decompose(self.start, now)
    }

    /// The time elapsed from the start until the current time.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(CurrentClock::now_in(self.frame))
    }

    #[must_use]
    pub fn reading(&self) -> Reading {
        Reading::new(self.elapsed(), &self.config)
    }

    /// Shows the current reading on the board.
    pub fn refresh(&self, board: &mut Board) {
        let reading = self.reading();

        trace!(selector = %self.config.selector, elapsed = %reading.elapsed(), "refresh");

        board.show(&reading);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use countup_calendar::Instant;
    use countup_clock::clock::stopped::Stopped as _;
    use countup_clock::conv::convert_from_local_instant_to_utc;
    use countup_configuration::{Countup, Options};
    use countup_primitives::Frame;
    use countup_test_helpers::configuration::counting_from_local;

    use crate::core::Controller;
    use crate::CurrentClock;

    fn controller(options: Options) -> Controller {
        Controller::new(Arc::new(Countup::with_options("uptime", options))).expect("the start should be in range")
    }

    fn instant(year: i32, month: i64, day: i64, hours: i64, minutes: i64, seconds: i64) -> Instant {
        Instant::from_fields(year, month, day, hours, minutes, seconds).expect("the instant should be in range")
    }

    #[test]
    fn it_should_keep_the_local_start_fields_in_the_local_frame() {
        let controller = controller(counting_from_local(2024, 5, 7, 8, 30, 0));

        assert_eq!(controller.frame(), Frame::Local);
        assert_eq!(controller.start(), instant(2024, 5, 7, 8, 30, 0));
    }

    #[test]
    fn it_should_convert_the_start_fields_to_utc_in_the_utc_frame() {
        let controller = controller(Options::default());

        assert_eq!(controller.frame(), Frame::Utc);
        assert_eq!(
            controller.start(),
            convert_from_local_instant_to_utc(instant(2024, 5, 7, 0, 0, 0))
        );
    }

    #[test]
    fn it_should_normalize_out_of_range_start_fields() {
        let controller = controller(counting_from_local(2024, 2, 30, 0, 0, 0));

        assert_eq!(controller.start(), instant(2024, 3, 1, 0, 0, 0));
    }

    #[test]
    fn it_should_not_be_built_for_a_start_outside_the_supported_range() {
        let options = Options {
            start_year: Some(i32::MAX),
            ..counting_from_local(2024, 5, 7, 0, 0, 0)
        };

        assert!(Controller::new(Arc::new(Countup::with_options("uptime", options))).is_none());
    }

    #[test]
    fn it_should_count_up_from_the_start_to_the_current_time() {
        let controller = controller(counting_from_local(2024, 5, 7, 0, 0, 0));

        CurrentClock::local_set_to_instant(&controller.start(), Frame::Local).unwrap();
        CurrentClock::local_add(&Duration::from_secs(86_400 + 3_600 + 60 + 1)).unwrap();

        let elapsed = controller.elapsed();

        assert_eq!(
            (elapsed.months, elapsed.days, elapsed.hours, elapsed.minutes, elapsed.seconds),
            (0, 1, 1, 1, 1)
        );
    }

    #[test]
    fn it_should_show_all_zeros_before_the_start() {
        let controller = controller(counting_from_local(2024, 5, 7, 0, 0, 0));

        CurrentClock::local_set_to_instant(&controller.start(), Frame::Local).unwrap();
        CurrentClock::local_sub(&Duration::from_secs(3_600)).unwrap();

        assert!(controller.elapsed().is_zero());
    }

    #[test]
    fn it_should_decompose_across_a_leap_day() {
        let controller = controller(counting_from_local(2024, 2, 29, 0, 0, 0));

        let elapsed = controller.elapsed_at(instant(2025, 2, 28, 0, 0, 0));

        assert_eq!((elapsed.months, elapsed.days), (11, 30));
    }

    #[test]
    fn it_should_build_a_reading_with_the_configured_words() {
        let controller = controller(Options {
            plural: Some(false),
            ..counting_from_local(2024, 5, 7, 0, 0, 0)
        });

        CurrentClock::local_set_to_instant(&controller.start(), Frame::Local).unwrap();
        CurrentClock::local_add(&Duration::from_secs(2 * 86_400)).unwrap();

        assert_eq!(
            controller.reading().sentence(),
            "0 month, 2 day, 0 hour, 0 minute, 0 second."
        );
    }
}
