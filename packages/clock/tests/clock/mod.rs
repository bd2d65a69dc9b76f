use std::time::Duration;

use countup_calendar::Instant;
use countup_clock::clock::stopped::Stopped as _;
use countup_clock::clock::{Stopped, Time};
use countup_primitives::Frame;

use crate::CurrentClock;

#[test]
fn it_should_use_stopped_time_for_testing() {
    assert_eq!(CurrentClock::dbg_clock_type(), "Stopped".to_owned());

    let time = CurrentClock::now();
    std::thread::sleep(Duration::from_millis(50));
    let time_2 = CurrentClock::now();

    assert_eq!(time, time_2);
}

#[test]
fn a_stopped_clock_should_move_forward_only_when_told_to() {
    let start = Instant::from_fields(2024, 2, 28, 23, 59, 59).unwrap();
    Stopped::local_set_to_instant(&start, Frame::Utc).unwrap();

    Stopped::local_add(&Duration::from_secs(1)).unwrap();

    assert_eq!(
        Stopped::now_in(Frame::Utc),
        Instant::from_fields(2024, 2, 29, 0, 0, 0).unwrap()
    );
}
