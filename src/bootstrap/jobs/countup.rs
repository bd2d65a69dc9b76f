//! Job that refreshes one countup target on intervals.
//!
//! The target is refreshed once right away, so it never shows up empty, and
//! then every `refresh` milliseconds of the countup configuration.
//!
//! Refer to [`countup-configuration documentation`](https://docs.rs/countup-configuration) for more info about that option.
use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::time::MissedTickBehavior;

use crate::core::handle::Job;
use crate::core::Controller;
use crate::render::Board;
use crate::signals::{shutdown_signal_with_message, Halted};

/// It starts a job refreshing the `board` with the readings of the
/// `controller`.
///
/// The first refresh runs before this function returns.
///
/// # Panics
///
/// Will panic if called outside of a Tokio runtime.
#[must_use]
pub fn start_job(controller: &Arc<Controller>, mut board: Board) -> Job {
    controller.refresh(&mut board);

    let (tx_halt, rx_halt) = oneshot::channel::<Halted>();

    let controller = controller.clone();
    let period = controller.config().refresh_interval();
    let message = format!("Stopping countup job for `{}`..", controller.config().selector);

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval.tick().await;

        let halted = shutdown_signal_with_message(rx_halt, message);
        tokio::pin!(halted);

        loop {
            tokio::select! {
                () = &mut halted => break,
                _ = interval.tick() => controller.refresh(&mut board),
            }
        }
    });

    Job::new(tx_halt, task)
}
