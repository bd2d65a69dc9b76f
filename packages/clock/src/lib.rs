//! Time related functions and types.
//!
//! A countup compares the current time against a fixed start instant on
//! every tick. Controlling where the current time comes from lets the tests
//! freeze it, and lets the application read it in the calendar frame the
//! countup was configured for.
//!
//! Clocks use the type `DurationSinceUnixEpoch` which is a
//! `std::time::Duration` since the Unix Epoch (timestamp). The [`conv`]
//! module turns a timestamp into calendar fields in either frame:
//!
//! ```text
//! Timestamp:      1729158063
//! Universal time: 2024-10-17 09:41:03   (Frame::Utc)
//! Local time:     2024-10-17 10:41:03   (Frame::Local, WEST +0100)
//! ```
//!
//! > **NOTICE**: the timestamp does not depend on the time zone. Only the
//! calendar fields built from it do.

pub mod clock;
pub mod conv;
pub mod static_time;

#[macro_use]
extern crate lazy_static;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;
