//! **Countup** is a live-updating "time since" counter.
//!
//! Given a start instant, it shows how much time has elapsed since then,
//! broken down into months, days, hours, minutes and seconds, and keeps the
//! display up to date on a refresh interval.
//!
//! ```text
//! 5 months, 10 days, 9 hours, 41 minutes, 3 seconds.
//! ```
//!
//! # Table of contents
//!
//! - [Calendar arithmetic](#calendar-arithmetic)
//! - [Displays](#displays)
//! - [Usage](#usage)
//! - [Configuration](#configuration)
//! - [Components](#components)
//!
//! # Calendar arithmetic
//!
//! Months are not a fixed amount of seconds. The elapsed time is computed by
//! borrowing: the number of whole months that fit between the start and now
//! is counted first, by adding months to the start date, then whole days,
//! hours and minutes from what is left, and the remaining seconds last.
//!
//! ```text
//! 2024-02-29 00:00:00 -> 2025-02-28 00:00:00   11 months, 30 days
//! 2024-01-31 00:00:00 -> 2024-03-31 00:00:00    2 months,  0 days
//! ```
//!
//! A start in the future shows all zeros. Refer to the
//! [`countup-calendar`](https://docs.rs/countup-calendar) package for the
//! details.
//!
//! # Displays
//!
//! Countups are rendered by a [`Host`](crate::render::Host): it finds the
//! targets matching a selector and mounts a board in every one of them.
//! Boards are either a single inline sentence or five sections, one per
//! unit, with an amount and a word each.
//!
//! Every target is refreshed by its own job, right away and then on every
//! interval, until the countup [`Handle`](crate::core::handle::Handle) is
//! stopped or the process is shut down.
//!
//! # Usage
//!
//! Run the console application with the default configuration:
//!
//! ```text
//! cargo run
//! ```
//!
//! Or start countups from your own program:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use countup::app::start_countup;
//! use countup::render::terminal::{Console, Stdout};
//! use countup_configuration::Options;
//!
//! #[tokio::main]
//! async fn main() {
//!     let host = Arc::new(Console::new(Arc::new(Stdout)));
//!
//!     let options = Options {
//!         start_year: Some(2024),
//!         start_month: Some(2),
//!         start_day: Some(29),
//!         zero_pad: Some(true),
//!         ..Options::default()
//!     };
//!
//!     let handle = start_countup(&host, "since-leap-day", options);
//!
//!     tokio::signal::ctrl_c().await.unwrap();
//!
//!     handle.stop().await;
//! }
//! ```
//!
//! # Configuration
//!
//! The console application reads a TOML file, `./share/default/config/countup.toml`
//! by default. Print the defaults with:
//!
//! ```text
//! cargo run -- --print-default-config
//! ```
//!
//! Refer to the [`countup-configuration`](https://docs.rs/countup-configuration)
//! package for all the options and the environment variables.
//!
//! # Components
//!
//! - [`app`]: starts the configured countups.
//! - [`bootstrap`]: configuration, logging and the countup jobs.
//! - [`core`]: the countup controller and the readings it shows.
//! - [`render`]: the hosts and the boards the readings are written into.
//! - [`signals`]: halt and shutdown signals for the jobs.
pub mod app;
pub mod bootstrap;
pub mod core;
pub mod render;
#[cfg(feature = "selection")]
pub mod selection;
pub mod signals;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = countup_clock::clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = countup_clock::clock::Stopped;
