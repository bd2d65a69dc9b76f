//! Primitive types for [Countup](https://docs.rs/countup).
//!
//! These structures are used not only by the countup application crate, but
//! also by the calendar, clock and configuration packages.
use std::time::Duration;

use derive_more::Display;
use serde::{Deserialize, Serialize};

pub mod unit;

pub use unit::Unit;

/// Duration since the Unix Epoch.
pub type DurationSinceUnixEpoch = Duration;

/// The calendar frame in which an instant's fields are expressed.
///
/// The start and the current instant of a countup must always share the
/// same frame.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Hash, Display)]
#[serde(rename_all = "lowercase")]
pub enum Frame {
    /// Coordinated Universal Time calendar fields.
    #[display("utc")]
    Utc,
    /// Calendar fields of the system time zone.
    #[display("local")]
    Local,
}

impl Frame {
    #[must_use]
    pub fn from_utc_flag(enable_utc: bool) -> Self {
        if enable_utc {
            Self::Utc
        } else {
            Self::Local
        }
    }
}

/// How a countup is presented in its target.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Hash, Display)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// A single line of text: `1 month, 2 days, 3 hours, 4 minutes, 5 seconds.`
    #[display("inline")]
    Inline,
    /// One section per unit, each with an amount and a word.
    #[display("sectioned")]
    Sectioned,
}

impl Layout {
    #[must_use]
    pub fn from_inline_flag(inline: bool) -> Self {
        if inline {
            Self::Inline
        } else {
            Self::Sectioned
        }
    }
}
