//! Calendar arithmetic for countups.
//!
//! The main operation is [`decompose`]: given a start [`Instant`] and the
//! current one, it breaks the elapsed time down into months, days, hours,
//! minutes and seconds using real calendar months (28 to 31 days long)
//! instead of fixed-length units.
//!
//! ```text
//! start:    2024-02-29 00:00:00
//! now:      2025-02-28 00:00:00
//! elapsed:  11 months, 30 days, 0 hours, 0 minutes, 0 seconds
//! ```
//!
//! Dividing the elapsed seconds by a 30-day month would drift a little more
//! every month. Instead, each unit is resolved against a boundary date
//! anchored on the start instant, and one unit is borrowed from the count
//! whenever the boundary falls after `now`.
//!
//! > **NOTICE**: both instants must be expressed in the same calendar frame
//! (both UTC or both local). The calendar fields are compared as they are.
//!
//! Months are shifted with rollover: when the start's day of month does not
//! exist in the target month, the extra days spill into the next month, the
//! same way the start instant's own fields are normalized.
pub mod decompose;
pub mod duration;
pub mod instant;
pub mod month;

pub use decompose::decompose;
pub use duration::Duration;
pub use instant::Instant;
pub use month::{add_months, days_in_month, is_leap_year};
