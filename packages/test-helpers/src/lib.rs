//! Testing helpers for [Countup](https://docs.rs/countup).
pub mod configuration;
