//! Application jobs launchers.
//!
//! The main application setup has only two main stages:
//!
//! 1. Setup the domain layer: one controller per configured countup.
//! 2. Launch one job per display target matched by the countup selector.
//!
//! This modules contains all the functions needed to start those jobs.
pub mod countup;
