//! Countup application bootstrapping.
//!
//! This module includes all the functions to build the application, its dependencies, and run the jobs.
//!
//! Jobs are tasks executed concurrently. Every configured countup starts one job per display target its
//! selector matches, and every job refreshes its target on its own interval.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;
