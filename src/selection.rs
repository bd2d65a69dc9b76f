//! Binding for selection style call sites.
//!
//! Programs that already work with a selection of targets (a host plus a
//! selector) can start a countup on it directly:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use countup::render::memory::Recorder;
//! use countup::selection::{select, SimplyCountup as _};
//! use countup_configuration::Options;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let host = Arc::new(Recorder::new(&["uptime"]));
//!
//! let handle = select(&host, "uptime").simply_countup(Options::default());
//!
//! handle.stop().await;
//! # }
//! ```
//!
//! It's only available with the `selection` feature, enabled by default.
use std::sync::Arc;

use countup_configuration::Options;

use crate::app;
use crate::core::handle::Handle;
use crate::render::{Host, Target};

/// A host and a selector for some of its targets.
pub struct Selection<H: Host> {
    host: Arc<H>,
    selector: String,
}

#[must_use]
pub fn select<H: Host>(host: &Arc<H>, selector: &str) -> Selection<H> {
    Selection {
        host: host.clone(),
        selector: selector.to_owned(),
    }
}

impl<H: Host> Selection<H> {
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The targets currently matched by the selector.
    #[must_use]
    pub fn targets(&self) -> Vec<Target> {
        self.host.select(&self.selector)
    }
}

pub trait SimplyCountup {
    /// Starts a countup in the selected targets.
    ///
    /// Same as [`app::start_countup`] with the host and the selector of the
    /// selection.
    fn simply_countup(&self, options: Options) -> Handle;
}

impl<H: Host> SimplyCountup for Selection<H> {
    fn simply_countup(&self, options: Options) -> Handle {
        app::start_countup(&self.host, &self.selector, options)
    }
}
