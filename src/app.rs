//! Countup application.
//!
//! The application has a global configuration with any number of countups.
//! It's basically a container for the countup jobs.
//!
//! The application is responsible for:
//!
//! - Building the controller of every configured countup.
//! - Finding the display targets of every countup in the host.
//! - Starting one job per target.
//!
//! The same entry points are used by programs embedding countups:
//! [`start_countup`] starts a single countup given its selector and the
//! options overriding the defaults.
use std::sync::Arc;

use countup_configuration::validator::Validator as _;
use countup_configuration::{Configuration, Countup, Options};
use tracing::{info, warn};

use crate::bootstrap::jobs;
use crate::core::handle::Handle;
use crate::core::Controller;
use crate::render::Host;

/// Starts every configured countup in the `host`.
///
/// # Panics
///
/// Will panic if called outside of a Tokio runtime.
#[must_use]
pub fn start<H: Host>(config: &Configuration, host: &Arc<H>) -> Vec<Handle> {
    config
        .countups
        .iter()
        .map(|countup| start_configured(countup.clone(), host))
        .collect()
}

/// Starts a countup in every target of the `host` matched by `selector`.
///
/// `options` are merged onto the default countup configuration. Targets
/// not found are not an error: the returned handle is empty. Options that
/// do not make sense, like a zero refresh interval, also start nothing.
///
/// # Panics
///
/// Will panic if called outside of a Tokio runtime.
#[must_use]
pub fn start_countup<H: Host>(host: &Arc<H>, selector: &str, options: Options) -> Handle {
    start_configured(Countup::with_options(selector, options), host)
}

fn start_configured<H: Host>(countup: Countup, host: &Arc<H>) -> Handle {
    if let Err(err) = countup.validate() {
        warn!("Could not start the countup `{}`: {err}", countup.selector);
        return Handle::default();
    }

    let Some(controller) = Controller::new(Arc::new(countup.clone())) else {
        warn!(
            "Could not start the countup `{}`: its start {:?} is outside the supported date range",
            countup.selector, countup.start
        );
        return Handle::default();
    };

    let controller = Arc::new(controller);

    let targets = host.select(&countup.selector);

    if targets.is_empty() {
        warn!("No targets found for the countup `{}`", countup.selector);
    }

    let started = targets
        .iter()
        .map(|target| {
            let board = host.mount(target, countup.layout(), &countup.classes);

            info!(
                "Starting countup `{}` in {target}: {} layout, {} frame, every {}ms",
                countup.selector,
                board.layout(),
                controller.frame(),
                countup.refresh
            );

            jobs::countup::start_job(&controller, board)
        })
        .collect();

    Handle::new(started)
}
