//! Setup for the main countup application.
//!
//! The [`setup`] only builds the application and its dependencies but it
//! does not start the application. In fact, there is no such thing as the
//! main application process. When the application starts, the only thing it
//! does is starting a bunch of independent jobs. If you are looking for how
//! things are called when new countups are started, you should read
//! [`app::start`](crate::app::start) instead.
use std::sync::Arc;

use countup_clock::static_time;
use countup_configuration::{Configuration, Error};

use super::config::{initialize_configuration, Args};
use crate::bootstrap;

/// It loads the configuration and initializes the application dependencies.
///
/// # Errors
///
/// Will return `Err` if the configuration cannot be loaded.
pub fn setup(args: &Args) -> Result<Arc<Configuration>, Error> {
    let configuration = Arc::new(initialize_configuration(args)?);

    initialize_with_configuration(&configuration);

    Ok(configuration)
}

/// It initializes the application with the given configuration.
pub fn initialize_with_configuration(configuration: &Arc<Configuration>) {
    initialize_static();
    initialize_logging(configuration);
}

/// It initializes the application static values.
pub fn initialize_static() {
    // Set the time of the countup app starting
    lazy_static::initialize(&static_time::TIME_AT_APP_START);
}

/// It initializes the logging with the configuration threshold and style.
pub fn initialize_logging(configuration: &Arc<Configuration>) {
    bootstrap::logging::setup(&configuration.logging);
}
