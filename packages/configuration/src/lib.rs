//! Configuration data structures for [Countup](https://docs.rs/countup).
//!
//! The current version for configuration is [`v1`].
pub mod v1;
pub mod validator;

use std::env;
use std::panic::Location;
use std::sync::Arc;

use thiserror::Error;

/// Default configuration file location.
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/countup.toml";

/// Prefix for the environment variables that override single options.
pub const CONFIG_OVERRIDE_PREFIX: &str = "COUNTUP_CONFIG_OVERRIDE_";

/// Separator for nested options in override environment variables, for
/// example `COUNTUP_CONFIG_OVERRIDE_LOGGING__THRESHOLD=debug`.
pub const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

// Environment variables

/// The whole `countup.toml` file content. It has priority over the config file.
/// Even if the file is not on the default path.
pub const ENV_VAR_CONFIG_TOML: &str = "COUNTUP_CONFIG_TOML";

/// The `countup.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "COUNTUP_CONFIG_TOML_PATH";

pub type Configuration = v1::Configuration;
pub type Countup = v1::countup::Countup;
pub type Start = v1::countup::Start;
pub type Words = v1::countup::Words;
pub type Classes = v1::countup::Classes;
pub type Options = v1::countup::Options;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;
pub type TraceStyle = v1::logging::TraceStyle;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info
    ///
    /// The whole TOML content in `COUNTUP_CONFIG_TOML` wins over any file.
    /// Otherwise the file at `COUNTUP_CONFIG_TOML_PATH` is used, or the given
    /// default path.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to obtain a configuration.
    ///
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Result<Self, Error> {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading configuration from environment variable:\n {config_toml}");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Ok(Self {
            config_toml,
            config_toml_path,
        })
    }

    /// Configuration info for a TOML document given directly.
    #[must_use]
    pub fn from_toml(config_toml: &str) -> Self {
        Self {
            config_toml: Some(config_toml.to_owned()),
            config_toml_path: DEFAULT_PATH_CONFIG.to_owned(),
        }
    }

    /// Configuration info for a TOML file.
    #[must_use]
    pub fn from_path(config_toml_path: &str) -> Self {
        Self {
            config_toml: None,
            config_toml_path: config_toml_path.to_owned(),
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Unable to load the configuration from the configuration file or the
    /// `COUNTUP_CONFIG_TOML` environment variable.
    #[error("Failed processing the configuration: {source}, {location}")]
    ConfigError {
        source: Arc<figment::Error>,
        location: &'static Location<'static>,
    },

    /// The configuration was read but it does not make sense.
    #[error("Invalid configuration: {source}, {location}")]
    InvalidConfig {
        source: validator::SemanticValidationError,
        location: &'static Location<'static>,
    },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            source: Arc::new(err),
            location: Location::caller(),
        }
    }
}

impl From<validator::SemanticValidationError> for Error {
    #[track_caller]
    fn from(err: validator::SemanticValidationError) -> Self {
        Self::InvalidConfig {
            source: err,
            location: Location::caller(),
        }
    }
}
