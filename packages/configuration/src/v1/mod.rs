//! Version `1` for [Countup](https://docs.rs/countup) configuration data
//! structures.
//!
//! The configuration is loaded from a [TOML](https://toml.io/en/) file
//! `countup.toml` or from an environment variable with the same content as
//! the file.
//!
//! Configuration can not only be loaded from a file, but also from the
//! environment variable `COUNTUP_CONFIG_TOML`. This is useful when running
//! countup in a container where you cannot inject a configuration file.
//!
//! Single options can be overridden with environment variables prefixed
//! with `COUNTUP_CONFIG_OVERRIDE_`, using `__` to reach nested options:
//!
//! ```text
//! COUNTUP_CONFIG_OVERRIDE_LOGGING__THRESHOLD=debug
//! ```
//!
//! When you run countup without providing any configuration the default
//! configuration is used.
//!
//! # Sections
//!
//! - [`Logging configuration`](crate::v1::logging::Logging)
//! - [`Countup configuration`](crate::v1::countup::Countup)
//!
//! > **NOTICE**: `[[countups]]` is an array of tables. Every entry is an
//! > independent countup with its own targets and refresh interval.
//!
//! # Default configuration
//!
//! ```toml
//! [logging]
//! threshold = "info"
//! style = "full"
//!
//! [[countups]]
//! selector = "countup"
//! enable_utc = true
//! refresh = 1000
//! plural = true
//! zero_pad = false
//! inline = false
//!
//! [countups.start]
//! year = 2024
//! month = 5
//! day = 7
//! hours = 0
//! minutes = 0
//! seconds = 0
//!
//! [countups.words]
//! months = "month"
//! days = "day"
//! hours = "hour"
//! minutes = "minute"
//! seconds = "second"
//! plural_letter = "s"
//!
//! [countups.classes]
//! inline = "simply-countup-inline"
//! section = "simply-section"
//! amount = "simply-amount"
//! word = "simply-word"
//! ```
pub mod countup;
pub mod logging;

use std::fs;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::countup::Countup;
use self::logging::Logging;
use crate::validator::{SemanticValidationError, Validator};
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// The whole countup application configuration.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Configuration {
    /// Logging configuration.
    #[serde(default = "Configuration::default_logging")]
    pub logging: Logging,

    /// The countups to run. Each one is rendered into every target its
    /// selector matches.
    #[serde(default = "Configuration::default_countups")]
    pub countups: Vec<Countup>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            logging: Self::default_logging(),
            countups: Self::default_countups(),
        }
    }
}

impl Configuration {
    fn default_logging() -> Logging {
        Logging::default()
    }

    fn default_countups() -> Vec<Countup> {
        vec![Countup::default()]
    }

    /// Loads the configuration from the `Info` struct. The TOML content in
    /// `info.config_toml` has priority over the file at
    /// `info.config_toml_path`. A missing file is not an error: the defaults
    /// are used.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration cannot be decoded or is not
    /// valid.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = if let Some(config_toml) = &info.config_toml {
            Figment::from(Toml::string(config_toml))
        } else {
            Figment::from(Toml::file(&info.config_toml_path))
        };

        let figment = figment.merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let config: Configuration = figment.extract()?;

        config.validate()?;

        Ok(config)
    }

    /// Loads the configuration from the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file has a bad configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        Self::load(&Info::from_path(path))
    }

    /// Saves the configuration to the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration cannot be encoded to TOML.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be written into the file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Error> {
        fs::write(path, self.to_toml()?).expect("Could not write to file!");
        Ok(())
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration cannot be encoded to TOML.
    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string(self).map_err(|err| figment::Error::from(err.to_string()).into())
    }
}

impl Validator for Configuration {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        self.countups.iter().try_for_each(Validator::validate)
    }
}

#[cfg(test)]
mod tests {
    use crate::v1::logging::{Threshold, TraceStyle};
    use crate::v1::Configuration;
    use crate::validator::SemanticValidationError;
    use crate::{Error, Info, DEFAULT_PATH_CONFIG, ENV_VAR_CONFIG_TOML};

    fn config_toml() -> String {
        r#"
        [logging]
        threshold = "debug"

        [[countups]]
        selector = "uptime"
        zero_pad = true

        [countups.start]
        year = 2023
        month = 1

        [[countups]]
        selector = "since-launch"
        inline = true
        refresh = 250
        "#
        .lines()
        .map(str::trim_start)
        .collect::<Vec<&str>>()
        .join("\n")
    }

    #[test]
    fn configuration_should_have_a_single_default_countup() {
        let configuration = Configuration::default();

        assert_eq!(configuration.logging.threshold, Threshold::Info);
        assert_eq!(configuration.logging.style, TraceStyle::Full);
        assert_eq!(configuration.countups.len(), 1);
        assert_eq!(configuration.countups[0].selector, "countup");
    }

    #[test]
    fn configuration_should_be_loaded_from_a_toml_config_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("countup.toml", &config_toml())?;

            let configuration = Configuration::load_from_file("countup.toml").expect("Could not load configuration from file");

            assert_eq!(configuration.logging.threshold, Threshold::Debug);
            assert_eq!(configuration.countups.len(), 2);

            let uptime = &configuration.countups[0];
            assert!(uptime.zero_pad);
            assert_eq!((uptime.start.year, uptime.start.month, uptime.start.day), (2023, 1, 7));

            let since_launch = &configuration.countups[1];
            assert!(since_launch.inline);
            assert_eq!(since_launch.refresh, 250);

            Ok(())
        });
    }

    #[test]
    fn configuration_should_use_the_defaults_when_the_file_does_not_exist() {
        figment::Jail::expect_with(|_jail| {
            let configuration = Configuration::load_from_file("missing.toml").expect("Could not load the default configuration");

            assert_eq!(configuration, Configuration::default());

            Ok(())
        });
    }

    #[test]
    fn configuration_should_be_loaded_from_the_environment_variable_first() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("countup.toml", "[[countups]]\nselector = \"from-file\"")?;
            jail.set_env(ENV_VAR_CONFIG_TOML, "[[countups]]\nselector = \"from-env\"");

            let info = Info::new(String::from("countup.toml")).expect("Could not build the configuration info");
            let configuration = Configuration::load(&info).expect("Could not load configuration");

            assert_eq!(configuration.countups[0].selector, "from-env");

            Ok(())
        });
    }

    #[test]
    fn configuration_should_allow_to_override_a_single_option_with_an_env_var() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("COUNTUP_CONFIG_OVERRIDE_LOGGING__THRESHOLD", "trace");

            let configuration =
                Configuration::load(&Info::from_path(DEFAULT_PATH_CONFIG)).expect("Could not load configuration");

            assert_eq!(configuration.logging.threshold, Threshold::Trace);

            Ok(())
        });
    }

    #[test]
    fn configuration_should_be_rejected_when_a_countup_never_refreshes() {
        let info = Info::from_toml("[[countups]]\nselector = \"uptime\"\nrefresh = 0");

        let err = Configuration::load(&info).expect_err("a zero refresh interval should be invalid");

        assert!(matches!(
            err,
            Error::InvalidConfig {
                source: SemanticValidationError::ZeroRefreshInterval { .. },
                ..
            }
        ));
    }

    #[test]
    fn configuration_should_be_rejected_when_an_option_has_the_wrong_type() {
        let info = Info::from_toml("[[countups]]\nrefresh = \"fast\"");

        let err = Configuration::load(&info).expect_err("a text refresh interval should not decode");

        assert!(matches!(err, Error::ConfigError { .. }));
    }

    #[test]
    fn configuration_should_be_saved_in_a_toml_config_file() {
        use std::{env, fs};

        use uuid::Uuid;

        // Build temp config file path
        let temp_directory = env::temp_dir();
        let temp_file = temp_directory.join(format!("test_config_{}.toml", Uuid::new_v4()));

        let path = temp_file.to_string_lossy().to_string();

        let default_configuration = Configuration::default();

        default_configuration
            .save_to_file(&path)
            .expect("Could not save configuration to file");

        let contents = fs::read_to_string(&path).expect("Something went wrong reading the file");

        assert_eq!(contents, default_configuration.to_toml().expect("Could not encode TOML value"));
        assert_eq!(
            Configuration::load(&Info::from_toml(&contents)).expect("Could not load the saved configuration"),
            default_configuration
        );

        drop(fs::remove_file(&path));
    }
}
