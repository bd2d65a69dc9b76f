//! Initialize configuration from file or env var.
//!
//! There are two methods to inject the configuration:
//!
//! 1. By using a config file: `countup.toml`. Its path is given with
//!    `--config-path`, or the `COUNTUP_CONFIG_TOML_PATH` environment
//!    variable. The default is `./share/default/config/countup.toml`.
//! 2. Environment variable: `COUNTUP_CONFIG_TOML`. The variable contains the
//!    same contents as the `countup.toml` file.
//!
//! Environment variable has priority over the config file.
//!
//! Refer to the [configuration documentation](https://docs.rs/countup-configuration) for the configuration options.
use clap::Parser;
use countup_configuration::{Configuration, Error, Info, DEFAULT_PATH_CONFIG, ENV_VAR_CONFIG_TOML_PATH};

#[derive(Parser, Debug, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the TOML configuration file.
    #[clap(short, long, env = ENV_VAR_CONFIG_TOML_PATH)]
    pub config_path: Option<String>,

    /// Print the default configuration and exit.
    #[clap(long)]
    pub print_default_config: bool,
}

/// It loads the application configuration from the environment.
///
/// # Errors
///
/// Will return `Err` if the configuration cannot be decoded or is not valid.
pub fn initialize_configuration(args: &Args) -> Result<Configuration, Error> {
    let path = args.config_path.clone().unwrap_or_else(|| DEFAULT_PATH_CONFIG.to_owned());

    let info = Info::new(path)?;

    Configuration::load(&info)
}

/// The default configuration as a TOML document.
///
/// # Errors
///
/// Will return `Err` if the configuration cannot be encoded to TOML.
pub fn default_configuration_toml() -> Result<String, Error> {
    Configuration::default().to_toml()
}
