//! Setup for the application logging.
//!
//! It redirects the log info to the standard output with the threshold and
//! the style defined in the configuration.
//!
//! Thresholds:
//!
//! - `off` (i.e. don't load any subscriber...)
//! - `error`
//! - `warn`
//! - `info`
//! - `debug`
//! - `trace`
//!
//! Refer to the [configuration crate documentation](https://docs.rs/countup-configuration) to know how to change log settings.
use std::sync::Once;

use countup_configuration::{Logging, Threshold};
use tracing::debug;
use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

/// It redirects the log info to the standard output with the threshold defined in the configuration.
pub fn setup(cfg: &Logging) {
    let filter = map_to_tracing_level_filter(cfg.threshold);
    let style = TraceStyle::new(cfg.style, filter);

    if filter == LevelFilter::OFF {
        return;
    }

    INIT.call_once(|| {
        tracing_stdout_init(filter, &style);
    });
}

fn map_to_tracing_level_filter(threshold: Threshold) -> LevelFilter {
    match threshold {
        Threshold::Off => LevelFilter::OFF,
        Threshold::Error => LevelFilter::ERROR,
        Threshold::Warn => LevelFilter::WARN,
        Threshold::Info => LevelFilter::INFO,
        Threshold::Debug => LevelFilter::DEBUG,
        Threshold::Trace => LevelFilter::TRACE,
    }
}

fn tracing_stdout_init(filter: LevelFilter, style: &TraceStyle) {
    let builder = tracing_subscriber::fmt().with_max_level(filter).with_ansi(true);

    let () = match style {
        TraceStyle::Default => builder.init(),
        TraceStyle::Pretty(display_filename) => builder.pretty().with_file(*display_filename).init(),
        TraceStyle::Compact => builder.compact().init(),
        TraceStyle::Json => builder.json().init(),
    };

    debug!("Logging initialized: {style}");
}

#[derive(Debug, PartialEq, Eq)]
enum TraceStyle {
    Default,
    Pretty(bool),
    Compact,
    Json,
}

impl TraceStyle {
    fn new(style: countup_configuration::TraceStyle, filter: LevelFilter) -> Self {
        match style {
            countup_configuration::TraceStyle::Full => Self::Default,
            countup_configuration::TraceStyle::Pretty => Self::Pretty(LevelFilter::DEBUG <= filter),
            countup_configuration::TraceStyle::PrettyWithPaths => Self::Pretty(true),
            countup_configuration::TraceStyle::PrettyWithoutPaths => Self::Pretty(false),
            countup_configuration::TraceStyle::Compact => Self::Compact,
            countup_configuration::TraceStyle::Json => Self::Json,
        }
    }
}

impl std::fmt::Display for TraceStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let style = match self {
            TraceStyle::Default => "Default Style",
            TraceStyle::Pretty(true) => "Pretty Style with File Paths",
            TraceStyle::Pretty(false) => "Pretty Style without File Paths",
            TraceStyle::Compact => "Compact Style",
            TraceStyle::Json => "Json Format",
        };

        f.write_str(style)
    }
}
