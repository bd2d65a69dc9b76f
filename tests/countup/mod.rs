//! Countups started through the public entry points, with the working
//! clock.
//!
//! Starts in the far future keep the readings at zero whatever the current
//! date is.
use std::sync::Arc;
use std::time::Duration;

use countup::app;
use countup::render::memory::{Recorder, Slot};
use countup::render::terminal::{Console, Logger};
use countup::render::Target;
use countup_configuration::{Configuration, Info, Options};
use countup_primitives::Unit;

fn in_the_far_future(options: Options) -> Options {
    Options {
        start_year: Some(3000),
        start_month: Some(1),
        start_day: Some(1),
        ..options
    }
}

#[tokio::test(start_paused = true)]
async fn a_countup_with_a_start_in_the_future_should_show_zero_in_every_section() {
    let recorder = Arc::new(Recorder::new(&["uptime"]));
    let target = Target::new("uptime");

    let handle = app::start_countup(
        &recorder,
        "uptime",
        in_the_far_future(Options {
            zero_pad: Some(true),
            ..Options::default()
        }),
    );

    for unit in Unit::ALL {
        assert_eq!(recorder.latest(&target, Slot::Amount(unit)).as_deref(), Some("00"));
    }

    assert_eq!(recorder.latest(&target, Slot::Word(Unit::Hours)).as_deref(), Some("hours"));

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn a_stopped_countup_should_not_update_its_targets_anymore() {
    let recorder = Arc::new(Recorder::new(&["uptime"]));
    let target = Target::new("uptime");

    let handle = app::start_countup(
        &recorder,
        "uptime",
        in_the_far_future(Options {
            refresh: Some(100),
            inline: Some(true),
            ..Options::default()
        }),
    );

    tokio::time::sleep(Duration::from_millis(350)).await;

    handle.stop().await;

    let writes = recorder.writes(&target, Slot::Inline);

    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(writes, 4);
    assert_eq!(recorder.writes(&target, Slot::Inline), writes);
}

#[tokio::test(start_paused = true)]
async fn the_terminal_host_should_print_a_line_for_every_target() {
    let logger = Arc::new(Logger::new());
    let console = Arc::new(Console::new(logger.clone()));

    let handle = app::start_countup(
        &console,
        "uptime, launch",
        in_the_far_future(Options {
            inline: Some(true),
            ..Options::default()
        }),
    );

    assert_eq!(handle.len(), 2);
    assert_eq!(
        logger.log(),
        "uptime: 0 months, 0 days, 0 hours, 0 minutes, 0 seconds.\n\
         launch: 0 months, 0 days, 0 hours, 0 minutes, 0 seconds.\n"
    );

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn the_configured_countups_should_be_started_from_a_toml_document() {
    let info = Info::from_toml(
        r#"
[logging]
threshold = "off"

[[countups]]
selector = "uptime"
inline = true
plural = false

[countups.start]
year = 3000

[countups.words]
days = "jour"

[[countups]]
selector = "launch"
"#,
    );

    let configuration = Configuration::load(&info).expect("the configuration should be valid");

    let recorder = Arc::new(Recorder::new(&["uptime", "launch"]));

    let handles = app::start(&configuration, &recorder);

    assert_eq!(handles.len(), 2);
    assert_eq!(
        recorder.latest(&Target::new("uptime"), Slot::Inline).as_deref(),
        Some("0 month, 0 jour, 0 hour, 0 minute, 0 second.")
    );
    assert_eq!(recorder.writes(&Target::new("launch"), Slot::Amount(Unit::Seconds)), 1);

    for handle in handles {
        handle.stop().await;
    }
}
