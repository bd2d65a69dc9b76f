use std::sync::Arc;

use clap::Parser;
use countup::bootstrap::config::{default_configuration_toml, Args};
use countup::render::terminal::{Console, Stdout};
use countup::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        println!("{}", default_configuration_toml()?);
        return Ok(());
    }

    let config = bootstrap::app::setup(&args)?;

    let host = Arc::new(Console::new(Arc::new(Stdout)));

    let handles = app::start(&config, &host);

    // handle the signals
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Countup shutting down..");

            // Await for all jobs to shutdown
            futures::future::join_all(handles.into_iter().map(countup::core::handle::Handle::join)).await;
            info!("Countup successfully shutdown.");
        }
    }

    Ok(())
}
