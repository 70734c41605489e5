mod poller;
mod summary;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use slotwatch_core::WatchConfig;
use slotwatch_heb::HebClient;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use crate::poller::{Poller, RunEnd};

/// Watches the HEB store locator for open curbside and delivery timeslots.
#[derive(Debug, Parser)]
#[command(name = "slotwatch", version)]
#[command(about = "Polls HEB for open curbside and delivery timeslots near a zip code")]
struct Cli {
    /// Postal code to search for stores near
    #[arg(long, env = "SLOTWATCH_ZIP")]
    zip: String,

    /// Store search radius in miles
    #[arg(long, env = "SLOTWATCH_RADIUS_MILES")]
    miles: u32,

    /// Seconds between poll cycles (minimum 60)
    #[arg(long, env = "SLOTWATCH_POLL_INTERVAL_SECS")]
    every_secs: u64,

    /// Keep polling after open slots are found instead of stopping
    #[arg(long, env = "SLOTWATCH_CONTINUE_ON_SUCCESS")]
    continue_on_success: bool,

    /// Per-request timeout for the HEB API, in seconds
    #[arg(long, env = "SLOTWATCH_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let config = WatchConfig::new(
        cli.zip,
        cli.miles,
        Duration::from_secs(cli.every_secs),
        cli.continue_on_success,
        cli.timeout_secs,
    )
    .context("invalid watch configuration")?;

    tracing::info!(
        zip = %config.zip,
        radius_miles = config.radius_miles,
        interval_secs = config.poll_interval.as_secs(),
        continue_on_success = config.continue_on_success,
        "starting watch"
    );

    let client = HebClient::new(config.request_timeout_secs)?;
    let cancel = CancellationToken::new();
    let poller = Poller::new(client, config, cancel.clone());

    let mut engine = tokio::spawn(async move { poller.run().await });

    tokio::select! {
        () = shutdown_signal() => {
            cancel.cancel();
            // The in-flight poll, if any, is not preempted; the engine
            // observes the cancellation at its next wait and winds down.
            let _ = (&mut engine).await;
            println!();
            println!("exited");
        }
        outcome = &mut engine => match outcome.context("polling engine task failed")? {
            Ok(RunEnd::SlotsFound) => tracing::info!("open timeslots found, stopping"),
            Ok(RunEnd::Cancelled) => {}
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context("failed to pull available slot information"));
            }
        },
    }

    Ok(())
}

/// Resolves when a termination signal arrives: SIGHUP, SIGINT, SIGTERM, or
/// SIGQUIT on unix; ctrl-c only elsewhere.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        let mut hangup = signal(SignalKind::hangup()).expect("failed to install signal handler");
        let mut terminate =
            signal(SignalKind::terminate()).expect("failed to install signal handler");
        let mut quit = signal(SignalKind::quit()).expect("failed to install signal handler");

        tokio::select! {
            _ = hangup.recv() => {}
            _ = terminate.recv() => {}
            _ = quit.recv() => {}
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("received shutdown signal, stopping");
}
