//! Entry point: parse CLI, fetch, write CSV.

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use env_logger::Env;
use garmin_stats::{
    cli::GarminStats,
    commands::{handle_export, ExportParams},
    garmin::{ClientConfig, GarminClient},
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = GarminStats::parse();

    let level = if app.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    // Validate everything before the first request goes out
    let params = ExportParams::from_args(&app, Local::now().date_naive())?;
    let client = GarminClient::new(ClientConfig::default(), &app.credentials())
        .context("Failed to build Garmin Connect client")?;

    handle_export(&client, params)
        .await
        .context("Export failed")?;

    Ok(())
}
