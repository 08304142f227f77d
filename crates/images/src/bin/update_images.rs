use std::time::Duration;

use clap::Parser;
use roster::Roster;
use roster_images::{
    ImageLookup, LookupSummary, SportsDbClient, client::DEFAULT_BASE_URL, lookup::DEFAULT_DELAY,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "update-images")]
#[command(about = "Look up a photo URL for every fighter in the roster", long_about = None)]
#[command(version)]
struct Cli {
    /// Base URL of the player search API
    #[arg(long, env = "SPORTSDB_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Pause between consecutive searches, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    delay_ms: u64,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("update_images={},roster_images={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let roster = Roster::load()?;
    let client = SportsDbClient::new(&cli.base_url)?;

    tracing::info!(
        "Fetching fighter images from {} for {} fighters",
        client.search_url(),
        roster.len()
    );

    let lookup = ImageLookup::new(client, Duration::from_millis(cli.delay_ms));
    let results = lookup.run(roster.fighters()).await;
    let summary = LookupSummary::from_results(&results);

    tracing::info!("=== Image URLs Ready ===");
    tracing::info!(
        "Summary: {} found, {} not found, {} failed",
        summary.found,
        summary.not_found,
        summary.failed
    );
    tracing::info!("Copy these URLs into crates/roster/data/fighters.json manually");

    Ok(())
}
