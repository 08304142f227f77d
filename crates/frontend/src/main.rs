use anyhow::Context;
use roster::Roster;
use roster_frontend::{AppState, client::FighterApiClient, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting UFC Stats frontend");

    let config = Config::from_env().context("Failed to load frontend configuration")?;
    tracing::info!("Reading fighters from {}", config.api_url);

    let api = FighterApiClient::new(&config.api_url).context("Failed to build API client")?;
    let roster = Roster::load().context("Failed to load fighter dataset")?;

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Frontend is running on http://{}", bind_address);

    axum::serve(listener, roster_frontend::app(AppState { api, roster })).await?;

    Ok(())
}
