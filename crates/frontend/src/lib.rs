use axum::Router;
use roster::Roster;
use tower_http::trace::TraceLayer;

pub mod client;
pub mod config;
pub mod error;
pub mod features;
pub mod views;

use client::FighterApiClient;

#[derive(Debug, Clone)]
pub struct AppState {
    /// Source of the pages' data.
    pub api: FighterApiClient,
    /// Backs the `/api` handlers of this process.
    pub roster: Roster,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(features::catalog::routes::routes())
        .nest("/api", features::api::routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
