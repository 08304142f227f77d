use axum::{Router, routing::get};
use roster::Roster;

use super::handlers::health_check;

pub fn routes() -> Router<Roster> {
    Router::new().route("/health", get(health_check))
}
