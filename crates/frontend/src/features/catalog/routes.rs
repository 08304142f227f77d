use axum::{Router, routing::get};

use super::handlers::{catalog_page, fighter_page};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog_page))
        .route("/fighters/:id", get(fighter_page))
}
