use axum::{Router, routing::get};

use super::handlers::{get_fighter, list_fighters};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/fighters", get(list_fighters))
        .route("/fighters/:id", get(get_fighter))
}
