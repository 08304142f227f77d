use axum::{Router, routing::get};
use roster::Roster;

use super::handlers::{get_fighter, list_fighters, list_fighters_by_weight_class};

pub fn routes() -> Router<Roster> {
    Router::new()
        .route("/", get(list_fighters))
        .route("/:id", get(get_fighter))
        .route("/weight-class/:weight_class", get(list_fighters_by_weight_class))
}
