use axum::Router;
use roster::Roster;

pub mod fighters;
pub mod health;

/// Everything mounted under `/api`.
pub fn routes() -> Router<Roster> {
    Router::new()
        .nest("/fighters", fighters::routes::routes())
        .merge(health::routes::routes())
}
