use axum::Router;
use roster::Roster;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;

use error::WebError;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::fighters::handlers::list_fighters,
        features::fighters::handlers::get_fighter,
        features::fighters::handlers::list_fighters_by_weight_class,
        features::health::handlers::health_check,
    ),
    components(
        schemas(
            roster::models::Fighter,
            roster::models::FightRecord,
            roster::models::FighterStats,
            roster::models::Fight,
            roster::models::FightResult,
            features::health::handlers::HealthResponse,
        )
    ),
    tags(
        (name = "fighters", description = "Public fighter endpoints"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Build the full API router around a loaded roster.
pub fn app(roster: Roster) -> Router {
    Router::new()
        .nest("/api", features::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(fallback)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(roster)
}

async fn fallback() -> WebError {
    WebError::NotFound
}
