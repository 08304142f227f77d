use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use roster::{Roster, models::Fighter};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/fighters",
    responses(
        (status = 200, description = "List all fighters in roster order", body = Vec<Fighter>)
    ),
    tag = "fighters"
)]
pub async fn list_fighters(State(roster): State<Roster>) -> Result<Response, WebError> {
    let fighters = services::list_fighters(&roster);

    Ok(Json(fighters).into_response())
}

#[utoipa::path(
    get,
    path = "/api/fighters/{id}",
    params(
        ("id" = u32, Path, description = "Fighter id")
    ),
    responses(
        (status = 200, description = "Fighter found", body = Fighter),
        (status = 404, description = "Fighter not found")
    ),
    tag = "fighters"
)]
pub async fn get_fighter(
    State(roster): State<Roster>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let fighter = services::get_fighter(&roster, &id)?;

    Ok(Json(fighter).into_response())
}

#[utoipa::path(
    get,
    path = "/api/fighters/weight-class/{weight_class}",
    params(
        ("weight_class" = String, Path, description = "Weight class label, matched ignoring case")
    ),
    responses(
        (status = 200, description = "Fighters in the weight class, possibly none", body = Vec<Fighter>)
    ),
    tag = "fighters"
)]
pub async fn list_fighters_by_weight_class(
    State(roster): State<Roster>,
    Path(weight_class): Path<String>,
) -> Result<Response, WebError> {
    let fighters = services::list_fighters_by_weight_class(&roster, &weight_class);

    Ok(Json(fighters).into_response())
}
