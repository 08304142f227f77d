use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use roster::repository::FighterRepository;

use crate::{AppState, error::ApiError};

pub async fn list_fighters(State(state): State<AppState>) -> Response {
    let repo = FighterRepository::new(state.roster.fighters());

    Json(repo.list()).into_response()
}

pub async fn get_fighter(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let repo = FighterRepository::new(state.roster.fighters());
    let fighter = repo.find_by_raw_id(&id)?;

    Ok(Json(fighter).into_response())
}
