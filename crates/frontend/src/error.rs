use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use roster::RosterError;
use serde_json::json;
use thiserror::Error;

use crate::views;

/// Failures while rendering a page from the fighter API.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to fetch fighters")]
    FetchFailed,

    #[error("Fighter not found")]
    FighterNotFound,
}

pub type Result<T> = std::result::Result<T, SiteError>;

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let (status_code, back_link) = match &self {
            Self::FighterNotFound => (StatusCode::NOT_FOUND, true),
            Self::Request(e) => {
                tracing::error!("Fighter API request failed: {:?}", e);
                (StatusCode::BAD_GATEWAY, false)
            }
            Self::FetchFailed => {
                tracing::error!("Fighter API returned an error status");
                (StatusCode::BAD_GATEWAY, false)
            }
        };

        let page = views::error::render(&self.to_string(), back_link);
        (status_code, Html(page)).into_response()
    }
}

/// JSON errors for the `/api` handlers served alongside the pages.
#[derive(Debug)]
pub struct ApiError(RosterError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = if self.0.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            tracing::error!("Roster error: {:?}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = if self.0.is_not_found() {
            json!({ "error": self.0.to_string() })
        } else {
            json!({ "error": "An internal error occurred" })
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<RosterError> for ApiError {
    fn from(error: RosterError) -> Self {
        Self(error)
    }
}
