use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster::RosterError;
use serde_json::json;
use std::fmt;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Roster(RosterError),
    NotFound,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Roster(e) => write!(f, "Roster error: {}", e),
            Self::NotFound => write!(f, "Resource not found"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Roster(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Roster(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
        };

        let body = match &self {
            Self::Roster(e) if e.is_not_found() => {
                tracing::debug!("Lookup miss: {:?}", e);
                json!({
                    "error": e.to_string()
                })
            }
            Self::Roster(e) => {
                tracing::error!("Roster error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::NotFound => {
                json!({
                    "error": "Resource not found"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<RosterError> for WebError {
    fn from(error: RosterError) -> Self {
        Self::Roster(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fighter_maps_to_404() {
        let response = WebError::from(RosterError::FighterNotFound(42)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_id_maps_to_500() {
        let response = WebError::from(RosterError::DuplicateId(3)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unknown_route_maps_to_404() {
        assert_eq!(WebError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }
}
