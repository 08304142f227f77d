use thiserror::Error;

pub type Result<T> = std::result::Result<T, LookupError>;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Roster error: {0}")]
    RosterError(#[from] roster::RosterError),
}
