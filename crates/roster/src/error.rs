use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Fighter not found")]
    FighterNotFound(u32),

    #[error("Fighter not found")]
    InvalidId(String),

    #[error("Dataset could not be parsed: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("Dataset failed validation: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Duplicate fighter id: {0}")]
    DuplicateId(u32),
}

pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RosterError::FighterNotFound(_) | RosterError::InvalidId(_)
        )
    }
}
