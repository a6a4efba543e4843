use crate::model::RecordId;
use crate::validation::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Invalid record: {0}")]
    Validation(ValidationErrors),

    #[error("Not logged in")]
    NotAuthenticated,

    #[error("A submission is already in progress")]
    SubmissionPending,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl RosterError {
    pub fn not_found(id: RecordId) -> Self {
        RosterError::RecordNotFound(id.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
