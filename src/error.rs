use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum SequencingError {
    #[error("Invalid request body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid jobs: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<Vec<ValidationError>> for SequencingError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SequencingError::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, SequencingError>;
