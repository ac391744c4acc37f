use crate::records::RecordId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Invalid seed document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate id {id} in {collection}")]
    DuplicateId {
        collection: &'static str,
        id: RecordId,
    },
}

/// Rejected form input for a record draft
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("{0} é obrigatório")]
    MissingField(&'static str),

    #[error("E-mail inválido: {0}")]
    InvalidEmail(String),

    #[error("{0} não confere")]
    Mismatch(&'static str),
}
