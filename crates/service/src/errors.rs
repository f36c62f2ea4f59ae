use thiserror::Error;

use models::errors::ModelError;

/// The two ways a store operation can fail. The display form is the
/// human-readable message handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn invalid_id() -> Self { Self::InvalidInput("Invalid book ID.".into()) }

    pub fn invalid_payload(err: &ModelError) -> Self {
        Self::InvalidInput(format!("Invalid book payload: {}", err.detail()))
    }

    pub fn invalid_update(err: &ModelError) -> Self {
        Self::InvalidInput(format!("Invalid book ID or payload: {}", err.detail()))
    }

    pub fn not_found(id: &str) -> Self { Self::NotFound(format!("A book with id={id} not found")) }

    pub fn update_not_found(id: &str) -> Self {
        Self::NotFound(format!("Couldn't update a book with id={id}. Book not found"))
    }

    pub fn delete_not_found(id: &str) -> Self {
        Self::NotFound(format!("Couldn't delete a book with id={id}. Book not found."))
    }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }

    pub fn is_invalid_input(&self) -> bool { matches!(self, Self::InvalidInput(_)) }
}

