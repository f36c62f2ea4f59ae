use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
}

impl ModelError {
    /// Detail message without the `validation error:` prefix.
    pub fn detail(&self) -> &str {
        match self {
            ModelError::Validation(msg) => msg,
        }
    }
}
