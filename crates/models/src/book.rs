use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

/// A stored book. The `id` is minted by the store and never changes;
/// only a read accessor is exposed for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    id: String,
    pub title: String,
    pub author: String,
    pub published_year: u64,
    pub summary: String,
}

/// Create/update input: every field of [`Book`] except `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub published_year: u64,
    pub summary: String,
}

impl BookPayload {
    /// Checks fields in declaration order and reports the first offender.
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_non_empty("title", &self.title)?;
        validate_non_empty("author", &self.author)?;
        if self.published_year == 0 {
            return Err(ModelError::Validation("publishedYear must be non-zero".into()));
        }
        validate_non_empty("summary", &self.summary)?;
        Ok(())
    }
}

impl Book {
    /// Builds a record under the given id from a payload.
    /// Callers are expected to have validated the payload.
    pub fn from_payload(id: String, payload: BookPayload) -> Self {
        Self {
            id,
            title: payload.title,
            author: payload.author,
            published_year: payload.published_year,
            summary: payload.summary,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full replace of every mutable field; the id is carried over.
    pub fn replaced_with(&self, payload: BookPayload) -> Self {
        Self::from_payload(self.id.clone(), payload)
    }

    /// The non-id fields as a payload.
    pub fn to_payload(&self) -> BookPayload {
        BookPayload {
            title: self.title.clone(),
            author: self.author.clone(),
            published_year: self.published_year,
            summary: self.summary.clone(),
        }
    }
}

/// Fresh random (v4) identifier in hyphenated lowercase form.
pub fn new_book_id() -> String {
    Uuid::new_v4().to_string()
}

/// Only the empty id is structurally invalid; anything else goes to lookup.
pub fn validate_book_id(id: &str) -> Result<(), ModelError> {
    if id.is_empty() {
        return Err(ModelError::Validation("book id must not be empty".into()));
    }
    Ok(())
}

fn validate_non_empty(field: &str, value: &str) -> Result<(), ModelError> {
    if value.is_empty() {
        return Err(ModelError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
