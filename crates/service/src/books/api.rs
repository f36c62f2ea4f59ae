use std::sync::Arc;
use models::book::{Book, BookPayload};
use tracing::warn;

use crate::books::repository::BookRepository;
use crate::errors::ServiceError;

/// Success value or human-readable error message.
pub type Outcome<T> = Result<T, String>;

/// Surface handed to whatever hosts the store (RPC, HTTP, in-process).
/// Every call resolves to an [`Outcome`]; failures are logged and flattened
/// to their message.
pub struct BookApi<R: BookRepository> {
    repo: Arc<R>,
}

impl<R: BookRepository> Clone for BookApi<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: BookRepository> BookApi<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get_books(&self) -> Outcome<Vec<Book>> {
        Ok(self.repo.list().await)
    }

    pub async fn get_book(&self, id: &str) -> Outcome<Book> {
        self.repo.get(id).await.map_err(|e| report("get_book", e))
    }

    pub async fn add_book(&self, payload: BookPayload) -> Outcome<Book> {
        self.repo.create(payload).await.map_err(|e| report("add_book", e))
    }

    pub async fn update_book(&self, id: &str, payload: BookPayload) -> Outcome<Book> {
        self.repo.update(id, payload).await.map_err(|e| report("update_book", e))
    }

    pub async fn delete_book(&self, id: &str) -> Outcome<Book> {
        self.repo.delete(id).await.map_err(|e| report("delete_book", e))
    }
}

fn report(op: &'static str, err: ServiceError) -> String {
    let kind = match err {
        ServiceError::InvalidInput(_) => "invalid_input",
        ServiceError::NotFound(_) => "not_found",
    };
    warn!(op, kind, error = %err, "book operation rejected");
    err.to_string()
}
