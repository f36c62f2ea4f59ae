use async_trait::async_trait;
use models::book::{Book, BookPayload};

use crate::errors::ServiceError;

/// Trait abstraction for book storage.
/// Every fallible method validates its input before touching storage.
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn list(&self) -> Vec<Book>;
    async fn get(&self, id: &str) -> Result<Book, ServiceError>;
    async fn create(&self, payload: BookPayload) -> Result<Book, ServiceError>;
    async fn update(&self, id: &str, payload: BookPayload) -> Result<Book, ServiceError>;
    async fn delete(&self, id: &str) -> Result<Book, ServiceError>;
}
