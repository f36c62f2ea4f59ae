use async_trait::async_trait;
use models::book::{new_book_id, validate_book_id, Book, BookPayload};
use tracing::{debug, info, instrument};

use crate::books::repository::BookRepository;
use crate::errors::ServiceError;
use crate::storage::ordered_map_store::OrderedMapStore;

/// In-memory book collection keyed by generated id.
///
/// Cloning yields another handle to the same collection. Each operation
/// validates first and then performs exactly one map step, so readers never
/// see a half-applied create, update or delete.
#[derive(Clone, Default)]
pub struct BookStore {
    books: OrderedMapStore<String, Book>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All books in ascending id order.
    pub async fn list(&self) -> Vec<Book> {
        self.books.values().await
    }

    pub async fn get(&self, id: &str) -> Result<Book, ServiceError> {
        validate_book_id(id).map_err(|_| ServiceError::invalid_id())?;
        self.books.get(id).await.ok_or_else(|| ServiceError::not_found(id))
    }

    /// Validate, mint a fresh id and insert. Ids come from a v4 UUID and
    /// are not checked against existing keys.
    #[instrument(skip_all)]
    pub async fn create(&self, payload: BookPayload) -> Result<Book, ServiceError> {
        payload.validate().map_err(|e| ServiceError::invalid_payload(&e))?;
        let book = Book::from_payload(new_book_id(), payload);
        self.books.insert(book.id().to_string(), book.clone()).await;
        info!(book_id = %book.id(), event = "book_created", "book created");
        Ok(book)
    }

    /// Full replace of every field except the id.
    #[instrument(skip_all, fields(book_id = %id))]
    pub async fn update(&self, id: &str, payload: BookPayload) -> Result<Book, ServiceError> {
        validate_book_id(id).map_err(|e| ServiceError::invalid_update(&e))?;
        payload.validate().map_err(|e| ServiceError::invalid_update(&e))?;
        let updated = self
            .books
            .replace(id, move |existing| existing.replaced_with(payload))
            .await
            .ok_or_else(|| ServiceError::update_not_found(id))?;
        info!(event = "book_updated", "book updated");
        Ok(updated)
    }

    /// Remove and return the stored record.
    #[instrument(skip_all, fields(book_id = %id))]
    pub async fn delete(&self, id: &str) -> Result<Book, ServiceError> {
        validate_book_id(id).map_err(|_| ServiceError::invalid_id())?;
        let removed = self
            .books
            .remove(id)
            .await
            .ok_or_else(|| ServiceError::delete_not_found(id))?;
        info!(event = "book_deleted", "book deleted");
        Ok(removed)
    }

    pub async fn len(&self) -> usize {
        self.books.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.books.is_empty().await
    }
}

#[async_trait]
impl BookRepository for BookStore {
    async fn list(&self) -> Vec<Book> {
        let books = self.list().await;
        debug!(count = books.len(), "listed books");
        books
    }
    async fn get(&self, id: &str) -> Result<Book, ServiceError> { self.get(id).await }
    async fn create(&self, payload: BookPayload) -> Result<Book, ServiceError> { self.create(payload).await }
    async fn update(&self, id: &str, payload: BookPayload) -> Result<Book, ServiceError> { self.update(id, payload).await }
    async fn delete(&self, id: &str) -> Result<Book, ServiceError> { self.delete(id).await }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> BookPayload {
        BookPayload {
            title: "Dune".into(),
            author: "Herbert".into(),
            published_year: 1965,
            summary: "Desert planet epic".into(),
        }
    }

    #[tokio::test]
    async fn book_store_crud_and_validation() {
        let store = BookStore::new();

        // create
        let created = store.create(dune()).await.expect("create ok");
        assert_eq!(created.to_payload(), dune());
        assert_eq!(store.len().await, 1);

        // get
        let found = store.get(created.id()).await.expect("found");
        assert_eq!(found, created);

        // update keeps the id
        let revised = BookPayload { summary: "Revised summary".into(), ..dune() };
        let updated = store.update(created.id(), revised).await.expect("update ok");
        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.summary, "Revised summary");
        assert_eq!(store.get(created.id()).await.expect("found"), updated);

        // delete returns the last stored value
        let deleted = store.delete(created.id()).await.expect("delete ok");
        assert_eq!(deleted, updated);
        assert!(store.get(created.id()).await.unwrap_err().is_not_found());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn empty_id_is_invalid_before_lookup() {
        let store = BookStore::new();
        assert_eq!(store.get("").await, Err(ServiceError::InvalidInput("Invalid book ID.".into())));
        assert_eq!(store.delete("").await, Err(ServiceError::InvalidInput("Invalid book ID.".into())));
        assert!(store.update("", dune()).await.unwrap_err().is_invalid_input());
    }

    #[tokio::test]
    async fn invalid_payload_leaves_store_untouched() {
        let store = BookStore::new();
        let created = store.create(dune()).await.expect("create ok");

        let bad = BookPayload { published_year: 0, ..dune() };
        let err = store.create(bad.clone()).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid book payload: publishedYear must be non-zero");

        let err = store.update(created.id(), bad).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid book ID or payload: publishedYear must be non-zero");

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get(created.id()).await.expect("found"), created);
    }

    #[tokio::test]
    async fn absent_ids_are_not_found() {
        let store = BookStore::new();
        let id = new_book_id();
        assert_eq!(store.get(&id).await.unwrap_err().to_string(), format!("A book with id={id} not found"));
        assert_eq!(
            store.update(&id, dune()).await.unwrap_err().to_string(),
            format!("Couldn't update a book with id={id}. Book not found")
        );
        assert_eq!(
            store.delete(&id).await.unwrap_err().to_string(),
            format!("Couldn't delete a book with id={id}. Book not found.")
        );
        // update on a missing id must not insert it
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn list_is_sorted_by_id() {
        let store = BookStore::new();
        for year in 1..=20u64 {
            store.create(BookPayload { published_year: year, ..dune() }).await.expect("create ok");
        }
        let ids: Vec<String> = store.list().await.iter().map(|b| b.id().to_string()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 20);
    }
}
