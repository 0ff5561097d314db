//! Repository layer for book storage

pub mod books;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{error::AppResult, models::book::Book};

/// Storage capability for books.
///
/// The HTTP and service layers only see this trait; the in-memory store is
/// the production implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Every stored book, in insertion order. Fails with `NotFound` when empty.
    async fn fetch_books(&self) -> AppResult<Vec<Book>>;

    async fn get_book_by_id(&self, id: &str) -> AppResult<Book>;

    /// Store `book` and write the assigned id back into it.
    async fn create_book(&self, book: &mut Book) -> AppResult<()>;

    /// Replace the stored fields for `id`; `book.id` is overwritten with the stored id.
    async fn update_book(&self, id: &str, book: &mut Book) -> AppResult<()>;

    async fn delete_book(&self, id: &str) -> AppResult<()>;
}

/// Main repository struct holding the storage backends
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookRepository>,
}

impl Repository {
    /// Create a repository over the given book storage
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    /// Create a repository backed by a fresh, empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(books::InMemoryBookRepository::new()))
    }
}
