//! Business logic services

pub mod books;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{error::AppResult, models::book::Book, repository::Repository};

/// Book management capability exposed to the HTTP layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookUseCase: Send + Sync {
    async fn fetch_books(&self) -> AppResult<Vec<Book>>;

    async fn get_book_by_id(&self, id: &str) -> AppResult<Book>;

    async fn create_book(&self, book: &mut Book) -> AppResult<()>;

    async fn update_book(&self, id: &str, book: &mut Book) -> AppResult<()>;

    async fn delete_book(&self, id: &str) -> AppResult<()>;
}

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: Arc<dyn BookUseCase>,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: Arc::new(books::BookService::new(repository)),
        }
    }
}
