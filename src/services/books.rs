//! Book service

use async_trait::async_trait;

use super::BookUseCase;
use crate::{error::AppResult, models::book::Book, repository::Repository};

#[derive(Clone)]
pub struct BookService {
    repository: Repository,
}

impl BookService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl BookUseCase for BookService {
    async fn fetch_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.fetch_books().await
    }

    async fn get_book_by_id(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get_book_by_id(id).await
    }

    async fn create_book(&self, book: &mut Book) -> AppResult<()> {
        self.repository.books.create_book(book).await
    }

    async fn update_book(&self, id: &str, book: &mut Book) -> AppResult<()> {
        self.repository.books.update_book(id, book).await
    }

    async fn delete_book(&self, id: &str) -> AppResult<()> {
        self.repository.books.delete_book(id).await
    }
}
