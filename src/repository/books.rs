//! In-memory book store

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use uuid::Uuid;

use super::BookRepository;
use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

const CONFLICT_FIELD: &str = "title, author, and publication year";

/// Process-local book collection.
///
/// A single mutex guards every operation, reads included, so each call sees
/// and leaves a consistent collection. Insertion order is kept.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: Mutex<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // No operation can panic halfway through a mutation, so a poisoned
    // guard still holds a consistent collection.
    fn lock(&self) -> MutexGuard<'_, Vec<Book>> {
        self.books.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn fetch_books(&self) -> AppResult<Vec<Book>> {
        let books = self.lock();

        if books.is_empty() {
            return Err(AppError::not_found("Book", "ID", ""));
        }

        Ok(books.clone())
    }

    async fn get_book_by_id(&self, id: &str) -> AppResult<Book> {
        let books = self.lock();

        books
            .iter()
            .find(|book| book.has_id(id))
            .cloned()
            .ok_or_else(|| AppError::not_found("Book", "ID", id))
    }

    async fn create_book(&self, book: &mut Book) -> AppResult<()> {
        let mut books = self.lock();

        if books.iter().any(|existing| existing.same_content(book)) {
            tracing::debug!("Rejected duplicate book: {:?} by {:?}", book.title, book.author);
            return Err(AppError::conflict("book", CONFLICT_FIELD));
        }

        book.id = Uuid::new_v4();
        books.push(book.clone());
        tracing::debug!("Created book id={}", book.id);

        Ok(())
    }

    async fn update_book(&self, id: &str, book: &mut Book) -> AppResult<()> {
        let mut books = self.lock();

        let slot = books
            .iter_mut()
            .find(|existing| existing.has_id(id))
            .ok_or_else(|| AppError::not_found("Book", "ID", id))?;

        book.id = slot.id;
        *slot = book.clone();
        tracing::debug!("Updated book id={}", book.id);

        Ok(())
    }

    async fn delete_book(&self, id: &str) -> AppResult<()> {
        let mut books = self.lock();

        let index = books
            .iter()
            .position(|book| book.has_id(id))
            .ok_or_else(|| AppError::not_found("Book", "ID", id))?;

        books.remove(index);
        tracing::debug!("Deleted book id={}", id);

        Ok(())
    }
}
