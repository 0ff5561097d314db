//! Book endpoints

use axum::extract::{Path, State};

use crate::{error::AppResult, models::book::Book, AppState};

use super::{response::ApiResponse, ValidatedJson};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Every stored book, wrapped in the SUCCESS envelope", body = Vec<Book>),
        (status = 404, description = "The store holds no books", body = crate::api::response::ErrorResponse)
    )
)]
pub async fn fetch_books(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<Book>>> {
    let books = state.services.books.fetch_books().await?;
    Ok(ApiResponse::ok(books))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::api::response::ErrorResponse)
    )
)]
pub async fn get_book_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Book>> {
    let book = state.services.books.get_book_by_id(&id).await?;
    Ok(ApiResponse::ok(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created with its assigned ID", body = Book),
        (status = 400, description = "Malformed body or missing field", body = crate::api::response::ErrorResponse),
        (status = 409, description = "Same title, author and publication year already stored", body = crate::api::response::ErrorResponse),
        (status = 415, description = "Body is not application/json", body = crate::api::response::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(mut book): ValidatedJson<Book>,
) -> AppResult<ApiResponse<Book>> {
    state.services.books.create_book(&mut book).await?;
    tracing::info!("Book created: id={}", book.id);
    Ok(ApiResponse::created(book))
}

/// Replace a book's fields
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Malformed body or missing field", body = crate::api::response::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::api::response::ErrorResponse),
        (status = 415, description = "Body is not application/json", body = crate::api::response::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(mut book): ValidatedJson<Book>,
) -> AppResult<ApiResponse<Book>> {
    state.services.books.update_book(&id, &mut book).await?;
    Ok(ApiResponse::ok(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted, data is null"),
        (status = 404, description = "Book not found", body = crate::api::response::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    state.services.books.delete_book(&id).await?;
    tracing::info!("Book deleted: id={}", id);
    Ok(ApiResponse::empty())
}
