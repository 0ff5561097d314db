//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Books API",
        version = "0.1.0",
        description = "In-memory book catalog REST API"
    ),
    paths(
        health::health_check,
        books::fetch_books,
        books::get_book_by_id,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::api::response::ResponseStatus,
            crate::api::response::ErrorResponse,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_book_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/books"));
        assert!(doc.paths.paths.contains_key("/books/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
