//! API handlers for the books REST endpoints

pub mod books;
pub mod health;
pub mod middleware;
pub mod openapi;
pub mod response;

use std::any::Any;

use axum::{
    async_trait,
    extract::{FromRequest, MatchedPath, Request},
    http::{header::CONTENT_TYPE, HeaderMap, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use validator::Validate;

use crate::{error::AppError, AppState};

/// JSON body extractor that insists on `application/json` and runs field validation.
///
/// Rejections use the FAIL envelope: 415 for any other content type, 400 for
/// unparsable bodies, missing fields or empty required fields.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            let path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched| matched.as_str().to_owned())
                .unwrap_or_else(|| req.uri().path().to_owned());
            return Err(AppError::UnsupportedMediaType(format!(
                "{} only accepts Content-Type application/json",
                path
            )));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(ValidatedJson(value))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Build the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    let prefix = state.config.books.path.trim_end_matches('/').to_owned();
    let deadline = state.config.books.timeout();

    let collection = get(books::fetch_books).post(books::create_book);
    let mut book_routes = Router::new().route(&format!("{}/", prefix), collection.clone());
    // Both `/books` and `/books/` serve the collection
    if !prefix.is_empty() {
        book_routes = book_routes.route(&prefix, collection);
    }

    let book_routes = book_routes
        .route(
            &format!("{}/:id", prefix),
            get(books::get_book_by_id)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .layer(axum::middleware::from_fn_with_state(
            deadline,
            middleware::timeout,
        ))
        .with_state(state);

    Router::new()
        .merge(book_routes)
        .route("/health", get(health::health_check))
        .merge(openapi::create_openapi_router())
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found("route", "path", uri.path())
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}
