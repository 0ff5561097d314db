//! Request deadline for the book routes

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Abandon the request with 503 once `deadline` has elapsed.
pub async fn timeout(State(deadline): State<Duration>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();

    match tokio::time::timeout(deadline, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!("Request to {} exceeded {:?}", path, deadline);
            AppError::ServiceUnavailable.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{self, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    use super::*;

    fn app(deadline: Duration, work: Duration) -> Router {
        Router::new()
            .route(
                "/books",
                get(move || async move {
                    tokio::time::sleep(work).await;
                    "done"
                }),
            )
            .layer(middleware::from_fn_with_state(deadline, timeout))
    }

    async fn status(app: Router) -> StatusCode {
        app.oneshot(http::Request::builder().uri("/books").body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_fast_handler_passes_through() {
        let app = app(Duration::from_secs(1), Duration::ZERO);
        assert_eq!(status(app).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_slow_handler_times_out() {
        let app = app(Duration::from_millis(10), Duration::from_secs(5));
        assert_eq!(status(app).await, StatusCode::SERVICE_UNAVAILABLE);
    }
}
