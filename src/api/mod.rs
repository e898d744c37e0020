//! API handlers for the book catalog REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    extract::{FromRequest, FromRequestParts},
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections use the `AppError` body format
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path extractor whose rejections use the `AppError` body format
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // The browser client is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/deleted", get(books::list_deleted_books))
        .route("/books/:id", get(books::get_book).put(books::update_book))
        .route("/books/delete/:id", put(books::delete_book))
        .route("/books/restore/:id", put(books::restore_book))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::{config::AppConfig, repository::MemoryBookStore};

    fn app() -> Router {
        create_router(AppState::new(AppConfig::default(), Arc::new(MemoryBookStore::new())))
    }

    async fn send(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (status, body) = send(app(), Method::POST, "/api/books", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BadValue");
    }

    #[tokio::test]
    async fn test_deleted_route_is_not_captured_by_id() {
        let (status, body) = send(app(), Method::GET, "/api/books/deleted", "").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().is_some_and(|a| a.is_empty()));
    }

    #[tokio::test]
    async fn test_malformed_id_is_bad_request() {
        let cases = [
            (Method::PUT, "/api/books/delete/abc"),
            (Method::PUT, "/api/books/restore/3000000000"),
            (Method::GET, "/api/books/x1"),
        ];
        for (method, uri) in cases {
            let (status, body) = send(app(), method, uri, "").await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body["error"], "BadValue", "{}", uri);
            assert_eq!(body["code"], 18, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_unknown_book_is_404() {
        let (status, body) = send(app(), Method::PUT, "/api/books/delete/12", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Book 12 not found");
    }
}
