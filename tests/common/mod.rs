//! Shared helpers for integration tests

use std::sync::Arc;

use book_catalog_server::{
    api, config::AppConfig, repository::BookStore, repository::MemoryBookStore, AppState,
};

/// Serve the full router on an ephemeral port and return the API base URL
pub async fn spawn_server(store: Arc<dyn BookStore>) -> String {
    let app = api::create_router(AppState::new(AppConfig::default(), store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    format!("http://{}/api", addr)
}

pub async fn spawn_memory_server() -> String {
    spawn_server(Arc::new(MemoryBookStore::new())).await
}
