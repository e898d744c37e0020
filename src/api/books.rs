//! Book (catalog) endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::{AppJson, AppPath};
use crate::{
    error::AppResult,
    models::book::{Book, BookActionResponse, BookFields, BookId},
};

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookFields,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AppJson(fields): AppJson<BookFields>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.catalog.create_book(&fields).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List active books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Books that are not deleted", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// List soft-deleted books
#[utoipa::path(
    get,
    path = "/books/deleted",
    tag = "books",
    responses(
        (status = 200, description = "Books that are soft-deleted", body = Vec<Book>)
    )
)]
pub async fn list_deleted_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_deleted_books().await?;
    Ok(Json(books))
}

/// Get a book by ID, deleted or not
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<BookId>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = BookFields,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<BookId>,
    AppJson(fields): AppJson<BookFields>,
) -> AppResult<Json<Book>> {
    let updated = state.services.catalog.update_book(id, &fields).await?;
    Ok(Json(updated))
}

/// Soft-delete a book
#[utoipa::path(
    put,
    path = "/books/delete/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted (soft delete)", body = BookActionResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<BookId>,
) -> AppResult<Json<BookActionResponse>> {
    let book = state.services.catalog.delete_book(id).await?;
    Ok(Json(BookActionResponse {
        message: "Book deleted (soft delete)".to_string(),
        book,
    }))
}

/// Restore a soft-deleted book
#[utoipa::path(
    put,
    path = "/books/restore/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book restored", body = BookActionResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn restore_book(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<BookId>,
) -> AppResult<Json<BookActionResponse>> {
    let book = state.services.catalog.restore_book(id).await?;
    Ok(Json(BookActionResponse {
        message: "Book restored".to_string(),
        book,
    }))
}
