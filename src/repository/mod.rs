//! Repository layer: the catalog store and its backing collections.
//!
//! A book is never physically removed here. Deleting flips `is_deleted`,
//! restoring clears it, and both are unconditional writes keyed by id, so
//! repeating either one is harmless. `list_active` is the single authority
//! on which books are visible.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFields, BookId},
};

pub use memory::MemoryBookStore;
pub use postgres::PgBookStore;

/// Persistence contract for book records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Insert a new active book and return it with its assigned id
    async fn create(&self, fields: &BookFields) -> AppResult<Book>;

    /// All books with `is_deleted = false`, in ascending id order
    async fn list_active(&self) -> AppResult<Vec<Book>>;

    /// All books with `is_deleted = true`, in ascending id order
    async fn list_deleted(&self) -> AppResult<Vec<Book>>;

    /// Fetch one book by id whatever its deletion flag
    async fn get(&self, id: BookId) -> AppResult<Book>;

    /// Overwrite the editable fields. Works on deleted books and leaves the flag alone.
    async fn update(&self, id: BookId, fields: &BookFields) -> AppResult<Book>;

    async fn soft_delete(&self, id: BookId) -> AppResult<Book>;

    async fn restore(&self, id: BookId) -> AppResult<Book>;

    /// Check that the backing storage is reachable
    async fn ping(&self) -> AppResult<()>;
}

pub(crate) fn book_not_found(id: BookId) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}
