//! Catalog management service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::book::{Book, BookFields, BookId},
    repository::BookStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn BookStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// Create a new book
    pub async fn create_book(&self, fields: &BookFields) -> AppResult<Book> {
        let book = self.store.create(fields).await?;
        tracing::info!(book_id = book.id, "Catalog: book created");
        Ok(book)
    }

    /// List books visible in the catalog (never includes deleted ones)
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.store.list_active().await
    }

    /// List soft-deleted books
    pub async fn list_deleted_books(&self) -> AppResult<Vec<Book>> {
        self.store.list_deleted().await
    }

    pub async fn get_book(&self, id: BookId) -> AppResult<Book> {
        self.store.get(id).await
    }

    /// Update an existing book, deleted or not
    pub async fn update_book(&self, id: BookId, fields: &BookFields) -> AppResult<Book> {
        let book = self.store.update(id, fields).await?;
        tracing::info!(book_id = id, "Catalog: book updated");
        Ok(book)
    }

    /// Soft-delete a book
    pub async fn delete_book(&self, id: BookId) -> AppResult<Book> {
        let book = self.store.soft_delete(id).await?;
        tracing::info!(book_id = id, "Catalog: book soft-deleted");
        Ok(book)
    }

    /// Restore a soft-deleted book. Restoring an active book succeeds unchanged.
    pub async fn restore_book(&self, id: BookId) -> AppResult<Book> {
        let book = self.store.restore(id).await?;
        tracing::info!(book_id = id, "Catalog: book restored");
        Ok(book)
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
