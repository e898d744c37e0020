//! In-process book store.
//!
//! Keeps the whole collection in a `BTreeMap` keyed by id, so iteration order
//! is insertion order. Ids come from a counter that only moves forward.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{book_not_found, BookStore};
use crate::{
    error::AppResult,
    models::book::{Book, BookFields, BookId},
};

#[derive(Default)]
struct Collection {
    last_id: BookId,
    books: BTreeMap<BookId, Book>,
}

#[derive(Default)]
pub struct MemoryBookStore {
    inner: RwLock<Collection>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn list_where(&self, is_deleted: bool) -> Vec<Book> {
        let inner = self.inner.read().await;
        inner
            .books
            .values()
            .filter(|b| b.is_deleted == is_deleted)
            .cloned()
            .collect()
    }

    async fn modify<F>(&self, id: BookId, apply: F) -> AppResult<Book>
    where
        F: FnOnce(&mut Book) + Send,
    {
        let mut inner = self.inner.write().await;
        let book = inner.books.get_mut(&id).ok_or_else(|| book_not_found(id))?;
        apply(book);
        book.updated_at = Utc::now();
        Ok(book.clone())
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn create(&self, fields: &BookFields) -> AppResult<Book> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let now = Utc::now();
        let book = Book {
            id: inner.last_id,
            title: fields.title.clone(),
            author: fields.author.clone(),
            genre: fields.genre.clone(),
            publication_date: fields.publication_date,
            description: fields.description.clone(),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        inner.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn list_active(&self) -> AppResult<Vec<Book>> {
        Ok(self.list_where(false).await)
    }

    async fn list_deleted(&self) -> AppResult<Vec<Book>> {
        Ok(self.list_where(true).await)
    }

    async fn get(&self, id: BookId) -> AppResult<Book> {
        let inner = self.inner.read().await;
        inner.books.get(&id).cloned().ok_or_else(|| book_not_found(id))
    }

    async fn update(&self, id: BookId, fields: &BookFields) -> AppResult<Book> {
        self.modify(id, |book| {
            book.title = fields.title.clone();
            book.author = fields.author.clone();
            book.genre = fields.genre.clone();
            book.publication_date = fields.publication_date;
            book.description = fields.description.clone();
        })
        .await
    }

    async fn soft_delete(&self, id: BookId) -> AppResult<Book> {
        self.modify(id, |book| book.is_deleted = true).await
    }

    async fn restore(&self, id: BookId) -> AppResult<Book> {
        self.modify(id, |book| book.is_deleted = false).await
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
