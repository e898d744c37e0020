//! PostgreSQL-backed book store

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{book_not_found, BookStore};
use crate::{
    error::AppResult,
    models::book::{Book, BookFields, BookId},
};

#[derive(Clone)]
pub struct PgBookStore {
    pool: Pool<Postgres>,
}

impl PgBookStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn set_deleted(&self, id: BookId, is_deleted: bool) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books SET is_deleted = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(is_deleted)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| book_not_found(id))
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn create(&self, fields: &BookFields) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, genre, publication_date, description, is_deleted)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            RETURNING *
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.genre)
        .bind(fields.publication_date)
        .bind(&fields.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_active(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE is_deleted = FALSE ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_deleted(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE is_deleted = TRUE ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: BookId) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| book_not_found(id))
    }

    async fn update(&self, id: BookId, fields: &BookFields) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, author = $2, genre = $3, publication_date = $4,
                description = $5, updated_at = NOW()
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.genre)
        .bind(fields.publication_date)
        .bind(&fields.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| book_not_found(id))
    }

    async fn soft_delete(&self, id: BookId) -> AppResult<Book> {
        self.set_deleted(id, true).await
    }

    async fn restore(&self, id: BookId) -> AppResult<Book> {
        self.set_deleted(id, false).await
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
