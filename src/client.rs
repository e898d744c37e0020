//! Catalog client used by the front end.
//!
//! Keeps a local copy of the active books fetched from the server. Text search
//! runs over that copy only and never hits the network.

use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

use crate::models::book::{Book, BookActionResponse, BookFields, BookId, SUGGESTED_GENRES};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Book {0} not found")]
    NotFound(BookId),

    #[error("Unexpected status: {0}")]
    Status(u16),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Case-insensitive substring search over title, author and genre.
/// An empty term returns every book.
/// The term is used as typed, surrounding spaces included.
pub fn filter_books<'a>(books: &'a [Book], term: &str) -> Vec<&'a Book> {
    books.iter().filter(|b| b.matches(term)).collect()
}

pub struct CatalogClient {
    http: Client,
    base_url: String,
    books: Vec<Book>,
}

impl CatalogClient {
    /// `base_url` points at the API root, e.g. `http://localhost:5003/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            books: Vec::new(),
        }
    }

    /// Local copy of the active books
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn search(&self, term: &str) -> Vec<&Book> {
        filter_books(&self.books, term)
    }

    /// Refetch the book list.
    ///
    /// The server already returns active books only; deleted ones are dropped
    /// here as well in case an older server returns everything.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        let response = self.http.get(self.url("/books")).send().await?;
        let books: Vec<Book> = check(response, None).await?.json().await?;
        self.books = books.into_iter().filter(Book::is_active).collect();
        tracing::debug!(count = self.books.len(), "Client: book list refreshed");
        Ok(())
    }

    pub async fn add(&mut self, fields: &BookFields) -> ClientResult<Book> {
        let response = self.http.post(self.url("/books")).json(fields).send().await?;
        let created: Book = check(response, None).await?.json().await?;
        self.refresh().await?;
        Ok(created)
    }

    pub async fn update(&mut self, id: BookId, fields: &BookFields) -> ClientResult<Book> {
        let response = self
            .http
            .put(self.url(&format!("/books/{}", id)))
            .json(fields)
            .send()
            .await?;
        let updated: Book = check(response, Some(id)).await?.json().await?;
        self.refresh().await?;
        Ok(updated)
    }

    /// Soft-delete a book and drop it from the local list without refetching
    pub async fn delete(&mut self, id: BookId) -> ClientResult<Book> {
        let response = self.http.put(self.url(&format!("/books/delete/{}", id))).send().await?;
        let body: BookActionResponse = check(response, Some(id)).await?.json().await?;
        self.books.retain(|b| b.id != id);
        Ok(body.book)
    }

    pub async fn restore(&mut self, id: BookId) -> ClientResult<Book> {
        let response = self.http.put(self.url(&format!("/books/restore/{}", id))).send().await?;
        let body: BookActionResponse = check(response, Some(id)).await?.json().await?;
        self.refresh().await?;
        Ok(body.book)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn check(response: Response, id: Option<BookId>) -> ClientResult<Response> {
    match (response.status(), id) {
        (status, _) if status.is_success() => Ok(response),
        (StatusCode::NOT_FOUND, Some(id)) => Err(ClientError::NotFound(id)),
        (status, _) => {
            tracing::error!(status = status.as_u16(), "Client: request failed");
            Err(ClientError::Status(status.as_u16()))
        }
    }
}

/// Form state for adding or editing a book
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookDraft {
    /// Set when editing an existing book
    pub editing: Option<BookId>,
    pub fields: BookFields,
}

impl BookDraft {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Start editing an existing book
    pub fn from_book(book: &Book) -> Self {
        Self {
            editing: Some(book.id),
            fields: BookFields::from(book),
        }
    }

    /// Title and author are required before the form can be submitted.
    /// The server itself does not enforce this.
    pub fn can_submit(&self) -> bool {
        !self.fields.title.is_empty() && !self.fields.author.is_empty()
    }

    /// Genres offered by the form's picker. Free text is accepted as well.
    pub fn genre_options() -> &'static [&'static str] {
        &SUGGESTED_GENRES
    }

    pub fn reset(&mut self) {
        *self = Self::blank();
    }

    pub fn to_fields(&self) -> BookFields {
        self.fields.clone()
    }

    /// Add or update depending on mode, then clear the form
    pub async fn submit(&mut self, client: &mut CatalogClient) -> ClientResult<Book> {
        let fields = self.to_fields();
        let book = match self.editing {
            Some(id) => client.update(id, &fields).await?,
            None => client.add(&fields).await?,
        };
        self.reset();
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn book(id: BookId, title: &str, author: &str, genre: Option<&str>) -> Book {
        let now = Utc::now();
        Book {
            id,
            title: title.into(),
            author: author.into(),
            genre: genre.map(Into::into),
            publication_date: None,
            description: None,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book(1, "Dune", "Frank Herbert", Some("Science Fiction")),
            book(2, "Emma", "Jane Austen", Some("Romance")),
            book(3, "Untitled", "Anonymous", None),
        ]
    }

    fn ids(books: Vec<&Book>) -> Vec<BookId> {
        books.into_iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_filter_matches_each_field() {
        let books = shelf();
        assert_eq!(ids(filter_books(&books, "DUNE")), vec![1]);
        assert_eq!(ids(filter_books(&books, "austen")), vec![2]);
        assert_eq!(ids(filter_books(&books, "fiction")), vec![1]);
    }

    #[test]
    fn test_empty_term_returns_all() {
        let books = shelf();
        assert_eq!(ids(filter_books(&books, "")), vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_genre_never_matches_genre_term() {
        let books = shelf();
        assert_eq!(ids(filter_books(&books, "romance")), vec![2]);
    }

    #[test]
    fn test_term_is_not_trimmed() {
        let books = shelf();
        assert!(filter_books(&books, " dune ").is_empty());
        assert_eq!(ids(filter_books(&books, "frank ")), vec![1]);
    }

    #[test]
    fn test_genre_options() {
        let options = BookDraft::genre_options();
        assert_eq!(options.len(), 9);
        assert_eq!(options.first(), Some(&"Fiction"));
        assert!(options.contains(&"Science Fiction"));
        assert!(options.contains(&"Self-Help"));
    }

    #[test]
    fn test_draft_requires_title_and_author() {
        let mut draft = BookDraft::blank();
        assert!(!draft.can_submit());
        draft.fields.title = "Dune".into();
        assert!(!draft.can_submit());
        draft.fields.author = "Herbert".into();
        assert!(draft.can_submit());
        draft.reset();
        assert_eq!(draft, BookDraft::blank());
    }

    #[test]
    fn test_draft_from_book_enters_edit_mode() {
        let b = book(7, "Emma", "Jane Austen", Some("Romance"));
        let draft = BookDraft::from_book(&b);
        assert_eq!(draft.editing, Some(7));
        assert_eq!(draft.to_fields().genre.as_deref(), Some("Romance"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = CatalogClient::new("http://localhost:5003/api/");
        assert_eq!(client.url("/books"), "http://localhost:5003/api/books");
        assert!(client.books().is_empty());
    }
}
