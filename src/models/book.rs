//! Book record model and request payloads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// System-assigned book identifier
pub type BookId = i32;

/// Category labels offered by the form. Any other genre text is accepted.
pub const SUGGESTED_GENRES: [&str; 9] = [
    "Fiction",
    "Non-Fiction",
    "Science Fiction",
    "Fantasy",
    "Mystery",
    "Romance",
    "Biography",
    "History",
    "Self-Help",
];

/// Persisted book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub description: Option<String>,
    /// Soft-delete flag; deleted books are hidden from listing but kept in storage
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Whether this book is visible to listing
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    /// Case-insensitive substring match over title, author and genre
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        let needle = needle.as_str();
        self.title.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self
                .genre
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .contains(needle)
    }
}

/// Editable fields, used as the body of both create and update.
///
/// Fields that the store assigns (`id`, `is_deleted`, timestamps) are ignored
/// if a client sends them back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub publication_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
}

impl BookFields {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Default::default()
        }
    }
}

impl From<&Book> for BookFields {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            publication_date: book.publication_date,
            description: book.description.clone(),
        }
    }
}

/// Response for soft-delete and restore
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookActionResponse {
    pub message: String,
    pub book: Book,
}

/// Accepts `null`, `""`, `YYYY-MM-DD` or an RFC 3339 timestamp (date part kept).
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid publication_date: {}", s))),
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}
