//! Book model and transfer records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book row, joined with the names of its author and category.
///
/// The name columns come from LEFT JOINs, so a book without an author or
/// category reference carries `None` there.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub book_id: i64,
    pub title: Option<String>,
    pub isbn: Option<i64>,
    pub publication_year: Option<String>,
    pub author_id: Option<i64>,
    pub category_id: Option<i64>,
    pub author_name: Option<String>,
    pub category_name: Option<String>,
}

/// Writable book fields. A missing `book_id` lets the store assign one on
/// save; a present one is honored as-is, existing row or not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookUpsert {
    pub book_id: Option<i64>,
    pub title: Option<String>,
    pub isbn: Option<i64>,
    pub publication_year: Option<String>,
    pub author_id: Option<i64>,
    pub category_id: Option<i64>,
}

impl BookUpsert {
    /// Base record carrying only a caller-supplied ID
    pub fn with_id(book_id: i64) -> Self {
        Self {
            book_id: Some(book_id),
            ..Self::default()
        }
    }
}

impl From<&Book> for BookUpsert {
    fn from(book: &Book) -> Self {
        Self {
            book_id: Some(book.book_id),
            title: book.title.clone(),
            isbn: book.isbn,
            publication_year: book.publication_year.clone(),
            author_id: book.author_id,
            category_id: book.category_id,
        }
    }
}

/// Flattened book projection exposed at the API boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub book_id: Option<i64>,
    pub title: Option<String>,
    pub author_name: Option<String>,
    pub category_name: Option<String>,
    pub isbn: Option<i64>,
    pub publication_year: Option<String>,
}

impl BookDto {
    /// Flatten a joined book row into its transfer shape
    pub fn from_record(book: &Book) -> Self {
        Self {
            book_id: Some(book.book_id),
            title: book.title.clone(),
            author_name: book.author_name.clone(),
            category_name: book.category_name.clone(),
            isbn: book.isbn,
            publication_year: book.publication_year.clone(),
        }
    }
}
