//! Repository layer for database operations

pub mod authors;
pub mod books;
pub mod categories;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        author::Author,
        book::{Book, BookUpsert},
        category::Category,
    },
};

/// Book persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Book>>;
    async fn find_by_id(&self, book_id: i64) -> AppResult<Option<Book>>;
    /// Insert or update keyed on `book_id`; a missing ID lets the store
    /// assign one
    async fn save(&self, book: &BookUpsert) -> AppResult<Book>;
}

/// Author persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorStore: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Author>>;
    async fn find_by_id(&self, author_id: i64) -> AppResult<Option<Author>>;
    /// Natural-key lookup. A `None` name binds SQL NULL, which matches no
    /// row and therefore always falls through to creation.
    async fn find_by_name(&self, name: Option<String>) -> AppResult<Option<Author>>;
    async fn insert(&self, name: Option<String>) -> AppResult<Author>;
    /// Titles of all books referencing the author, in row order
    async fn book_titles(&self, author_id: i64) -> AppResult<Vec<String>>;
}

/// Category persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Category>>;
    async fn find_by_name(&self, name: Option<String>) -> AppResult<Option<Category>>;
    async fn insert(&self, name: Option<String>) -> AppResult<Category>;
    async fn book_titles(&self, category_id: i64) -> AppResult<Vec<String>>;
    async fn find_books(&self, category_id: i64) -> AppResult<Vec<Book>>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: books::BooksRepository,
    pub authors: authors::AuthorsRepository,
    pub categories: categories::CategoriesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            authors: authors::AuthorsRepository::new(pool.clone()),
            categories: categories::CategoriesRepository::new(pool.clone()),
            pool,
        }
    }
}
